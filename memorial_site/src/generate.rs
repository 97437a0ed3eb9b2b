//! Full-site build: read, check, write pages, write the map.
//!
//! Writes are not transactional. A failure partway leaves the pages already
//! written in place and returns the error.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use memorial_data::{MAP_FILE, MemorialRecord, PEOPLE_DIR, missing_images, validate_records};

use crate::config::ASSETS_DIR;
use crate::render::{render_map, render_page};
use crate::{Result, SiteConfig, SiteError, read_records};

/// Inputs for one build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub csv_path: PathBuf,
    pub out_dir: PathBuf,
    pub config: SiteConfig,
}

/// What a build produced.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    /// Number of person pages written.
    pub pages: usize,
    pub map_path: PathBuf,
    /// Warnings raised while checking the records; already logged.
    pub issues: Vec<memorial_data::ValidationIssue>,
}

/// Build every page and the map page.
///
/// The CSV is read in full before anything is written, so a missing or
/// unreadable CSV leaves the output tree untouched.
///
/// # Errors
/// Missing or unreadable CSV, or any directory/file write failure.
pub fn build_site(options: &BuildOptions) -> Result<BuildSummary> {
    let records = read_records(&options.csv_path)?.collect::<Result<Vec<_>>>()?;
    info!("{} memorial records read", records.len());

    ensure_dirs(&options.out_dir)?;

    let mut issues = validate_records(&records);
    issues.extend(missing_images(&records, &options.out_dir));
    for issue in &issues {
        warn!("{issue}");
    }

    for record in &records {
        write_page(&options.out_dir, record, &options.config)?;
    }
    let map_path = write_map(&options.out_dir, &records, &options.config)?;
    info!("{} pages and {} written", records.len(), map_path.display());

    Ok(BuildSummary {
        pages: records.len(),
        map_path,
        issues,
    })
}

/// Write one person's page under `out_dir`, replacing any previous version.
///
/// # Errors
/// Directory creation or file write failure.
pub fn write_page(out_dir: &Path, record: &MemorialRecord, config: &SiteConfig) -> Result<PathBuf> {
    let path = out_dir.join(record.page_path());
    write_file(&path, &render_page(record, config))?;
    debug!("row {}: wrote {}", record.row, path.display());
    Ok(path)
}

/// Write the map page under `out_dir`, replacing any previous version.
///
/// # Errors
/// Directory creation or file write failure.
pub fn write_map(out_dir: &Path, records: &[MemorialRecord], config: &SiteConfig) -> Result<PathBuf> {
    let path = out_dir.join(MAP_FILE);
    write_file(&path, &render_map(records, config))?;
    Ok(path)
}

fn ensure_dirs(out_dir: &Path) -> Result<()> {
    for dir in [out_dir.to_path_buf(), out_dir.join(ASSETS_DIR), out_dir.join(PEOPLE_DIR)] {
        fs::create_dir_all(&dir).map_err(|source| SiteError::CreateDir { path: dir.clone(), source })?;
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SiteError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    })
}
