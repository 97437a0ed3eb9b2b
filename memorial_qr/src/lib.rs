//! memorial_qr: one QR code PNG per `label,url` line.
//!
//! Input is plain text, one job per line. Each job becomes
//! `<out>/<label>.png`, with the label lowercased and spaces turned into
//! hyphens. When the crate is built without the `qr` feature every image is a
//! placeholder carrying a short notice instead of a code.

#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub mod encode;
mod glyphs;
pub mod job;

pub use encode::{make_qr, placeholder};
pub use job::{DEFAULT_LABEL, QrJob, parse_jobs};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("unable to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to create directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to save '{}': {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, QrError>;

/// Create the output directory if it is not there yet.
///
/// # Errors
/// Propagates the filesystem error.
pub fn ensure_out_dir(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).map_err(|source| QrError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })
}

/// Read and parse every job in `input`, in file order.
///
/// # Errors
/// The input file cannot be read as UTF-8 text.
pub fn read_jobs(input: &Path) -> Result<Vec<QrJob>> {
    let text = fs::read_to_string(input).map_err(|source| QrError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    Ok(parse_jobs(&text).collect())
}

/// Render one job and save it as a PNG under `out_dir`, replacing any file of the same name.
///
/// # Errors
/// The image cannot be written.
pub fn write_job(job: &QrJob, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(job.file_name());
    make_qr(&job.url)
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| QrError::Save {
            path: path.clone(),
            source,
        })?;
    debug!("'{}' -> {}", job.url, path.display());
    Ok(path)
}
