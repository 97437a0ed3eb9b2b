//! CSV ingestion.
//!
//! Rows are read lazily and normalized into [`MemorialRecord`]s. Columns are
//! looked up by header name; a column missing from the header, or a field
//! missing from a short row, reads as an empty string. Every field is trimmed
//! and rows whose `name` is blank are skipped.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info, warn};
use memorial_data::{ImageRef, MAX_IMAGES, MemorialRecord, slugify};

use crate::{Result, SiteError};

const NAME: &str = "name";
const SLUG_OVERRIDE: &str = "slug(optional)";
const YEARS: &str = "years";
const LOCATION: &str = "location";
const STORY: &str = "story";

/// Open `path` and return an iterator over its memorial records.
///
/// # Errors
/// [`SiteError::CsvNotFound`] if nothing exists at `path`; [`SiteError::Csv`] if
/// the file cannot be opened or its header row cannot be read.
pub fn read_records(path: &Path) -> Result<Records> {
    if !path.exists() {
        return Err(SiteError::CsvNotFound(path.to_path_buf()));
    }
    let csv_err = |source| SiteError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new().flexible(true).from_path(path).map_err(csv_err)?;
    let columns = Columns::from_headers(reader.headers().map_err(csv_err)?);
    info!("reading memorial records from {}", path.display());

    Ok(Records {
        reader,
        columns,
        path: path.to_path_buf(),
        row: 0,
    })
}

/// Lazy sequence of records from one CSV file. Not restartable.
pub struct Records {
    reader: csv::Reader<File>,
    columns: Columns,
    path: PathBuf,
    row: usize,
}

impl Iterator for Records {
    type Item = Result<MemorialRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut raw = StringRecord::new();
        loop {
            match self.reader.read_record(&mut raw) {
                Ok(true) => {},
                Ok(false) => return None,
                Err(source) => {
                    return Some(Err(SiteError::Csv {
                        path: self.path.clone(),
                        source,
                    }));
                },
            }
            self.row += 1;
            match self.columns.record(&raw, self.row) {
                Some(record) => return Some(Ok(record)),
                None => debug!("row {}: blank name, skipped", self.row),
            }
        }
    }
}

/// Header positions of the columns we read.
#[derive(Debug)]
struct Columns {
    name: Option<usize>,
    slug: Option<usize>,
    years: Option<usize>,
    location: Option<usize>,
    story: Option<usize>,
    images: [(Option<usize>, Option<usize>); MAX_IMAGES],
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        // Last occurrence wins when a header is repeated.
        let find = |key: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, header)| header.trim_start_matches('\u{feff}') == key)
                .map(|(idx, _)| idx)
                .last()
        };

        let mut images = [(None, None); MAX_IMAGES];
        for (i, pair) in images.iter_mut().enumerate() {
            let n = i + 1;
            *pair = (
                find(format!("image{n}").as_str()),
                find(format!("image{n}_alt").as_str()),
            );
        }

        Self {
            name: find(NAME),
            slug: find(SLUG_OVERRIDE),
            years: find(YEARS),
            location: find(LOCATION),
            story: find(STORY),
            images,
        }
    }

    /// Normalize one raw row; `None` when the row has no name.
    fn record(&self, raw: &StringRecord, row: usize) -> Option<MemorialRecord> {
        let name = field(raw, self.name);
        if name.is_empty() {
            return None;
        }

        let images = self
            .images
            .iter()
            .filter_map(|&(path_col, alt_col)| {
                let path = field(raw, path_col);
                (!path.is_empty()).then(|| ImageRef {
                    path: path.to_string(),
                    alt: non_blank(field(raw, alt_col)),
                })
            })
            .collect();

        let slug_override = non_blank(field(raw, self.slug));
        let slug = MemorialRecord::resolve_slug(name, slug_override.as_deref(), row);
        if slug_override.is_none() && slugify(name).is_empty() {
            warn!("row {row}: '{name}' has no ASCII letters or digits; using slug '{slug}'");
        }
        Some(MemorialRecord {
            row,
            name: name.to_string(),
            slug,
            years: non_blank(field(raw, self.years)),
            location: non_blank(field(raw, self.location)),
            story: non_blank(field(raw, self.story)),
            images,
        })
    }
}

fn field(raw: &StringRecord, column: Option<usize>) -> &str {
    column.and_then(|idx| raw.get(idx)).unwrap_or_default().trim()
}

fn non_blank(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
