use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::{MemorialRecord, is_canonical_slug};

/// Something worth warning about in a set of records. None of these stop a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Two rows share a slug; the later page overwrites the earlier one.
    DuplicateSlug { slug: String, first_row: usize, row: usize },
    /// An override slug that `slugify` would never produce.
    NonCanonicalSlug { slug: String, row: usize },
    /// An image path with no file behind it under the output root.
    MissingImage { path: String, row: usize },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicateSlug { slug, first_row, row } => {
                write!(f, "row {row}: slug '{slug}' already used by row {first_row}")
            },
            ValidationIssue::NonCanonicalSlug { slug, row } => {
                write!(f, "row {row}: slug '{slug}' is not lowercase kebab-case")
            },
            ValidationIssue::MissingImage { path, row } => {
                write!(f, "row {row}: image '{path}' not found")
            },
        }
    }
}

/// Check slugs across a full set of records.
///
/// ```
/// use memorial_data::{MemorialRecord, ValidationIssue, validate_records};
///
/// let a = MemorialRecord { row: 1, name: "Ann".into(), slug: "ann".into(), ..Default::default() };
/// let b = MemorialRecord { row: 2, name: "Ann".into(), slug: "ann".into(), ..Default::default() };
/// assert_eq!(
///     validate_records(&[a, b]),
///     vec![ValidationIssue::DuplicateSlug { slug: "ann".into(), first_row: 1, row: 2 }]
/// );
/// ```
pub fn validate_records(records: &[MemorialRecord]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for record in records {
        if !is_canonical_slug(&record.slug) {
            issues.push(ValidationIssue::NonCanonicalSlug {
                slug: record.slug.clone(),
                row: record.row,
            });
        }
        if let Some(&first_row) = seen.get(record.slug.as_str()) {
            issues.push(ValidationIssue::DuplicateSlug {
                slug: record.slug.clone(),
                first_row,
                row: record.row,
            });
        } else {
            seen.insert(&record.slug, record.row);
        }
    }

    issues
}

/// Report image paths that do not resolve to a file under `root`.
///
/// Absolute URLs are skipped; they are not ours to check.
pub fn missing_images(records: &[MemorialRecord], root: &Path) -> Vec<ValidationIssue> {
    records
        .iter()
        .flat_map(|record| record.images.iter().map(move |image| (record.row, image)))
        .filter(|(_, image)| !image.path.contains("://") && !root.join(&image.path).is_file())
        .map(|(row, image)| ValidationIssue::MissingImage {
            path: image.path.clone(),
            row,
        })
        .collect()
}
