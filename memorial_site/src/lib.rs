//! memorial_site: static memorial pages from a CSV of people records.
//!
//! One run reads every row of the CSV, writes
//! `<out>/people/<slug>/index.html` for each named person, and rebuilds
//! `<out>/map.html` linking them all in CSV order. Pages reference a
//! stylesheet at `<out>/assets/style.css` that is maintained by hand.

#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod generate;
pub mod ingest;
pub mod render;

pub use config::SiteConfig;
pub use generate::{BuildOptions, BuildSummary, build_site, write_map, write_page};
pub use ingest::{Records, read_records};
pub use render::{render_map, render_page};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a site build.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("CSV not found: {}", .0.display())]
    CsvNotFound(PathBuf),
    #[error("reading CSV '{}': {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("unable to create directory '{}': {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to read site config '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid site config '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, SiteError>;
