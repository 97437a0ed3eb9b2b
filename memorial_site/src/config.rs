//! Site text and default locations.
//!
//! The wording printed on every page lives in [`SiteConfig`]. Defaults carry the
//! text of the wedding memorial site; a TOML file passed with `--config` may
//! override any subset of the fields.

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::{Result, SiteError};

/// Output root used when `--out` is not given.
pub const DEFAULT_OUT_DIR: &str = "docs";

/// CSV file name looked up inside the output root when no path is given.
pub const DEFAULT_CSV_NAME: &str = "memorials_completed_with_images.csv";

/// Directory under the output root holding the hand-maintained stylesheet.
pub const ASSETS_DIR: &str = "assets";

/// Text shared by every generated page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Line shown in every page footer.
    pub footer_line: String,
    /// Title and heading of the map page.
    pub map_title: String,
    /// Paragraph under the map page heading.
    pub map_intro: String,
    /// `<meta name="description">` of the map page.
    pub map_description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            footer_line: "Family memorials for Clarissa and Robert\u{2019}s wedding on 10/25/2025 at Camp \
                          Pinnacle in Flat Rock, NC."
                .to_string(),
            map_title: "Memorials & Locations".to_string(),
            map_intro: "These are family memorials created for Clarissa and Robert\u{2019}s wedding at Camp \
                        Pinnacle. Walk the camp to find each memorial. Every page includes a few images and a \
                        short reflection."
                .to_string(),
            map_description: "Family memorials for Clarissa and Robert\u{2019}s wedding at Camp Pinnacle."
                .to_string(),
        }
    }
}

impl SiteConfig {
    /// Load site text from a TOML file. Keys left out keep their defaults.
    ///
    /// # Errors
    /// Fails if the file cannot be read, is not valid TOML, or names an unknown key.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SiteError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| SiteError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!("site text loaded from {}", path.display());
        Ok(config)
    }
}
