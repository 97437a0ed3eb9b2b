use std::path::PathBuf;

use crate::slug::slugify;

/// Number of image/alt column pairs read from each CSV row.
pub const MAX_IMAGES: usize = 4;

/// Alt text used when a photo has none of its own.
pub const DEFAULT_ALT: &str = "Memorial photo";

/// Directory, relative to the output root, holding one subdirectory per person.
pub const PEOPLE_DIR: &str = "people";

/// File name of the index page, relative to the output root.
pub const MAP_FILE: &str = "map.html";

/// One photo attached to a memorial page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Path relative to the output root, emitted as-is (escaped) in `src`.
    pub path: String,
    pub alt: Option<String>,
}

impl ImageRef {
    /// Alt text to render, falling back to [`DEFAULT_ALT`].
    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().unwrap_or(DEFAULT_ALT)
    }
}

/// One person's memorial data, normalized from a CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemorialRecord {
    /// 1-based data row in the source CSV (header excluded).
    pub row: usize,
    pub name: String,
    pub slug: String,
    pub years: Option<String>,
    pub location: Option<String>,
    pub story: Option<String>,
    pub images: Vec<ImageRef>,
}

impl MemorialRecord {
    /// Pick the slug for a record: the override if given, else one derived from `name`.
    ///
    /// Names that slugify to nothing fall back to `memorial-<row>` so every
    /// record still gets its own directory.
    ///
    /// ```
    /// use memorial_data::MemorialRecord;
    ///
    /// assert_eq!(MemorialRecord::resolve_slug("Jane Doe", None, 1), "jane-doe");
    /// assert_eq!(MemorialRecord::resolve_slug("Jane Doe", Some("grandma"), 1), "grandma");
    /// assert_eq!(MemorialRecord::resolve_slug("李", None, 7), "memorial-7");
    /// ```
    pub fn resolve_slug(name: &str, slug_override: Option<&str>, row: usize) -> String {
        if let Some(slug) = slug_override {
            return slug.to_string();
        }
        let derived = slugify(name);
        if derived.is_empty() {
            format!("memorial-{row}")
        } else {
            derived
        }
    }

    /// Non-blank story lines, trimmed, in order. Each becomes one paragraph.
    ///
    /// Any of [`is_line_break`]'s characters ends a line.
    pub fn story_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.story
            .as_deref()
            .unwrap_or_default()
            .split(is_line_break)
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }

    /// Location of this record's page, relative to the output root.
    pub fn page_path(&self) -> PathBuf {
        [PEOPLE_DIR, self.slug.as_str(), "index.html"].iter().collect()
    }

    /// Link to this record's page from the map page.
    pub fn href(&self) -> String {
        format!("./{PEOPLE_DIR}/{}/", self.slug)
    }
}

/// Line terminators recognised in story text: CR, LF, VT, FF, the file/group/record
/// separators, NEL, and the Unicode line and paragraph separators.
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
