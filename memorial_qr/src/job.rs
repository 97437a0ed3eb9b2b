//! Input line parsing.

/// Label given to lines that carry no label of their own.
pub const DEFAULT_LABEL: &str = "qr";

/// One image to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrJob {
    pub label: String,
    pub url: String,
}

impl QrJob {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// `label,url` splits on the first comma; neither half is trimmed. A line
    /// with no comma is all url and gets [`DEFAULT_LABEL`], so every such line
    /// lands on `qr.png` and later ones overwrite earlier ones. A url of
    /// exactly `qr` swaps places with the label.
    ///
    /// ```
    /// use memorial_qr::QrJob;
    ///
    /// let job = QrJob::parse("Gate A,https://example.com/a").unwrap();
    /// assert_eq!((job.label.as_str(), job.url.as_str()), ("Gate A", "https://example.com/a"));
    ///
    /// let bare = QrJob::parse("https://example.com/b").unwrap();
    /// assert_eq!((bare.label.as_str(), bare.url.as_str()), ("qr", "https://example.com/b"));
    ///
    /// assert!(QrJob::parse("   ").is_none());
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (mut label, mut url) = match line.split_once(',') {
            Some((label, url)) => (label.to_string(), url.to_string()),
            None => (DEFAULT_LABEL.to_string(), line.to_string()),
        };
        // TODO: confirm with the signage owners whether bare-url lines should get
        // distinct file names; until then they all collide on qr.png.
        if url == DEFAULT_LABEL {
            url = std::mem::replace(&mut label, DEFAULT_LABEL.to_string());
        }

        Some(Self { label, url })
    }

    /// Output file name: label with spaces as hyphens, lowercased, plus `.png`.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.label.replace(' ', "-").to_lowercase())
    }
}

/// Parse every non-blank line of `input`.
pub fn parse_jobs(input: &str) -> impl Iterator<Item = QrJob> + '_ {
    input.lines().filter_map(QrJob::parse)
}
