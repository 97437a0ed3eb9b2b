//! Slug derivation for memorial page directories.

use unicode_normalization::UnicodeNormalization;

/// Derive a directory-safe slug from a display name.
///
/// The name is trimmed and lowercased, decomposed (NFKD) with every non-ASCII
/// code point dropped, and each run of characters outside `[a-z0-9]` becomes a
/// single hyphen. Leading and trailing hyphens never survive.
///
/// A name made only of non-ASCII or punctuation characters yields an empty
/// string; callers decide on a fallback.
///
/// ```
/// use memorial_data::slugify;
///
/// assert_eq!(slugify("  José  Núñez "), "jose-nunez");
/// assert_eq!(slugify("O'Brien, Mary-Kate"), "o-brien-mary-kate");
/// assert_eq!(slugify("李"), "");
/// ```
pub fn slugify(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut pending_dash = false;
    for ch in lowered.nfkd().filter(char::is_ascii) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    collapse_dashes(slug.trim_matches('-'))
}

/// True when `slug` is exactly the shape [`slugify`] produces for a non-empty result.
pub fn is_canonical_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn collapse_dashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch == '-' && out.ends_with('-') {
            continue;
        }
        out.push(ch);
    }
    out
}
