//! Shared data model for the memorial site tools.

pub mod defs;
pub mod slug;
pub mod validate;

pub use defs::*;
pub use slug::{is_canonical_slug, slugify};
pub use validate::{ValidationIssue, missing_images, validate_records};
