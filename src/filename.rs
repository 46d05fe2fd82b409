//! Output filenames.
//!
//! Stems are derived from document metadata and reduced to one safe path
//! segment. The `.md` extension is added by [`crate::output`].

use crate::metadata::DocumentMetadata;
use crate::patterns::{PATH_ILLEGAL, WHITESPACE_RUN};

/// Stem used when sanitizing leaves nothing.
pub const FALLBACK_STEM: &str = "untitled";

/// Longest stem produced, in characters.
pub const MAX_STEM_CHARS: usize = 200;

/// Reduce text to a single valid path segment.
///
/// Whitespace runs become `_`, path-illegal and control characters become
/// `_`, and leading or trailing dots and underscores are dropped.
///
/// ```
/// use docs2md::filename::sanitize_filename;
///
/// assert_eq!(sanitize_filename("  Getting started: a/b  "), "Getting_started__a_b");
/// assert_eq!(sanitize_filename("..."), "untitled");
/// ```
#[must_use]
pub fn sanitize_filename(text: &str) -> String {
    let spaced = WHITESPACE_RUN.replace_all(text.trim(), "_");
    let cleaned: String = PATH_ILLEGAL
        .replace_all(&spaced, "_")
        .chars()
        .map(|c| if c.is_control() { '_' } else { c })
        .take(MAX_STEM_CHARS)
        .collect();
    let cleaned = cleaned.trim_matches(|c| c == '.' || c == '_');

    if cleaned.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Stem of a documentation page: `NN_<title>`, or `<title>` for index 0.
#[must_use]
pub fn docs_filename(title: &str, index: usize) -> String {
    if index > 0 {
        sanitize_filename(&format!("{index:02}_{title}"))
    } else {
        sanitize_filename(title)
    }
}

/// Stem of a blog post: `(<date>)<title>_<author>`, or `<title>_<author>`
/// when no date was read.
#[must_use]
pub fn blog_filename(metadata: &DocumentMetadata) -> String {
    match &metadata.date {
        Some(date) => sanitize_filename(&format!("({date}){}_{}", metadata.title, metadata.author)),
        None => sanitize_filename(&format!("{}_{}", metadata.title, metadata.author)),
    }
}
