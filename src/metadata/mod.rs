//! Metadata extraction module.
//!
//! Derives the title, author, date and description of a page. The title
//! seeds a filename, so it is always non-empty, capped at 100 characters and
//! free of path-illegal characters.

pub mod dom_extraction;
pub mod meta_tags;

use dom_query::Document;
use serde::Serialize;
use tracing::debug;

use crate::options::Options;
use crate::page::{ContentRegion, Page};
use crate::patterns::PATH_ILLEGAL;

pub use dom_extraction::{first_heading, take_byline, title_element, Byline};
pub use meta_tags::{description, og_title, twitter_title};

/// Title used when no source yields one.
pub const UNTITLED: &str = "Untitled";

/// Maximum title length in characters.
pub const MAX_TITLE_CHARS: usize = 100;

/// Metadata carried into the Markdown header and the output filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentMetadata {
    /// Sanitized page title, never empty.
    pub title: String,
    /// Author from the by-line, or the configured sentinel.
    pub author: String,
    /// Publication date exactly as written in the by-line.
    pub date: Option<String>,
    /// `<meta name="description">` content.
    pub description: Option<String>,
}

/// Extract metadata from the whole page and the content region.
///
/// When the variant reads a by-line and the region's first paragraph
/// matches, that paragraph is removed from the region so it only appears in
/// the header.
#[must_use]
pub fn extract<'a>(
    page: &'a Page,
    region: ContentRegion<'a>,
    options: &Options,
) -> (DocumentMetadata, ContentRegion<'a>) {
    let mut metadata = extract_page_metadata(page, options);

    if options.variant.reads_byline() {
        if let Some(byline) = take_byline(&region) {
            debug!(author = %byline.author, date = %byline.date, "extracted by-line");
            metadata.author = byline.author;
            metadata.date = Some(byline.date);
        }
    }

    (metadata, region)
}

/// Metadata available without a content region: title, description and the
/// author sentinel.
#[must_use]
pub fn extract_page_metadata(page: &Page, options: &Options) -> DocumentMetadata {
    let doc = page.document();
    DocumentMetadata {
        title: extract_title(doc, options),
        author: options.author_sentinel().to_string(),
        date: None,
        description: description(doc),
    }
}

/// Resolve the title through the fallback chain and sanitize it.
///
/// Order: `og:title`, `twitter:title`, first `<h1>`, `<title>` with the site
/// suffix stripped, then [`UNTITLED`].
#[must_use]
pub fn extract_title(doc: &Document, options: &Options) -> String {
    let (source, raw) = if let Some(title) = og_title(doc) {
        ("og:title", title)
    } else if let Some(title) = twitter_title(doc) {
        ("twitter:title", title)
    } else if let Some(title) = first_heading(doc) {
        ("h1", title)
    } else if let Some(title) = title_element(doc, options) {
        ("title", title)
    } else {
        ("default", UNTITLED.to_string())
    };

    debug!(source, title = %raw, "resolved title");
    sanitize_title(&raw)
}

/// Replace path-illegal characters with `_` and cap the length.
#[must_use]
pub fn sanitize_title(raw: &str) -> String {
    PATH_ILLEGAL
        .replace_all(raw, "_")
        .chars()
        .take(MAX_TITLE_CHARS)
        .collect()
}
