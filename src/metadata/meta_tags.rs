//! HTML Meta Tag Extraction
//!
//! Open Graph, Twitter card and description lookups. Each returns the
//! trimmed `content` of the first matching tag, `None` when it is missing or
//! blank so the caller moves on to its next source.

use dom_query::Document;

use crate::dom;

/// `content` of the first `<meta>` matching `css`.
fn meta_content(doc: &Document, css: &str) -> Option<String> {
    dom::non_blank_attribute(&doc.select(css).first(), "content")
}

/// `<meta property="og:title">`
#[must_use]
pub fn og_title(doc: &Document) -> Option<String> {
    meta_content(doc, r#"meta[property="og:title"]"#)
}

/// `<meta name="twitter:title">`
#[must_use]
pub fn twitter_title(doc: &Document) -> Option<String> {
    meta_content(doc, r#"meta[name="twitter:title"]"#)
}

/// `<meta name="description">`
#[must_use]
pub fn description(doc: &Document) -> Option<String> {
    meta_content(doc, r#"meta[name="description"]"#)
}
