//! DOM-based metadata extraction.
//!
//! Title fallbacks read from the document body and head, plus the blog
//! by-line read from the first paragraph of the content region.

use dom_query::Document;

use crate::dom;
use crate::options::{Options, SiteVariant};
use crate::page::ContentRegion;
use crate::patterns::BYLINE;

/// Author and date read from a `by: NAME, Mon D, YYYY` paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Byline {
    /// Everything between `by:` and the comma preceding the date.
    pub author: String,
    /// Date as written, e.g. `Jan 5, 2025`.
    pub date: String,
}

/// Text of the first `<h1>`, without a trailing permalink marker.
#[must_use]
pub fn first_heading(doc: &Document) -> Option<String> {
    let text = dom::collapsed_text(&doc.select("h1").first());
    let text = text.trim_end_matches('¶').trim_end();
    (!text.is_empty()).then(|| text.to_string())
}

/// `<title>` text with the site suffix removed.
///
/// Docs titles keep everything before the first `|`. Blog titles drop the
/// configured suffix (` | LMSYS Org` by default).
#[must_use]
pub fn title_element(doc: &Document, options: &Options) -> Option<String> {
    let text = dom::collapsed_text(&doc.select("title").first());

    let stripped = match options.variant {
        SiteVariant::Docs => text.split('|').next().unwrap_or_default().trim(),
        SiteVariant::Blog => match options.title_suffix.as_deref() {
            Some(suffix) if !suffix.is_empty() => text.strip_suffix(suffix).unwrap_or(text.as_str()).trim(),
            _ => text.trim(),
        },
    };

    (!stripped.is_empty()).then(|| stripped.to_string())
}

/// Read the by-line from the region's first paragraph and remove it.
///
/// The pattern needs both the author and the date; anything less leaves the
/// paragraph in place and returns `None`.
#[must_use]
pub fn take_byline(region: &ContentRegion<'_>) -> Option<Byline> {
    let paragraph = region.select("p").first();
    if !paragraph.exists() {
        return None;
    }

    let text = dom::collapsed_text(&paragraph);
    let caps = BYLINE.captures(&text)?;
    let byline = Byline {
        author: caps[1].trim().to_string(),
        date: caps[2].trim().to_string(),
    };

    dom::remove(&paragraph);
    Some(byline)
}
