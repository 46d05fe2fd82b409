//! Parsed page and content region types.

use dom_query::{Document, Selection};
use url::Url;

use crate::selector::Confidence;
use crate::url_utils;

/// A parsed HTML document together with the URL it was retrieved from.
///
/// A page is created per fetch and consumed by one conversion; nothing is
/// shared between pages. Conversion rewrites the tree in place, so reads
/// such as link discovery go first.
pub struct Page {
    document: Document,
    url: Url,
}

impl Page {
    /// Parse raw HTML fetched from `url`.
    #[must_use]
    pub fn parse(html: &str, url: Url) -> Self {
        Self {
            document: Document::from(html),
            url,
        }
    }

    /// The parsed document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// URL the page was retrieved from.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Scheme and host (plus port) of the page URL.
    #[must_use]
    pub fn origin(&self) -> String {
        url_utils::origin(&self.url)
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page").field("url", &self.url.as_str()).finish_non_exhaustive()
    }
}

/// The subtree of a [`Page`] judged to hold the substantive content.
///
/// Not `Clone`: every stage takes the region by value, rewrites
/// it and hands it back, so exactly one stage owns it at any time.
pub struct ContentRegion<'a> {
    root: Selection<'a>,
    selector: &'static str,
    confidence: Confidence,
}

impl<'a> ContentRegion<'a> {
    pub(crate) fn new(root: Selection<'a>, selector: &'static str, confidence: Confidence) -> Self {
        Self {
            root,
            selector,
            confidence,
        }
    }

    /// Root element of the region.
    #[must_use]
    pub fn root(&self) -> &Selection<'a> {
        &self.root
    }

    /// Selector that produced the region (`body` for the fallback).
    #[must_use]
    pub fn selector(&self) -> &'static str {
        self.selector
    }

    /// Confidence attached to the selector.
    #[must_use]
    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// Descendants of the root matching a CSS selector.
    #[must_use]
    pub fn select(&self, css: &str) -> Selection<'a> {
        self.root.select(css)
    }
}

impl std::fmt::Debug for ContentRegion<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentRegion")
            .field("selector", &self.selector)
            .field("confidence", &self.confidence)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_origin() {
        let url = Url::parse("https://x.org/docs/a.html?q=1").expect("valid url");
        let page = Page::parse("<p>x</p>", url);

        assert_eq!(page.origin(), "https://x.org");
        assert_eq!(page.url().path(), "/docs/a.html");
    }

    #[test]
    fn test_region_select_is_scoped_to_root() {
        let url = Url::parse("https://x.org/").expect("valid url");
        let page = Page::parse("<p>outside</p><main><p>inside</p></main>", url);
        let region = ContentRegion::new(page.document().select("main"), "main", Confidence::High);

        assert_eq!(region.select("p").length(), 1);
        assert_eq!(region.selector(), "main");
    }
}
