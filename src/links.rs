//! Related-link discovery for section crawls.
//!
//! Reads the sidebar or table of contents of a documentation page and
//! returns the same-host pages it points to.

use std::collections::HashSet;

use tracing::{debug, info};
use url::Url;

use crate::dom;
use crate::page::Page;
use crate::selector::navigation::{MIN_NAVIGATION_LINKS, NAVIGATION_LINK_SELECTORS};
use crate::url_utils;

/// Same-host pages linked from the page's navigation, in first-seen order
/// without fragments or duplicates.
#[must_use]
pub fn discover_related_links(page: &Page) -> Vec<Url> {
    NAVIGATION_LINK_SELECTORS
        .iter()
        .find_map(|css| {
            let links = links_for_selector(page, css);
            (!links.is_empty()).then(|| {
                info!(selector = *css, count = links.len(), url = %page.url(), "found related links");
                links
            })
        })
        .unwrap_or_default()
}

fn links_for_selector(page: &Page, css: &str) -> Vec<Url> {
    let anchors = page.document().select(css);
    if anchors.length() < MIN_NAVIGATION_LINKS {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for anchor in dom::each(&anchors) {
        let Some(href) = dom::non_blank_attribute(&anchor, "href") else {
            continue;
        };
        if href.starts_with('#') || href.starts_with("javascript:") {
            continue;
        }
        let Ok(joined) = page.url().join(&href) else {
            debug!(href = %href, "skipping unparseable link");
            continue;
        };
        let joined = url_utils::without_fragment(&joined);
        if url_utils::same_host(&joined, page.url()) && seen.insert(joined.clone()) {
            links.push(joined);
        }
    }
    links
}
