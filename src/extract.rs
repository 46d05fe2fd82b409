//! The conversion pipeline.
//!
//! locate → metadata → sanitize → resolve → transform → assemble. Each
//! stage takes the content region by value and hands it on.

use tracing::{debug, info};

use crate::assemble::{assemble, MarkdownDocument};
use crate::metadata;
use crate::options::Options;
use crate::page::Page;
use crate::resolve::{resolve, ReferencePolicy};
use crate::sanitize::sanitize;
use crate::selector::{self, Located};
use crate::transform::transform;

/// Convert a parsed page to a Markdown document, consuming the page.
///
/// The passes rewrite the page's tree in place, so a page converts once.
/// Never fails. A page without any region still yields a document carrying
/// the page metadata and an empty body.
#[must_use]
pub fn convert(page: Page, options: &Options) -> MarkdownDocument {
    let variant = options.variant;

    let (metadata, body) = match selector::locate(&page, variant) {
        Located::Matched(region) | Located::BodyFallback(region) => {
            let (metadata, region) = metadata::extract(&page, region, options);
            let region = sanitize(region);
            let region = resolve(region, page.url(), ReferencePolicy::from(variant));
            (metadata, transform(region))
        }
        Located::NotFound => (metadata::extract_page_metadata(&page, options), String::new()),
    };

    debug!(url = %page.url(), title = %metadata.title, body_len = body.len(), "converted page");
    if body.is_empty() {
        info!(url = %page.url(), "page produced an empty body");
    }

    assemble(metadata, body, page.url().clone(), variant)
}
