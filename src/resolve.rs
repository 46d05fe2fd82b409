//! Reference resolver.
//!
//! Rewrites image and link targets inside a content region so the
//! structural transformer only ever sees absolute URLs or references that
//! were deliberately left alone.

use tracing::debug;
use url::Url;

use crate::dom;
use crate::options::SiteVariant;
use crate::page::ContentRegion;
use crate::url_utils;

/// How references inside a region are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferencePolicy {
    /// Join relative image sources and root-relative hrefs to the page URL.
    Resolve,
    /// Keep original asset URLs verbatim.
    Preserve,
}

impl From<SiteVariant> for ReferencePolicy {
    fn from(variant: SiteVariant) -> Self {
        if variant.resolves_references() {
            Self::Resolve
        } else {
            Self::Preserve
        }
    }
}

/// Rewrite image and link references of the region.
///
/// Under both policies a lazy-loaded image's `data-src` is promoted to
/// `src` and a missing `alt` becomes the empty string, so every retained
/// image renders as well-formed `![alt](url)`.
#[must_use]
pub fn resolve<'a>(region: ContentRegion<'a>, page_url: &Url, policy: ReferencePolicy) -> ContentRegion<'a> {
    let mut rewritten = 0usize;

    for img in dom::each(&region.select("img")) {
        let source = dom::non_blank_attribute(&img, "src")
            .or_else(|| dom::non_blank_attribute(&img, "data-src"));

        if let Some(src) = source {
            let target = match policy {
                ReferencePolicy::Resolve => url_utils::create_absolute_url(&src, page_url),
                ReferencePolicy::Preserve => src,
            };
            if dom::get_attribute(&img, "src").as_deref() != Some(target.as_str()) {
                rewritten += 1;
            }
            dom::set_attribute(&img, "src", &target);
        }

        if dom::get_attribute(&img, "alt").is_none() {
            dom::set_attribute(&img, "alt", "");
        }
    }

    if policy == ReferencePolicy::Resolve {
        for link in dom::each(&region.select("a[href]")) {
            let Some(href) = dom::get_attribute(&link, "href") else {
                continue;
            };
            // Only root-relative targets move; absolute, fragment-only and
            // page-relative hrefs are kept as written.
            if href.starts_with('/') {
                let target = url_utils::create_absolute_url(&href, page_url);
                if target != href {
                    rewritten += 1;
                    dom::set_attribute(&link, "href", &target);
                }
            }
        }
    }

    debug!(?policy, rewritten, "resolved references");
    region
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SiteVariant;
    use crate::page::Page;
    use crate::selector;

    fn run(html: &str, page_url: &str, policy: ReferencePolicy) -> Page {
        let page = Page::parse(html, Url::parse(page_url).expect("valid url"));
        {
            let region = selector::locate(&page, SiteVariant::Docs).into_region().expect("region");
            let url = page.url().clone();
            let _region = resolve(region, &url, policy);
        }
        page
    }

    fn attr(page: &Page, css: &str, name: &str) -> Option<String> {
        dom::get_attribute(&page.document().select(css), name)
    }

    #[test]
    fn test_root_relative_image_lands_on_origin() {
        let page = run(
            r#"<article><img id="i" src="/img/a.png"></article>"#,
            "https://x.org",
            ReferencePolicy::Resolve,
        );
        assert_eq!(attr(&page, "#i", "src").as_deref(), Some("https://x.org/img/a.png"));
    }

    #[test]
    fn test_relative_image_joins_page_url() {
        let page = run(
            r#"<article><img id="a" src="fig.png"><img id="b" src="../b.png"></article>"#,
            "https://x.org/guide/intro/page.html",
            ReferencePolicy::Resolve,
        );
        assert_eq!(attr(&page, "#a", "src").as_deref(), Some("https://x.org/guide/intro/fig.png"));
        assert_eq!(attr(&page, "#b", "src").as_deref(), Some("https://x.org/guide/b.png"));
    }

    #[test]
    fn test_data_src_promoted_and_alt_defaulted() {
        let page = run(
            r#"<article><img id="lazy" data-src="/lazy.png"></article>"#,
            "https://x.org/a",
            ReferencePolicy::Resolve,
        );
        assert_eq!(attr(&page, "#lazy", "src").as_deref(), Some("https://x.org/lazy.png"));
        assert_eq!(attr(&page, "#lazy", "alt").as_deref(), Some(""));
    }

    #[test]
    fn test_link_rules() {
        let page = run(
            r##"<article>
                <a id="root" href="/api/">API</a>
                <a id="abs" href="https://other.org/x">Other</a>
                <a id="frag" href="#section">Section</a>
                <a id="rel" href="next.html">Next</a>
            </article>"##,
            "https://x.org/docs/start.html",
            ReferencePolicy::Resolve,
        );
        assert_eq!(attr(&page, "#root", "href").as_deref(), Some("https://x.org/api/"));
        assert_eq!(attr(&page, "#abs", "href").as_deref(), Some("https://other.org/x"));
        assert_eq!(attr(&page, "#frag", "href").as_deref(), Some("#section"));
        assert_eq!(attr(&page, "#rel", "href").as_deref(), Some("next.html"));
    }

    #[test]
    fn test_preserve_keeps_references_verbatim() {
        let page = run(
            r#"<article><img id="i" src="/img/a.png"><a id="l" href="/about">About</a></article>"#,
            "https://lmsys.org/blog/post/",
            ReferencePolicy::Preserve,
        );
        assert_eq!(attr(&page, "#i", "src").as_deref(), Some("/img/a.png"));
        assert_eq!(attr(&page, "#i", "alt").as_deref(), Some(""));
        assert_eq!(attr(&page, "#l", "href").as_deref(), Some("/about"));
    }

    #[test]
    fn test_images_outside_region_untouched() {
        let page = run(
            r#"<img id="logo" src="/logo.png"><article><p>x</p></article>"#,
            "https://x.org/",
            ReferencePolicy::Resolve,
        );
        assert_eq!(attr(&page, "#logo", "src").as_deref(), Some("/logo.png"));
        assert_eq!(attr(&page, "#logo", "alt"), None);
    }
}
