//! Selector Infrastructure
//!
//! Prioritised CSS selector lists used to find the content region, to discard
//! site furniture and to collect navigation links. Lists are evaluated in
//! declaration order; order is a priority, never a set.

use dom_query::Selection;
use tracing::{debug, warn};

use crate::dom;
use crate::options::SiteVariant;
use crate::page::{ContentRegion, Page};

pub mod content;
pub mod discard;
pub mod navigation;

/// How much a match says about the region really being the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Confidence {
    /// `<body>` used because nothing else matched.
    Fallback,
    /// Wildcard class matches such as `[class*="content"]`.
    Low,
    /// Documentation-framework class names.
    Medium,
    /// Semantic elements and ARIA roles.
    High,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Fallback => "fallback",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(name)
    }
}

/// One entry of a content cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSelector {
    /// CSS selector handed to `dom_query`.
    pub css: &'static str,
    /// Confidence reported when this entry wins.
    pub confidence: Confidence,
}

/// Outcome of the content cascade.
///
/// Callers branch on the variant: a body fallback is low-confidence but still
/// converted, `NotFound` only happens for documents without a `<body>`.
#[derive(Debug)]
pub enum Located<'a> {
    /// A cascade entry matched.
    Matched(ContentRegion<'a>),
    /// No entry matched; the whole `<body>` is used.
    BodyFallback(ContentRegion<'a>),
    /// The document has no `<body>` at all.
    NotFound,
}

impl<'a> Located<'a> {
    /// The region, if any.
    #[must_use]
    pub fn into_region(self) -> Option<ContentRegion<'a>> {
        match self {
            Self::Matched(region) | Self::BodyFallback(region) => Some(region),
            Self::NotFound => None,
        }
    }

    /// Whether the cascade fell through to `<body>`.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::BodyFallback(_))
    }
}

/// Locate the content region with the variant's cascade.
#[must_use]
pub fn locate(page: &Page, variant: SiteVariant) -> Located<'_> {
    locate_with(page, content::selectors_for(variant))
}

/// Locate the content region with an explicit cascade.
///
/// For each entry the matching elements are visited in document order and
/// the first one with content wins. Elements that are empty (whitespace
/// only, no image) are skipped so an empty `<main>` shell does not shadow
/// the real container further down the list.
#[must_use]
pub fn locate_with<'a>(page: &'a Page, selectors: &[ContentSelector]) -> Located<'a> {
    let doc = page.document();

    for rule in selectors {
        let candidates = doc.select(rule.css);
        if let Some(root) = dom::each(&candidates).into_iter().find(dom::has_content) {
            debug!(
                url = %page.url(),
                selector = rule.css,
                confidence = %rule.confidence,
                "found content container"
            );
            return Located::Matched(ContentRegion::new(root, rule.css, rule.confidence));
        }
    }

    let body: Selection<'a> = doc.select("body").first();
    if body.exists() {
        warn!(url = %page.url(), "no specific content container, falling back to <body>");
        return Located::BodyFallback(ContentRegion::new(body, "body", Confidence::Fallback));
    }

    warn!(url = %page.url(), "document has no <body>, nothing to convert");
    Located::NotFound
}
