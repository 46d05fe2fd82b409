//! Content selector cascades
//!
//! These lists identify the main content container on a page. First
//! non-empty match wins; check in order.

use crate::options::SiteVariant;
use crate::selector::{Confidence, ContentSelector};

const fn rule(css: &'static str, confidence: Confidence) -> ContentSelector {
    ContentSelector { css, confidence }
}

/// Cascade for documentation generators (Sphinx, Docusaurus, GitBook,
/// mdBook, rustdoc, MkDocs).
pub static DOCS_SELECTORS: &[ContentSelector] = &[
    rule("article", Confidence::High),
    rule("main", Confidence::High),
    rule(r#"[role="main"]"#, Confidence::High),
    rule(".document", Confidence::Medium),
    rule(".content", Confidence::Medium),
    rule(".post-content", Confidence::Medium),
    rule(".markdown-body", Confidence::Medium),
    rule(".md", Confidence::Medium),
    rule("div.document", Confidence::Medium),
    rule("div.body", Confidence::Medium),
    rule(r#"div[role="main"]"#, Confidence::Medium),
];

/// Cascade for blog platforms, ending with wildcard class matches for
/// generators that hash or prefix their class names.
pub static BLOG_SELECTORS: &[ContentSelector] = &[
    rule("article", Confidence::High),
    rule("div.blog-content", Confidence::Medium),
    rule("div.post-content", Confidence::Medium),
    rule("div.content", Confidence::Medium),
    rule("main", Confidence::High),
    rule("div.prose", Confidence::Medium),
    rule(r#"[class*="content"]"#, Confidence::Low),
    rule(r#"[class*="article"]"#, Confidence::Low),
    rule(r#"[class*="post"]"#, Confidence::Low),
];

/// The cascade used for a site variant.
#[must_use]
pub fn selectors_for(variant: SiteVariant) -> &'static [ContentSelector] {
    match variant {
        SiteVariant::Docs => DOCS_SELECTORS,
        SiteVariant::Blog => BLOG_SELECTORS,
    }
}
