//! Discard selectors
//!
//! Site furniture removed from a content region before conversion: page
//! chrome, navigation widgets, non-rendering elements and decorative
//! permalink anchors.

/// Elements excised from the content region, in removal order.
pub static DISCARD_SELECTORS: &[&str] = &[
    // Page chrome
    "nav",
    "header",
    "footer",
    "aside",
    // Navigation widgets by class
    ".sidebar",
    ".navigation",
    ".menu",
    // Non-rendering elements
    "script",
    "style",
    "link",
    "noscript",
    // Sphinx / MkDocs heading permalinks ("¶")
    "a.headerlink",
];

/// All discard selectors joined into one selector group.
#[must_use]
pub fn discard_group() -> String {
    DISCARD_SELECTORS.join(", ")
}
