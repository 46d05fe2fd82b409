//! Navigation link selectors
//!
//! Sidebar and table-of-contents anchors used to discover the other pages of
//! a documentation section. Tried in order; the first selector that matches
//! more than one anchor and yields a usable link wins.

/// Anchor selectors for documentation sidebars and tables of contents.
pub static NAVIGATION_LINK_SELECTORS: &[&str] = &[
    ".sidebar a",
    ".nav-list a",
    ".toc a",
    ".table-of-contents a",
    "nav a",
    r#"[role="navigation"] a"#,
    ".menu a",
    ".docs-navigation a",
    ".sidebar-nav a",
    // pydata-sphinx-theme
    ".bd-sidebar a",
    // sphinx_rtd_theme
    ".wy-nav-side a",
];

/// Minimum number of anchors for a selector to count as a navigation list.
pub const MIN_NAVIGATION_LINKS: usize = 2;
