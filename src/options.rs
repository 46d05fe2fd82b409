//! Configuration options for page conversion and section crawls.
//!
//! The `Options` struct selects the site variant and carries the knobs of the
//! crawl loop. Each variant bundles the extraction policies that differ
//! between documentation sites and blog platforms.

use std::path::PathBuf;
use std::time::Duration;

/// Author used for documentation pages when nothing else is configured.
pub const DOCS_AUTHOR: &str = "Docs";

/// Author used for blog posts whose by-line could not be read.
pub const BLOG_AUTHOR: &str = "Team";

/// Title suffix stripped from blog `<title>` elements by default.
pub const BLOG_TITLE_SUFFIX: &str = " | LMSYS Org";

/// Kind of site a page comes from.
///
/// The variant decides which selector list is used, whether references are
/// resolved, whether a by-line is read and how the header is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SiteVariant {
    /// Documentation generators (Sphinx, Docusaurus, GitBook, rustdoc...).
    #[default]
    Docs,
    /// Blog platforms with a `by: NAME, DATE` opening paragraph.
    Blog,
}

impl SiteVariant {
    /// Whether image and link targets are rewritten to absolute URLs.
    #[must_use]
    pub fn resolves_references(self) -> bool {
        matches!(self, Self::Docs)
    }

    /// Whether the first paragraph is inspected for an author/date by-line.
    #[must_use]
    pub fn reads_byline(self) -> bool {
        matches!(self, Self::Blog)
    }

    /// Author sentinel used when no author is found.
    #[must_use]
    pub fn default_author(self) -> &'static str {
        match self {
            Self::Docs => DOCS_AUTHOR,
            Self::Blog => BLOG_AUTHOR,
        }
    }
}

/// Configuration options for conversion and crawling.
///
/// # Example
///
/// ```rust
/// use docs2md::{Options, SiteVariant};
///
/// let options = Options {
///     variant: SiteVariant::Blog,
///     default_author: Some("LMSYS Team".to_string()),
///     ..Options::default()
/// };
/// assert_eq!(options.author_sentinel(), "LMSYS Team");
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Site variant driving the extraction policies.
    ///
    /// Default: `SiteVariant::Docs`
    pub variant: SiteVariant,

    /// Overrides the variant's author sentinel.
    ///
    /// Default: `None`
    pub default_author: Option<String>,

    /// Trailing `<title>` suffix removed in the blog variant.
    ///
    /// The docs variant always cuts the title at the first `|`.
    ///
    /// Default: `Some(" | LMSYS Org")`
    pub title_suffix: Option<String>,

    /// Maximum number of pages written by a section crawl, seed included.
    ///
    /// `1` means single-page mode.
    ///
    /// Default: `50`
    pub max_pages: usize,

    /// Pause between successive fetches of a section crawl.
    ///
    /// Default: 500 ms
    pub delay: Duration,

    /// Directory that receives the Markdown files.
    ///
    /// Default: `.`
    pub output_dir: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            variant: SiteVariant::Docs,
            default_author: None,
            title_suffix: Some(BLOG_TITLE_SUFFIX.to_string()),
            max_pages: 50,
            delay: Duration::from_millis(500),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Options {
    /// Options for the given variant, everything else default.
    #[must_use]
    pub fn for_variant(variant: SiteVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Author recorded when a page carries no usable author.
    #[must_use]
    pub fn author_sentinel(&self) -> &str {
        self.default_author
            .as_deref()
            .unwrap_or_else(|| self.variant.default_author())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();
        assert_eq!(opts.variant, SiteVariant::Docs);
        assert_eq!(opts.max_pages, 50);
        assert_eq!(opts.delay, Duration::from_millis(500));
        assert_eq!(opts.author_sentinel(), "Docs");
    }

    #[test]
    fn test_blog_policies() {
        let opts = Options::for_variant(SiteVariant::Blog);
        assert!(opts.variant.reads_byline());
        assert!(!opts.variant.resolves_references());
        assert_eq!(opts.author_sentinel(), "Team");
    }

    #[test]
    fn test_author_override_wins() {
        let opts = Options {
            default_author: Some("Handbook".to_string()),
            ..Options::default()
        };
        assert_eq!(opts.author_sentinel(), "Handbook");
    }
}
