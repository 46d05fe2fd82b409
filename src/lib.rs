//! # docs2md
//!
//! Converts pages from documentation sites and blog platforms into clean
//! Markdown, keeping headings, language-tagged code blocks, lists, links,
//! images and blockquotes while dropping navigation, scripts and styling.
//!
//! ## Quick Start
//!
//! ```rust
//! use docs2md::{extract_single, Options};
//! use url::Url;
//!
//! let html = r#"<html><head><title>Install | Project</title></head>
//! <body><article><h2>Setup</h2><pre><code class="language-bash">pip install x</code></pre></article></body></html>"#;
//!
//! let url = Url::parse("https://docs.example.org/install.html")?;
//! let doc = extract_single(html, &url, &Options::default());
//! assert_eq!(doc.metadata.title, "Install");
//! assert!(doc.body.contains("```bash\npip install x\n```"));
//! # Ok::<(), url::ParseError>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. **Selector cascade**: the first non-empty container from a prioritised
//!    selector list, falling back to `<body>`
//! 2. **Metadata**: title chain, blog by-line, description
//! 3. **Sanitizer**: navigation, scripts and styling removed
//! 4. **Reference resolver**: relative images and links made absolute
//! 5. **Structural transformer**: HTML to Markdown
//! 6. **Assembler**: header plus body
//!
//! Fetching, crawling and file output live in [`fetch`], [`crawl`] and
//! [`output`]; the pipeline itself performs no I/O.

mod error;
mod extract;
mod options;
mod patterns;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Parsed page and content region.
pub mod page;

/// Content selector cascades, discard list and navigation selectors.
pub mod selector;

/// Removal of non-content subtrees.
pub mod sanitize;

/// Rewriting of image and link references.
pub mod resolve;

/// Title, author, date and description extraction.
pub mod metadata;

/// Markdown fragments, fences and the general HTML→Markdown pass.
pub mod markdown;

/// Structural HTML→Markdown transformer.
pub mod transform;

/// Header and body assembly.
pub mod assemble;

/// Related-link discovery for section crawls.
pub mod links;

/// URL validation and resolution helpers.
pub mod url_utils;

/// Charset detection and transcoding.
pub mod encoding;

/// HTTP fetching.
pub mod fetch;

/// Output filenames.
pub mod filename;

/// Writing Markdown files.
pub mod output;

/// Single-page downloads and bounded section crawls.
pub mod crawl;

/// Documentation-site detection.
pub mod site;

// Public API - re-exports
pub use assemble::MarkdownDocument;
pub use error::{Error, Result};
pub use links::discover_related_links;
pub use metadata::DocumentMetadata;
pub use options::{Options, SiteVariant, BLOG_AUTHOR, BLOG_TITLE_SUFFIX, DOCS_AUTHOR};
pub use page::{ContentRegion, Page};
pub use selector::{Confidence, Located};

use url::Url;

/// Converts one HTML page to Markdown.
///
/// Never fails: a page with no recognisable container falls back to its
/// `<body>`, and a page without a body still yields the metadata header.
///
/// # Example
///
/// ```rust
/// use docs2md::{extract_single, Options, SiteVariant};
/// use url::Url;
///
/// let html = "<article><p>by: Jane Doe, Jan 5, 2025</p><p>Hello</p></article>";
/// let url = Url::parse("https://lmsys.org/blog/hello/")?;
/// let doc = extract_single(html, &url, &Options::for_variant(SiteVariant::Blog));
/// assert_eq!(doc.metadata.author, "Jane Doe");
/// assert_eq!(doc.body, "Hello");
/// # Ok::<(), url::ParseError>(())
/// ```
#[must_use]
pub fn extract_single(html: &str, source_url: &Url, options: &Options) -> MarkdownDocument {
    let page = Page::parse(html, source_url.clone());
    extract::convert(page, options)
}

/// Converts raw HTML bytes, detecting the charset first.
///
/// The charset comes from a byte-order mark or a `<meta>` declaration and
/// defaults to UTF-8. Invalid sequences are replaced with U+FFFD.
///
/// # Example
///
/// ```rust
/// use docs2md::{extract_bytes, Options};
/// use url::Url;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><article><p>Caf\xE9</p></article>";
/// let url = Url::parse("https://docs.example.org/")?;
/// assert_eq!(extract_bytes(html, &url, &Options::default()).body, "Café");
/// # Ok::<(), url::ParseError>(())
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8], source_url: &Url, options: &Options) -> MarkdownDocument {
    let text = encoding::transcode_to_utf8(html, None);
    extract_single(&text, source_url, options)
}

/// Converts an already parsed page, consuming it.
///
/// Conversion rewrites the page's tree. Anything else read from the page,
/// such as [`discover_related_links`], has to happen before.
///
/// ```rust
/// use docs2md::{convert_page, discover_related_links, Options, Page};
/// use url::Url;
///
/// let html = r#"<body><div class="sidebar"><a href="/a">A</a><a href="/b">B</a></div><p>Text</p></body>"#;
/// let page = Page::parse(html, Url::parse("https://docs.example.org/")?);
/// let related = discover_related_links(&page);
/// let doc = convert_page(page, &Options::default());
/// assert_eq!(related.len(), 2);
/// assert_eq!(doc.body, "Text");
/// # Ok::<(), url::ParseError>(())
/// ```
#[must_use]
pub fn convert_page(page: Page, options: &Options) -> MarkdownDocument {
    extract::convert(page, options)
}
