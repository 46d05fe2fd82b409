//! Document assembly: metadata header followed by the converted body.

use std::fmt;

use serde::Serialize;
use url::Url;

use crate::metadata::DocumentMetadata;
use crate::options::SiteVariant;

/// Separator between header and body, present in every document.
pub const HEADER_SEPARATOR: &str = "---";

/// A converted page ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkdownDocument {
    /// Header lines, ending with [`HEADER_SEPARATOR`].
    pub header: Vec<String>,
    /// Markdown of the content region, trimmed. Empty when no region exists.
    pub body: String,
    /// Metadata the header was built from.
    pub metadata: DocumentMetadata,
    /// Page URL.
    pub source: Url,
}

impl MarkdownDocument {
    /// Full Markdown text.
    ///
    /// Header lines joined by newlines, a blank line, then the body and a
    /// final newline when the body is non-empty.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.header.join("\n");
        out.push_str("\n\n");
        let body = self.body.trim();
        if !body.is_empty() {
            out.push_str(body);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for MarkdownDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Combine metadata and body into a document laid out for `variant`.
#[must_use]
pub fn assemble(
    metadata: DocumentMetadata,
    body: String,
    source: Url,
    variant: SiteVariant,
) -> MarkdownDocument {
    let header = match variant {
        SiteVariant::Docs => docs_header(&metadata, &source),
        SiteVariant::Blog => blog_header(&metadata, &source),
    };
    MarkdownDocument {
        header,
        body: body.trim().to_string(),
        metadata,
        source,
    }
}

fn docs_header(metadata: &DocumentMetadata, source: &Url) -> Vec<String> {
    let mut lines = vec![
        format!("# {}", metadata.title),
        String::new(),
        format!("**Source:** {source}"),
        String::new(),
    ];
    if let Some(description) = &metadata.description {
        lines.push(format!("> {description}"));
        lines.push(String::new());
    }
    lines.push(HEADER_SEPARATOR.to_string());
    lines
}

fn blog_header(metadata: &DocumentMetadata, source: &Url) -> Vec<String> {
    let mut lines = vec![
        format!("# {}", metadata.title),
        String::new(),
        format!("**Author:** {}", metadata.author),
    ];
    if let Some(date) = &metadata.date {
        lines.push(format!("**Date:** {date}"));
    }
    lines.push(format!("**Link:** {source}"));
    lines.push(String::new());
    lines.push(HEADER_SEPARATOR.to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(description: Option<&str>, date: Option<&str>) -> DocumentMetadata {
        DocumentMetadata {
            title: "Install".to_string(),
            author: "Jane".to_string(),
            date: date.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    fn url() -> Url {
        Url::parse("https://docs.x.org/install").expect("valid url")
    }

    #[test]
    fn test_docs_header_with_description() {
        let doc = assemble(metadata(Some("How to"), None), "Body".into(), url(), SiteVariant::Docs);
        assert_eq!(
            doc.header,
            vec!["# Install", "", "**Source:** https://docs.x.org/install", "", "> How to", "", "---"]
        );
    }

    #[test]
    fn test_docs_header_without_description() {
        let doc = assemble(metadata(None, None), "Body".into(), url(), SiteVariant::Docs);
        assert_eq!(doc.header, vec!["# Install", "", "**Source:** https://docs.x.org/install", "", "---"]);
    }

    #[test]
    fn test_blog_header_date_is_optional() {
        let doc = assemble(metadata(None, Some("Jan 5, 2025")), String::new(), url(), SiteVariant::Blog);
        assert_eq!(
            doc.header,
            vec![
                "# Install",
                "",
                "**Author:** Jane",
                "**Date:** Jan 5, 2025",
                "**Link:** https://docs.x.org/install",
                "",
                "---"
            ]
        );

        let doc = assemble(metadata(Some("ignored"), None), String::new(), url(), SiteVariant::Blog);
        assert!(!doc.header.iter().any(|line| line.starts_with("**Date:**")));
        assert!(!doc.header.iter().any(|line| line.contains("ignored")));
    }

    #[test]
    fn test_render_layout() {
        let doc = assemble(metadata(None, None), "\n\nBody text\n\n".into(), url(), SiteVariant::Docs);
        assert_eq!(
            doc.render(),
            "# Install\n\n**Source:** https://docs.x.org/install\n\n---\n\nBody text\n"
        );
        assert_eq!(doc.to_string(), doc.render());
    }

    #[test]
    fn test_render_empty_body_keeps_separator() {
        let doc = assemble(metadata(None, None), "  ".into(), url(), SiteVariant::Docs);
        assert!(doc.render().ends_with("---\n\n"));
    }
}
