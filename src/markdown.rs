//! Markdown rendering utilities.
//!
//! Pre-rendered fragments, fenced code blocks and the general HTML→Markdown
//! pass. Structures whose rendering the general converter cannot be trusted
//! with (language-tagged code, resolved links, renumbered lists) are rendered
//! here first and stand in the tree as opaque placeholder tokens until the
//! converter has run.

use quick_html2md::{html_to_markdown_with_options, MarkdownOptions};

use crate::patterns::{EXCESS_BLANK_LINES, FRAGMENT_TOKEN};

/// How a fragment sits in the surrounding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Flows inside a line of text (links, images).
    Inline,
    /// Occupies lines of its own (code, headings, quotes).
    Block,
    /// A rendered list; nests under a parent list item.
    List,
}

#[derive(Debug, Clone)]
struct Fragment {
    markdown: String,
    kind: FragmentKind,
}

/// Pre-rendered Markdown fragments addressed by placeholder tokens.
///
/// A fragment may reference only fragments registered before it, so
/// expansion always terminates.
#[derive(Debug, Default)]
pub struct Fragments {
    items: Vec<Fragment>,
}

impl Fragments {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fragment and return the token that stands for it.
    pub fn push(&mut self, markdown: String, kind: FragmentKind) -> String {
        let index = self.items.len();
        self.items.push(Fragment { markdown, kind });
        token(index)
    }

    /// Number of registered fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no fragment has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Separate block and list fragments from the inline remainder of a text.
    ///
    /// Returns the text with block tokens cut out (whitespace collapsed) and
    /// the Markdown of each removed block in order of appearance.
    #[must_use]
    pub fn split_blocks(&self, text: &str) -> (String, Vec<String>) {
        let mut blocks = Vec::new();
        let inline = FRAGMENT_TOKEN.replace_all(text, |caps: &regex::Captures<'_>| {
            match self.lookup(&caps[1], self.items.len()) {
                Some(fragment) if fragment.kind != FragmentKind::Inline => {
                    blocks.push(fragment.markdown.clone());
                    " ".to_string()
                }
                _ => caps[0].to_string(),
            }
        });
        (crate::dom::collapse_whitespace(&inline), blocks)
    }

    /// Replace every token in `text` with its fragment, recursively.
    #[must_use]
    pub fn expand(&self, text: &str) -> String {
        self.expand_below(text, self.items.len())
    }

    fn expand_below(&self, text: &str, limit: usize) -> String {
        FRAGMENT_TOKEN
            .replace_all(text, |caps: &regex::Captures<'_>| {
                let index = caps[1].parse::<usize>().unwrap_or(usize::MAX);
                match self.lookup(&caps[1], limit) {
                    Some(fragment) => self.expand_below(&fragment.markdown, index),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    fn lookup(&self, index: &str, limit: usize) -> Option<&Fragment> {
        let index = index.parse::<usize>().ok()?;
        if index < limit {
            self.items.get(index)
        } else {
            None
        }
    }
}

fn token(index: usize) -> String {
    format!("DOCSMDFRAG{index}X")
}

/// Render a fenced code block.
///
/// The code is kept verbatim apart from trailing newlines. The fence is one
/// backtick longer than the longest backtick run inside the code, and never
/// shorter than three.
///
/// ```
/// use docs2md::markdown::fenced_block;
///
/// assert_eq!(fenced_block("print(1)\n", Some("python")), "```python\nprint(1)\n```");
/// assert_eq!(fenced_block("ls", None), "```\nls\n```");
/// ```
#[must_use]
pub fn fenced_block(code: &str, language: Option<&str>) -> String {
    let code = code.trim_end_matches(['\n', '\r']);
    let longest_run = code
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat((longest_run + 1).max(3));
    format!("{fence}{}\n{code}\n{fence}", language.unwrap_or_default())
}

/// Prefix every non-empty line with `width` spaces.
#[must_use]
pub fn indent(markdown: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    markdown
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// General HTML→Markdown pass over what the structural passes left.
///
/// Paragraphs, emphasis, inline code spans and tables are handled by
/// `quick_html2md`.
#[must_use]
pub fn convert_html(html: &str) -> String {
    let options = MarkdownOptions::new()
        .include_links(true)
        .include_images(true)
        .preserve_tables(true);
    html_to_markdown_with_options(html, &options)
}

/// Strip trailing blanks from lines, collapse runs of blank lines to one and
/// trim the result.
#[must_use]
pub fn normalize_blank_lines(markdown: &str) -> String {
    let trimmed_lines = markdown
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    EXCESS_BLANK_LINES
        .replace_all(&trimmed_lines, "\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_exact() {
        assert_eq!(fenced_block("print(1)", Some("python")), "```python\nprint(1)\n```");
    }

    #[test]
    fn test_fenced_block_keeps_inner_whitespace() {
        let code = "def f():\n\n    return 1\n\n";
        assert_eq!(fenced_block(code, None), "```\ndef f():\n\n    return 1\n```");
    }

    #[test]
    fn test_fence_grows_past_inner_fence() {
        let code = "```rust\nfn main() {}\n```";
        assert!(fenced_block(code, Some("md")).starts_with("````md\n"));
        assert!(fenced_block(code, Some("md")).ends_with("\n````"));
    }

    #[test]
    fn test_expand_is_recursive() {
        let mut fragments = Fragments::new();
        let img = fragments.push("![logo](https://x.org/l.png)".to_string(), FragmentKind::Inline);
        let link = fragments.push(format!("[{img}](https://x.org)"), FragmentKind::Inline);

        assert_eq!(
            fragments.expand(&format!("see {link}.")),
            "see [![logo](https://x.org/l.png)](https://x.org)."
        );
        assert_eq!(fragments.len(), 2);
    }

    #[test]
    fn test_expand_ignores_unknown_and_forward_tokens() {
        let mut fragments = Fragments::new();
        fragments.push("DOCSMDFRAG0X loop".to_string(), FragmentKind::Inline);

        assert_eq!(fragments.expand("DOCSMDFRAG0X"), "DOCSMDFRAG0X loop");
        assert_eq!(fragments.expand("DOCSMDFRAG9X"), "DOCSMDFRAG9X");
    }

    #[test]
    fn test_split_blocks() {
        let mut fragments = Fragments::new();
        let link = fragments.push("[a](b)".to_string(), FragmentKind::Inline);
        let list = fragments.push("- child".to_string(), FragmentKind::List);

        let (inline, blocks) = fragments.split_blocks(&format!("Parent {link}{list}  "));
        assert_eq!(inline, format!("Parent {link}"));
        assert_eq!(blocks, vec!["- child".to_string()]);
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("- a\n\n- b", 2), "  - a\n\n  - b");
    }

    #[test]
    fn test_normalize_blank_lines() {
        assert_eq!(normalize_blank_lines("\n\na  \n\n\n\nb\n \n \nc\n"), "a\n\nb\n\nc");
    }
}
