//! DOM Operations Adapter
//!
//! Thin helpers over `dom_query` used by every pipeline stage. Selections
//! share the document through interior mutability, so rewriting helpers take
//! `&Selection` and mutate the underlying tree in place.

pub use dom_query::{Document, NodeRef, Selection};
pub use tendril::StrTendril;

use crate::patterns::WHITESPACE_RUN;

// === Parsing ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attributes ===

/// Attribute value, `None` when missing.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Attribute value trimmed, `None` when missing or blank.
#[must_use]
pub fn non_blank_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Set an attribute value.
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Whitespace-separated tokens of the `class` attribute.
#[must_use]
pub fn class_tokens(sel: &Selection) -> Vec<String> {
    sel.attr("class")
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

// === Tag/Node Information ===

/// Tag name (lowercase), `None` for non-element nodes.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Whether any ancestor of `sel` is a `tag` element.
#[must_use]
pub fn has_ancestor_tag(sel: &Selection, tag: &str) -> bool {
    let mut current = sel.parent();
    while current.exists() {
        if tag_name(&current).as_deref() == Some(tag) {
            return true;
        }
        current = current.parent();
    }
    false
}

/// Every matched node wrapped as its own selection, in document order.
#[must_use]
pub fn each<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.nodes().iter().map(|node| Selection::from(*node)).collect()
}

/// Direct element children with the given tag, in document order.
#[must_use]
pub fn child_elements<'a>(sel: &Selection<'a>, tag: &str) -> Vec<Selection<'a>> {
    each(&sel.children())
        .into_iter()
        .filter(|child| tag_name(child).as_deref() == Some(tag))
        .collect()
}

// === Text Content ===

/// All text of the node and its descendants, untouched.
///
/// Returns `StrTendril` for zero-copy passing; code blocks rely on this to
/// keep their text verbatim.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text with whitespace runs collapsed to one space and ends trimmed.
#[must_use]
pub fn collapsed_text(sel: &Selection) -> String {
    collapse_whitespace(&sel.text())
}

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Elements whose boundaries separate words in extracted text.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "blockquote", "br", "dd", "div", "dl", "dt", "figcaption", "figure",
    "h1", "h2", "h3", "h4", "h5", "h6", "hr", "li", "ol", "p", "pre", "section", "table", "td",
    "th", "tr", "ul",
];

/// Collapsed text where block-level boundaries count as whitespace.
///
/// `<p>One.</p><p>Two.</p>` reads as `One. Two.` rather than `One.Two.`.
#[must_use]
pub fn block_text(sel: &Selection) -> String {
    let mut out = String::new();
    if let Some(node) = sel.nodes().first() {
        push_block_text(node, &mut out);
    }
    collapse_whitespace(&out)
}

fn push_block_text(node: &NodeRef<'_>, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            out.push_str(&child.text());
        } else if child.is_element() {
            let is_block = child
                .node_name()
                .is_some_and(|tag| BLOCK_TAGS.iter().any(|block| *block == &*tag));
            if is_block {
                out.push(' ');
            }
            push_block_text(&child, out);
            if is_block {
                out.push(' ');
            }
        }
    }
}

/// Whether the element carries anything worth converting: non-blank text or
/// an image.
#[must_use]
pub fn has_content(sel: &Selection) -> bool {
    !sel.text().trim().is_empty() || sel.select("img").exists()
}

/// Inner HTML of the element.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

// === Tree Manipulation ===

/// Remove the matched elements and their subtrees.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Replace the element with a plain text node.
pub fn replace_with_text(sel: &Selection, text: &str) {
    sel.replace_with_html(escape_text(text).as_str());
}

/// Replace the element with a paragraph holding a single text node.
///
/// Used for block-level replacements so the surrounding converter keeps the
/// text on lines of its own.
pub fn replace_with_paragraph(sel: &Selection, text: &str) {
    sel.replace_with_html(format!("<p>{}</p>", escape_text(text)).as_str());
}

/// Escape text for insertion into HTML element content.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
