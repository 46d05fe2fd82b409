//! Structural transformer.
//!
//! Converts a sanitized, reference-resolved region into Markdown. Code
//! blocks, images, links, headings, blockquotes and lists are rendered by
//! dedicated passes, in that order, and replaced in the tree by placeholder
//! tokens. The general converter then handles whatever remains and the
//! tokens are expanded last.

use tracing::debug;

use crate::dom::{self, Selection};
use crate::markdown::{self, FragmentKind, Fragments};
use crate::page::ContentRegion;

/// Bare class names accepted as a code language.
pub const KNOWN_LANGUAGES: &[&str] = &[
    "python",
    "javascript",
    "java",
    "cpp",
    "c",
    "bash",
    "shell",
    "json",
    "yaml",
    "xml",
    "html",
    "css",
];

/// Convert the region to Markdown, consuming it.
#[must_use]
pub fn transform(region: ContentRegion<'_>) -> String {
    let mut fragments = Fragments::new();

    convert_code_blocks(&region, &mut fragments);
    convert_images(&region, &mut fragments);
    convert_links(&region, &mut fragments);
    convert_headings(&region, &mut fragments);
    convert_blockquotes(&region, &mut fragments);
    convert_lists(&region, &mut fragments);

    let html = dom::inner_html(region.root());
    let converted = markdown::normalize_blank_lines(&markdown::convert_html(&html));
    debug!(
        selector = region.selector(),
        fragments = fragments.len(),
        "converted region to markdown"
    );
    fragments.expand(&converted).trim().to_string()
}

/// Language tag of a `code` (or `pre`) element.
///
/// Reads the first `language-<lang>` or `lang-<lang>` class token, or a bare
/// class name from [`KNOWN_LANGUAGES`].
#[must_use]
pub fn code_language(sel: &Selection) -> Option<String> {
    dom::class_tokens(sel).into_iter().find_map(|class| {
        if let Some(lang) = class.strip_prefix("language-").or_else(|| class.strip_prefix("lang-")) {
            return (!lang.is_empty()).then(|| lang.to_string());
        }
        KNOWN_LANGUAGES.contains(&class.as_str()).then_some(class)
    })
}

/// Language from a Pygments wrapper such as `<div class="highlight-python">`.
fn highlight_language(pre: &Selection) -> Option<String> {
    let mut current = pre.parent();
    while current.exists() {
        let found = dom::class_tokens(&current).into_iter().find_map(|class| {
            class
                .strip_prefix("highlight-")
                .filter(|lang| !lang.is_empty() && *lang != "default")
                .map(str::to_string)
        });
        if found.is_some() {
            return found;
        }
        current = current.parent();
    }
    None
}

fn convert_code_blocks(region: &ContentRegion<'_>, fragments: &mut Fragments) {
    for pre in dom::each(&region.select("pre")) {
        let code = pre.select("code").first();
        let (text, language) = if code.exists() {
            (dom::text_content(&code), code_language(&code))
        } else {
            (
                dom::text_content(&pre),
                code_language(&pre).or_else(|| highlight_language(&pre)),
            )
        };

        let rendered = markdown::fenced_block(&text, language.as_deref());
        let token = fragments.push(rendered, FragmentKind::Block);
        dom::replace_with_paragraph(&pre, &token);
    }
}

fn convert_images(region: &ContentRegion<'_>, fragments: &mut Fragments) {
    for img in dom::each(&region.select("img")) {
        match dom::non_blank_attribute(&img, "src") {
            Some(src) => {
                let alt = dom::collapse_whitespace(&dom::get_attribute(&img, "alt").unwrap_or_default());
                let token = fragments.push(format!("![{alt}]({src})"), FragmentKind::Inline);
                dom::replace_with_text(&img, &token);
            }
            None => dom::remove(&img),
        }
    }
}

fn convert_links(region: &ContentRegion<'_>, fragments: &mut Fragments) {
    for link in dom::each(&region.select("a[href]")) {
        let Some(href) = dom::non_blank_attribute(&link, "href") else {
            continue;
        };
        let text = dom::collapsed_text(&link);
        let text = if text.is_empty() { href.clone() } else { text };
        let token = fragments.push(format!("[{text}]({href})"), FragmentKind::Inline);
        dom::replace_with_text(&link, &token);
    }
}

fn convert_headings(region: &ContentRegion<'_>, fragments: &mut Fragments) {
    for heading in dom::each(&region.select("h1, h2, h3, h4, h5, h6")) {
        let level = dom::tag_name(&heading)
            .and_then(|tag| tag[1..].parse::<usize>().ok())
            .unwrap_or(1);
        let text = dom::collapsed_text(&heading);
        if text.is_empty() {
            dom::remove(&heading);
            continue;
        }
        let token = fragments.push(format!("{} {text}", "#".repeat(level)), FragmentKind::Block);
        dom::replace_with_paragraph(&heading, &token);
    }
}

/// Blockquotes flatten to a single `> ` line. Code blocks found inside
/// follow on quoted lines of their own; lists are not converted yet at this
/// point and flatten into the quote text.
fn convert_blockquotes(region: &ContentRegion<'_>, fragments: &mut Fragments) {
    for quote in dom::each(&region.select("blockquote")) {
        if dom::has_ancestor_tag(&quote, "blockquote") {
            continue;
        }
        let (inline, blocks) = fragments.split_blocks(&dom::block_text(&quote));
        if inline.is_empty() && blocks.is_empty() {
            dom::remove(&quote);
            continue;
        }

        let mut lines = Vec::new();
        if !inline.is_empty() {
            lines.push(format!("> {inline}"));
        }
        for block in blocks {
            lines.extend(block.lines().map(|line| {
                if line.is_empty() {
                    ">".to_string()
                } else {
                    format!("> {line}")
                }
            }));
        }

        let token = fragments.push(lines.join("\n"), FragmentKind::Block);
        dom::replace_with_paragraph(&quote, &token);
    }
}

/// Lists are converted inside-out so each nested list is already rendered
/// when its parent item is read.
fn convert_lists(region: &ContentRegion<'_>, fragments: &mut Fragments) {
    let lists = dom::each(&region.select("ul, ol"));

    for list in lists.into_iter().rev() {
        let ordered = dom::tag_name(&list).as_deref() == Some("ol");
        let mut lines = Vec::new();
        let mut number = 0usize;

        for item in dom::child_elements(&list, "li") {
            let (inline, blocks) = fragments.split_blocks(&dom::block_text(&item));
            if inline.is_empty() && blocks.is_empty() {
                continue;
            }

            let marker = if ordered {
                number += 1;
                format!("{number}.")
            } else {
                "-".to_string()
            };
            lines.push(format!("{marker} {inline}").trim_end().to_string());
            for block in blocks {
                lines.push(markdown::indent(&block, marker.len() + 1));
            }
        }

        if lines.is_empty() {
            dom::remove(&list);
            continue;
        }
        let token = fragments.push(lines.join("\n"), FragmentKind::List);
        dom::replace_with_paragraph(&list, &token);
    }
}
