//! Compiled regex patterns shared by the pipeline.
//!
//! All patterns are compiled once on first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Any run of whitespace, collapsed to one space in extracted text.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Blog by-line opening the first paragraph: `by: NAME, Mon D, YYYY`.
///
/// Both groups are required; a by-line without a parseable date is not a
/// match at all.
pub static BYLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^by:\s*(.+?)\s*,\s*([A-Za-z]+\s+\d+,\s*\d{4})").expect("BYLINE regex")
});

/// Characters that cannot appear in a path segment on common filesystems.
pub static PATH_ILLEGAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|]"#).expect("PATH_ILLEGAL regex"));

/// Placeholder token standing for a pre-rendered Markdown fragment.
pub static FRAGMENT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"DOCSMDFRAG(\d+)X").expect("FRAGMENT_TOKEN regex"));

/// Three or more consecutive newlines, possibly with trailing blanks between.
pub static EXCESS_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*(?:\n[ \t]*){2,}").expect("EXCESS_BLANK_LINES regex"));

/// Charset declared in a `<meta charset>` or `http-equiv` `<meta>` tag.
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;/]+)"#).expect("META_CHARSET regex")
});

/// `charset` parameter of an HTTP `Content-Type` header.
pub static HEADER_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*"?([^";\s]+)"#).expect("HEADER_CHARSET regex")
});
