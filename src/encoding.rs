//! Charset detection and transcoding of fetched bytes.
//!
//! A byte-order mark wins, then the `charset` of the HTTP `Content-Type`
//! header, then a `<meta>` declaration in the first 1024 bytes. Anything
//! undeclared is read as UTF-8.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::{HEADER_CHARSET, META_CHARSET};

/// Bytes scanned for a `<meta>` charset declaration.
const SNIFF_LEN: usize = 1024;

/// Pick the encoding of an HTML body.
#[must_use]
pub fn detect_encoding(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let from_header = content_type
        .and_then(|value| HEADER_CHARSET.captures(value))
        .and_then(|caps| Encoding::for_label(caps[1].as_bytes()));
    if let Some(encoding) = from_header {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    META_CHARSET
        .captures(&head)
        .and_then(|caps| Encoding::for_label(caps[1].as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode an HTML body to UTF-8, replacing invalid sequences with U+FFFD.
///
/// ```
/// use docs2md::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(transcode_to_utf8(html, None).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(html, content_type);
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
