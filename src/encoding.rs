//! Character encoding detection and transcoding.
//!
//! Turns raw page bytes into UTF-8 before extraction. Chinese portals still
//! serve GBK/GB2312 and Big5 pages, so the declared charset matters.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes of the document head scanned for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>;]+)"#)
        .expect("valid regex")
});

/// Charset label declared in the document head, if any.
fn declared_charset(head: &str) -> Option<&str> {
    CONTENT_TYPE_CHARSET_RE
        .captures(head)
        .or_else(|| CHARSET_META_RE.captures(head))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Detect character encoding from HTML bytes.
///
/// Order: byte-order mark, then a charset declared in a `<meta>` tag within
/// the first 1024 bytes, then UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Undecodable sequences become U+FFFD rather than errors.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _encoding_used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
