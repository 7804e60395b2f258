//! Compiled regex patterns used across the extraction pipeline.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Markup Patterns
// =============================================================================

/// Matches any tag, non-greedy, across line breaks.
pub static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<.*?>").expect("ANY_TAG regex"));

/// Matches the first `<title>` element including its tags.
pub static TITLE_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title>.*?</title>").expect("TITLE_ELEMENT regex")
});

/// Matches the first `<h1>` element including its tags.
pub static H1_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h1(?:\s[^>]*)?>.*?</h1>").expect("H1_ELEMENT regex")
});

/// Opening `<body>` tag, attributes allowed.
pub static BODY_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<body(?:\s[^>]*)?>").expect("BODY_OPEN regex"));

/// Closing `</body>` tag.
pub static BODY_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</body\s*>").expect("BODY_CLOSE regex"));

/// Inline character wrapper emitted by some CJK typesetting plugins:
/// `<h-char unicode="..."><h-inner>X</h-inner></h-char>`.
pub static H_CHAR_WRAPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(H_CHAR_PATTERN).expect("H_CHAR_WRAPPER regex"));

/// Source of [`H_CHAR_WRAPPER`], shared with the default filter table.
pub const H_CHAR_PATTERN: &str = r"(?s)<h-char unicode=[^>]*?><h-inner>(.*?)</h-inner></h-char>";

/// Marker whose presence triggers the wrapper collapse on the raw document.
pub const H_CHAR_MARKER: &str = "<h-char unicode=";

// =============================================================================
// Date Patterns
// =============================================================================

/// Direct publish-date pattern over visible text.
///
/// Alternative 1: `YYYY-MM-DD` or `YY/MM/DD` (one separator kind per date),
/// optionally followed by `HH:MM`. Alternative 2: `YYYY年MM月DD日`, optionally
/// followed by `HH:MM`.
pub static DIRECT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"((?:\d{4}|\d{2})(?:-\d{1,2}-\d{1,2}|/\d{1,2}/\d{1,2}))(\s?\d{2}:\d{2})?|(\d{4}年\d{1,2}月\d{1,2}日)(\s?\d{2}:\d{2})?",
    )
    .expect("DIRECT_DATE regex")
});

/// Absolute date with numeric or CJK separators, used by the date normalizer.
pub static ABSOLUTE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\d{4}|\d{2})\s*(?:[-/.]|年)\s*(\d{1,2})\s*(?:[-/.]|月)\s*(\d{1,2})\s*日?(?:\s*[T\s]?\s*(\d{1,2})[:：](\d{2})(?:[:：](\d{2}))?)?",
    )
    .expect("ABSOLUTE_DATE regex")
});

/// Relative CJK phrase such as `3小时前` or `半天前`.
pub static RELATIVE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+|半)\s*(秒|分钟|分|小时|个小时|天|日)前").expect("RELATIVE_DATE regex")
});

/// `昨天` / `前天`, optionally followed by a clock time.
pub static DAY_NAME_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(昨天|前天|今天)\s*(?:(\d{1,2})[:：](\d{2}))?").expect("DAY_NAME_DATE regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches horizontal whitespace runs.
pub static INLINE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\u{a0}\u{3000}]+").expect("INLINE_WHITESPACE regex"));

/// Matches three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex"));

/// Removes every whitespace character, the way titles and density text are
/// compared.
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_date_rejects_mixed_separators() {
        assert!(DIRECT_DATE.find("2023-05/01").is_none());
        assert!(DIRECT_DATE.is_match("2023/05/01"));
        assert!(DIRECT_DATE.is_match("23-5-1"));
    }

    #[test]
    fn direct_date_matches_cjk_calendar() {
        let m = DIRECT_DATE.find("发布于2023年5月1日 08:30").map(|m| m.as_str());
        assert_eq!(m, Some("2023年5月1日 08:30"));
    }

    #[test]
    fn h1_element_does_not_match_hr() {
        assert!(H1_ELEMENT.find("<hr><p>x</p>").is_none());
        assert!(H1_ELEMENT.is_match("<h1 class=\"t\">Head</h1>"));
    }

    #[test]
    fn strip_whitespace_removes_all_kinds() {
        assert_eq!(strip_whitespace(" a\tb\nc\u{3000}d "), "abcd");
    }
}
