//! Markup preprocessing.
//!
//! Strips markup that never carries article text (scripts, styles,
//! comments), puts a line break after every link so link-dense runs stay on
//! their own lines, and collapses inline character wrappers. The filter
//! table is built once and shared by reference; nothing mutates it after
//! construction.

#![allow(clippy::expect_used)]

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::patterns::{H_CHAR_MARKER, H_CHAR_PATTERN, H_CHAR_WRAPPER};

/// A single pattern/replacement pair.
#[derive(Debug, Clone)]
pub struct Filter {
    pattern: Regex,
    replacement: String,
}

impl Filter {
    /// Compile a filter. The replacement may use `$1`-style group references.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let compiled = Regex::new(pattern).map_err(|source| Error::InvalidFilter {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: compiled,
            replacement: replacement.to_string(),
        })
    }

    /// The source text of the pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}

/// Ordered list of filters applied front to back.
#[derive(Debug, Clone, Default)]
pub struct FilterTable {
    filters: Vec<Filter>,
}

impl FilterTable {
    /// Build a table from `(pattern, replacement)` pairs, keeping their order.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self> {
        let filters = pairs
            .iter()
            .map(|(pattern, replacement)| Filter::new(pattern, replacement))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { filters })
    }

    /// Number of filters in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the table has no filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterate over the filters in application order.
    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }
}

/// Pairs behind [`DEFAULT_FILTERS`], in application order.
pub const DEFAULT_FILTER_PAIRS: &[(&str, &str)] = &[
    (r"(?is)<script.*?>.*?</script>", ""),
    (r"(?is)<style.*?>.*?</style>", ""),
    (r"(?s)<!--.*?-->", ""),
    // Portal pages chain dozens of links per line; break after each one.
    (r"(?i)</a>", "</a>\n"),
    (H_CHAR_PATTERN, "$1"),
];

/// Process-wide default filter table.
pub static DEFAULT_FILTERS: LazyLock<FilterTable> = LazyLock::new(|| {
    FilterTable::from_pairs(DEFAULT_FILTER_PAIRS).expect("DEFAULT_FILTERS patterns")
});

/// Apply every filter of `table` to `html`, in order.
///
/// Returns a new working copy; the input is left untouched so the title
/// heuristics can still see the original markup.
#[must_use]
pub fn preprocess(html: &str, table: &FilterTable) -> String {
    let mut text = html.to_string();
    for filter in table.iter() {
        let replaced = match filter.apply(&text) {
            Cow::Owned(replaced) => Some(replaced),
            Cow::Borrowed(_) => None,
        };
        if let Some(replaced) = replaced {
            text = replaced;
        }
    }
    text
}

/// Collapse `<h-char>` character wrappers to their inner text.
///
/// Only runs the replacement when the marker is present.
#[must_use]
pub fn collapse_char_wrappers(html: &str) -> Cow<'_, str> {
    if html.contains(H_CHAR_MARKER) {
        H_CHAR_WRAPPER.replace_all(html, "$1")
    } else {
        Cow::Borrowed(html)
    }
}
