//! # density-article
//!
//! Template-free article extraction. Given the raw HTML of a page it has
//! never seen, the library returns the title, the publish date and the main
//! body, using only structural and textual signals: tag nesting, link
//! density, text length and blank-line runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use density_article::get_article;
//!
//! let html = r#"<html><head><title>Launch Day | Example News</title></head>
//! <body><h1>Launch Day</h1><div class="meta">2024-03-15 10:30</div>
//! <div class="story"><p>The rocket lifted off at dawn.</p>
//! <p>Crowds gathered along the coast.</p><p>Engineers cheered.</p></div></body></html>"#;
//!
//! let article = get_article(html);
//! assert_eq!(article.title, "LaunchDay");
//! assert!(article.pub_date.is_some());
//! assert!(article.content.contains("The rocket lifted off at dawn."));
//! ```
//!
//! ## Pipeline
//!
//! - **Preprocessing** strips scripts, styles and comments and breaks lines
//!   after links ([`preprocess`]).
//! - **Title** comes from `<title>`, narrowed to the first `<h1>` when the
//!   heading is part of it ([`title`]).
//! - **Publish date** comes from a direct date pattern or a scored scan of
//!   short text fragments ([`date`]), normalized by [`date_parse`].
//! - **Body** is the best-scoring `<div>` by text density ([`block`],
//!   [`density`], [`select`]), converted to text by [`cleaner`].

mod error;
mod extract;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Compiled regex patterns.
pub mod patterns;

/// Markup preprocessing and the filter table.
pub mod preprocess;

/// Title extraction.
pub mod title;

/// Publish-date extraction.
pub mod date;

/// Publish-date normalization.
pub mod date_parse;

/// Candidate block splitting and ranking.
pub mod block;

/// Block density scoring.
pub mod density;

/// Content selection.
pub mod select;

/// HTML-to-text cleaning.
pub mod cleaner;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use density::CandidateBlock;
pub use error::{Error, Result};
pub use options::{Options, ScoreWeights};
pub use preprocess::{FilterTable, DEFAULT_FILTERS};
pub use result::Article;

use tracing::warn;

/// Extracts an article from an HTML document using default options.
///
/// Never fails: fields that cannot be found are left empty.
///
/// # Example
///
/// ```rust
/// use density_article::get_article;
///
/// let article = get_article("");
/// assert!(article.is_empty());
/// ```
#[must_use]
pub fn get_article(html: &str) -> Article {
    extract::extract_article(html, &Options::default())
}

/// Extracts an article from an HTML document with custom options.
///
/// Options that fail [`Options::validate`] are logged and replaced by the
/// defaults.
///
/// # Example
///
/// ```rust
/// use density_article::{get_article_with_options, Options};
///
/// let options = Options {
///     strict_cleaning: true,
///     ..Options::default()
/// };
/// let article = get_article_with_options("<div>Plain <a href=\"/\">link</a> text</div>", &options);
/// assert_eq!(article.content, "Plain\ntext");
/// ```
#[must_use]
pub fn get_article_with_options(html: &str, options: &Options) -> Article {
    match options.validate() {
        Ok(()) => extract::extract_article(html, options),
        Err(err) => {
            warn!(%err, "invalid options, using defaults");
            get_article(html)
        }
    }
}

/// Extracts an article from HTML bytes with automatic encoding detection.
///
/// # Example
///
/// ```rust
/// use density_article::get_article_bytes;
///
/// // GBK-encoded "中文"
/// let html = b"<meta charset=\"gbk\"><div>\xD6\xD0\xCE\xC4</div>";
/// let article = get_article_bytes(html);
/// assert_eq!(article.content, "中文");
/// ```
#[must_use]
pub fn get_article_bytes(html: &[u8]) -> Article {
    let html_str = encoding::transcode_to_utf8(html);
    get_article(&html_str)
}

/// Extracts an article from HTML bytes with custom options and automatic
/// encoding detection.
#[must_use]
pub fn get_article_bytes_with_options(html: &[u8], options: &Options) -> Article {
    let html_str = encoding::transcode_to_utf8(html);
    get_article_with_options(&html_str, options)
}
