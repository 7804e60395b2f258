//! Result type for extraction output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Article extracted from one HTML document.
///
/// Every field degrades to its empty value rather than failing: a page with
/// no recognizable date has `pub_date: None`, a page with no text has empty
/// `html_content` and `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Title with all whitespace removed.
    pub title: String,

    /// Publication date, when one was found and recognized.
    pub pub_date: Option<DateTime<Utc>>,

    /// Markup of the selected article body.
    pub html_content: String,

    /// Plain text of `html_content`; empty whenever `html_content` is blank.
    pub content: String,
}

impl Article {
    /// Whether extraction found nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.pub_date.is_none()
            && self.html_content.is_empty()
            && self.content.is_empty()
    }
}
