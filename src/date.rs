//! Publish-date extraction.
//!
//! Two stages. First a single pattern over the visible text looks for a
//! numeric (`2023-05-01 08:30`) or CJK calendar (`2023年5月1日`) date. When
//! nothing matches, every element's text is scored for how much it looks
//! like a short date stamp (`3小时前`, `昨天 08:30`, `发布于05-01`) and the
//! best fragment wins.

use std::collections::HashMap;

use regex::Captures;
use tracing::{debug, warn};

use crate::dom;
use crate::options::Options;
use crate::patterns::{strip_whitespace, ANY_TAG, DIRECT_DATE};

/// Characters that hint at a date or time stamp.
///
/// Digits, separators and CJK words such as 分钟前 (minutes ago), 小时
/// (hour), 昨 (yesterday), 发表/发布 (published) and 更新 (updated). `期`
/// appears twice (日期, 星期) and counts twice.
pub const DATE_INDICATORS: &str =
    "0123456789分钟前小时秒半天昨年月日期间发表于布稿出:：/-.更新上线星期周";

/// A text fragment considered by the fallback scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredFragment {
    /// Element text with whitespace removed.
    pub text: String,
    /// `2 × indicator hits − |ideal length − length|`.
    pub score: f64,
}

/// Number of indicator characters present in `text`.
#[must_use]
pub fn indicator_hits(text: &str) -> usize {
    DATE_INDICATORS.chars().filter(|c| text.contains(*c)).count()
}

/// Date-likeness score of a whitespace-free fragment.
#[must_use]
pub fn fragment_score(text: &str, ideal_len: usize) -> f64 {
    let len = text.chars().count();
    2.0 * indicator_hits(text) as f64 - len.abs_diff(ideal_len) as f64
}

/// First non-empty capture group in index order.
///
/// Group 0 is the whole match, so on any real match it is what gets
/// returned; inner groups only matter if the whole match were empty.
fn first_non_empty_capture(caps: &Captures) -> Option<String> {
    caps.iter()
        .flatten()
        .map(|m| m.as_str())
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Look for a direct date pattern in the visible text of `html`.
///
/// `None` means the pattern did not match. A match whose groups are all
/// empty is logged and reported as an empty string.
#[must_use]
pub fn match_direct_date(html: &str) -> Option<String> {
    let text = ANY_TAG.replace_all(html, "");
    let caps = DIRECT_DATE.captures(&text)?;

    Some(first_non_empty_capture(&caps).unwrap_or_else(|| {
        warn!("direct date pattern matched but every capture group was empty");
        String::new()
    }))
}

/// Score every element's text and keep the date-like fragments.
///
/// Fragments are keyed by their text; a repeated fragment keeps its first
/// position and takes the latest score. The result is in first-seen order.
#[must_use]
pub fn scan_date_fragments(html: &str, options: &Options) -> Vec<ScoredFragment> {
    let doc = dom::parse(html);
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut fragments: Vec<ScoredFragment> = Vec::new();

    for element in dom::all_elements(&doc).iter() {
        let text = strip_whitespace(&dom::text_content(&element));
        if text.is_empty()
            || text.chars().count() >= options.date_fragment_max_len
            || indicator_hits(&text) == 0
        {
            continue;
        }

        let score = fragment_score(&text, options.date_ideal_len);
        match positions.get(&text) {
            Some(&index) => fragments[index].score = score,
            None => {
                positions.insert(text.clone(), fragments.len());
                fragments.push(ScoredFragment { text, score });
            }
        }
    }

    fragments
}

/// Highest-scoring fragment; the first one seen wins ties.
#[must_use]
pub fn best_fragment(fragments: &[ScoredFragment]) -> Option<&ScoredFragment> {
    fragments.iter().fold(None, |best, fragment| match best {
        Some(current) if current.score >= fragment.score => Some(current),
        _ => Some(fragment),
    })
}

/// Find the publish-date string of a preprocessed document.
///
/// Returns an empty string when neither stage finds anything.
#[must_use]
pub fn extract_publish_date(html: &str, options: &Options) -> String {
    if html.trim().is_empty() {
        return String::new();
    }

    if let Some(date) = match_direct_date(html) {
        return date;
    }

    let fragments = scan_date_fragments(html, options);
    let best = best_fragment(&fragments);
    debug!(
        candidates = fragments.len(),
        best = best.map(|f| f.text.as_str()),
        "fallback date scan"
    );
    best.map(|f| f.text.clone()).unwrap_or_default()
}
