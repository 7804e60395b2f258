//! Configuration options for article extraction.
//!
//! The `Options` struct carries the filter table, the density scoring
//! weights and the date heuristics' limits. Every field has a default that
//! reproduces the tuned behaviour, so most callers only need
//! `Options::default()`.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::preprocess::{FilterTable, DEFAULT_FILTERS};

/// Weights of the block density score.
///
/// A candidate starts at `base_score`, loses points for nested blocks and
/// links, gains one point per `chars_per_point` visible characters and loses
/// points for long runs of blank lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Starting score of every candidate.
    ///
    /// Default: `15.0`
    pub base_score: f64,

    /// Penalty per nested block with non-blank text.
    ///
    /// Default: `3.0`
    pub nested_block_penalty: f64,

    /// Penalty per anchor element.
    ///
    /// Default: `2.0`
    pub anchor_penalty: f64,

    /// Visible characters worth one point.
    ///
    /// Default: `20.0`
    pub chars_per_point: f64,

    /// Minimum number of direct `<p>` children before paragraph
    /// consolidation is attempted.
    ///
    /// Default: `3`
    pub min_paragraphs: usize,

    /// Largest share of the visible text that consolidation may drop.
    ///
    /// Default: `0.1`
    pub max_paragraph_loss: f64,

    /// Length of a blank-line run that starts costing points.
    ///
    /// Default: `3`
    pub blank_run_threshold: usize,

    /// Penalty charged when a blank run reaches the threshold.
    ///
    /// Default: `1.0`
    pub blank_run_penalty: f64,

    /// Penalty for every blank line past the threshold.
    ///
    /// Default: `0.2`
    pub extra_blank_line_penalty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base_score: 15.0,
            nested_block_penalty: 3.0,
            anchor_penalty: 2.0,
            chars_per_point: 20.0,
            min_paragraphs: 3,
            max_paragraph_loss: 0.1,
            blank_run_threshold: 3,
            blank_run_penalty: 1.0,
            extra_blank_line_penalty: 0.2,
        }
    }
}

/// Configuration options for article extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use density_article::Options;
///
/// let options = Options {
///     strict_cleaning: true,
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Ordered pattern/replacement pairs applied before analysis.
    ///
    /// Default: [`DEFAULT_FILTERS`]
    pub filters: FilterTable,

    /// Density scoring weights.
    pub weights: ScoreWeights,

    /// Tag name of candidate body containers.
    ///
    /// Default: `"div"`
    pub block_tag: String,

    /// Fragments at least this long (in characters) are ignored by the
    /// fallback date scan.
    ///
    /// Default: `30`
    pub date_fragment_max_len: usize,

    /// Length of a typical short date stamp; the fallback scan penalizes
    /// fragments by their distance from it.
    ///
    /// Default: `6`
    pub date_ideal_len: usize,

    /// Passed to the content cleaner when deriving plain text.
    ///
    /// Default: `false`
    pub strict_cleaning: bool,

    /// Anchor for relative date phrases such as `3小时前`.
    ///
    /// When `None`, relative phrases stay unparsed so extraction depends on
    /// nothing but its input.
    ///
    /// Default: `None`
    pub reference_time: Option<DateTime<Utc>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            filters: DEFAULT_FILTERS.clone(),
            weights: ScoreWeights::default(),
            block_tag: "div".to_string(),
            date_fragment_max_len: 30,
            date_ideal_len: 6,
            strict_cleaning: false,
            reference_time: None,
        }
    }
}

impl Options {
    /// Checks that the options describe a usable pipeline.
    pub fn validate(&self) -> Result<()> {
        let tag = self.block_tag.trim();
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(Error::InvalidOptions(format!(
                "block_tag must be a plain tag name, got {:?}",
                self.block_tag
            )));
        }

        let per_point = self.weights.chars_per_point;
        if !per_point.is_finite() || per_point <= 0.0 {
            return Err(Error::InvalidOptions(
                "weights.chars_per_point must be positive".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.weights.max_paragraph_loss) {
            return Err(Error::InvalidOptions(
                "weights.max_paragraph_loss must be within [0, 1]".to_string(),
            ));
        }

        if self.weights.blank_run_threshold == 0 {
            return Err(Error::InvalidOptions(
                "weights.blank_run_threshold must be at least 1".to_string(),
            ));
        }

        if self.date_fragment_max_len == 0 {
            return Err(Error::InvalidOptions(
                "date_fragment_max_len must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.block_tag, "div");
        assert_eq!(opts.date_fragment_max_len, 30);
        assert_eq!(opts.date_ideal_len, 6);
        assert!(!opts.strict_cleaning);
        assert!(opts.reference_time.is_none());
        assert_eq!(opts.filters.len(), DEFAULT_FILTERS.len());
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_default_weights() {
        let w = ScoreWeights::default();

        assert!((w.base_score - 15.0).abs() < f64::EPSILON);
        assert!((w.nested_block_penalty - 3.0).abs() < f64::EPSILON);
        assert!((w.anchor_penalty - 2.0).abs() < f64::EPSILON);
        assert!((w.chars_per_point - 20.0).abs() < f64::EPSILON);
        assert_eq!(w.min_paragraphs, 3);
        assert!((w.max_paragraph_loss - 0.1).abs() < f64::EPSILON);
        assert_eq!(w.blank_run_threshold, 3);
        assert!((w.blank_run_penalty - 1.0).abs() < f64::EPSILON);
        assert!((w.extra_blank_line_penalty - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_bad_block_tag() {
        let opts = Options {
            block_tag: "div > p".to_string(),
            ..Options::default()
        };
        assert!(matches!(opts.validate(), Err(Error::InvalidOptions(_))));

        let opts = Options {
            block_tag: String::new(),
            ..Options::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_weights() {
        let opts = Options {
            weights: ScoreWeights {
                chars_per_point: 0.0,
                ..ScoreWeights::default()
            },
            ..Options::default()
        };
        assert!(opts.validate().is_err());

        let opts = Options {
            weights: ScoreWeights {
                max_paragraph_loss: 1.5,
                ..ScoreWeights::default()
            },
            ..Options::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_custom_block_tag_is_valid() {
        let opts = Options {
            block_tag: "section".to_string(),
            ..Options::default()
        };
        assert!(opts.validate().is_ok());
    }
}
