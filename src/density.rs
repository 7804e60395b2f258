//! Block density scoring.
//!
//! Each candidate block is re-parsed on its own, measured into a
//! [`BlockProfile`], and scored by folding a fixed list of rules over that
//! profile:
//!
//! | rule              | effect                                              |
//! |-------------------|-----------------------------------------------------|
//! | base              | `+15`                                               |
//! | nested blocks     | `-3` per non-blank block incl. itself, if nesting   |
//! | anchors           | `-2` per `<a>`                                      |
//! | text length       | `+1` per 20 visible characters                      |
//! | paragraphs        | `+1` per direct `<p>` beyond two, after consolidation |
//! | blank lines       | `-1` at 3 consecutive blank lines, `-0.2` per extra |
//!
//! Paragraph consolidation narrows a block to its direct `<p>` children when
//! they hold at least 90% of its text. The consolidated score drops the
//! nesting and anchor penalties. Consolidation copies markup out of the
//! isolated tree; nothing is moved, so sibling candidates never see a
//! changed document.

use tracing::trace;

use crate::dom::{self, Selection};
use crate::options::{Options, ScoreWeights};
use crate::patterns::strip_whitespace;

/// A scored article-body candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateBlock {
    /// Markup of the candidate: the block element itself, or its direct
    /// paragraphs when consolidation applied.
    pub markup: String,
    /// Density score; higher is more article-like.
    pub score: f64,
}

/// Measurements the score is computed from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockProfile {
    /// Non-blank blocks of the same tag, the candidate included; zero when
    /// the candidate nests no block at all.
    pub nested_blocks: usize,
    /// Anchor elements anywhere inside the block.
    pub anchors: usize,
    /// Visible characters, whitespace excluded.
    pub text_len: usize,
    /// Number of direct paragraphs when the block was consolidated.
    pub paragraphs: Option<usize>,
    /// Lengths of every run of consecutive blank lines in the block text.
    pub blank_runs: Vec<usize>,
}

impl BlockProfile {
    fn is_consolidated(&self) -> bool {
        self.paragraphs.is_some()
    }
}

type Rule = fn(&BlockProfile, &ScoreWeights) -> f64;

fn nesting_penalty(profile: &BlockProfile, weights: &ScoreWeights) -> f64 {
    if profile.is_consolidated() {
        return 0.0;
    }
    -(profile.nested_blocks as f64) * weights.nested_block_penalty
}

fn anchor_penalty(profile: &BlockProfile, weights: &ScoreWeights) -> f64 {
    if profile.is_consolidated() {
        return 0.0;
    }
    -(profile.anchors as f64) * weights.anchor_penalty
}

fn length_bonus(profile: &BlockProfile, weights: &ScoreWeights) -> f64 {
    profile.text_len as f64 / weights.chars_per_point
}

fn paragraph_bonus(profile: &BlockProfile, weights: &ScoreWeights) -> f64 {
    profile.paragraphs.map_or(0.0, |count| {
        count as f64 - weights.min_paragraphs.saturating_sub(1) as f64
    })
}

fn blank_line_penalty(profile: &BlockProfile, weights: &ScoreWeights) -> f64 {
    profile
        .blank_runs
        .iter()
        .filter(|&&run| run >= weights.blank_run_threshold)
        .map(|&run| {
            let extra = (run - weights.blank_run_threshold) as f64;
            -(weights.blank_run_penalty + extra * weights.extra_blank_line_penalty)
        })
        .sum()
}

const RULES: [Rule; 5] = [
    nesting_penalty,
    anchor_penalty,
    length_bonus,
    paragraph_bonus,
    blank_line_penalty,
];

/// Score a profile. Pure: the same profile always yields the same score.
#[must_use]
pub fn score_profile(profile: &BlockProfile, weights: &ScoreWeights) -> f64 {
    RULES
        .iter()
        .fold(weights.base_score, |score, rule| score + rule(profile, weights))
}

/// Lengths of the runs of consecutive blank lines in `text`.
#[must_use]
pub fn blank_runs(text: &str) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut current = 0;

    for line in text.split('\n') {
        if line.trim().is_empty() {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }

    runs
}

struct Consolidated {
    markup: String,
    text: String,
    text_len: usize,
    paragraphs: usize,
}

/// Narrow `block` to its direct paragraphs if they keep nearly all its text.
fn consolidate_paragraphs(
    block: &Selection,
    text_len: usize,
    weights: &ScoreWeights,
) -> Option<Consolidated> {
    let paragraphs = dom::child_elements_named(block, "p");
    if paragraphs.len() < weights.min_paragraphs {
        return None;
    }

    let text: String = paragraphs
        .iter()
        .map(|p| dom::text_content(p).to_string())
        .collect();
    let kept = strip_whitespace(&text).chars().count();
    if kept == 0 {
        return None;
    }

    let lost = text_len.saturating_sub(kept) as f64 / text_len as f64;
    if lost > weights.max_paragraph_loss {
        return None;
    }

    Some(Consolidated {
        markup: paragraphs
            .iter()
            .map(|p| dom::outer_html(p).to_string())
            .collect(),
        text,
        text_len: kept,
        paragraphs: paragraphs.len(),
    })
}

/// Score one candidate given its outer markup.
///
/// The markup is parsed in isolation so nested-block and anchor counts cover
/// only the candidate and its descendants. Returns `None` when the markup has
/// no block element of the configured tag, or when the block has no visible
/// text: such candidates are dropped, not scored as zero.
#[must_use]
pub fn score_block(outer_html: &str, options: &Options) -> Option<CandidateBlock> {
    let weights = &options.weights;
    let tag = options.block_tag.as_str();

    let doc = dom::parse(outer_html);
    let body = dom::body(&doc)?;
    let block = dom::get_elements_by_tag_name(&body, tag).first();
    if block.is_empty() {
        return None;
    }

    let raw_text = dom::text_content(&block).to_string();
    let visible_len = strip_whitespace(&raw_text).chars().count();
    if visible_len == 0 {
        return None;
    }

    // Once a block contains another block, every non-blank block in the
    // isolated tree is penalized, the candidate itself included.
    let descendants = dom::get_elements_by_tag_name(&block, tag);
    let nested_blocks = if descendants.is_empty() {
        0
    } else {
        1 + descendants
            .iter()
            .filter(|nested| !dom::text_content(nested).trim().is_empty())
            .count()
    };
    let anchors = dom::get_elements_by_tag_name(&block, "a").length();

    let (markup, text, profile) = match consolidate_paragraphs(&block, visible_len, weights) {
        Some(consolidated) => {
            let profile = BlockProfile {
                nested_blocks,
                anchors,
                text_len: consolidated.text_len,
                paragraphs: Some(consolidated.paragraphs),
                blank_runs: blank_runs(&consolidated.text),
            };
            (consolidated.markup, consolidated.text, profile)
        }
        None => {
            let profile = BlockProfile {
                nested_blocks,
                anchors,
                text_len: visible_len,
                paragraphs: None,
                blank_runs: blank_runs(&raw_text),
            };
            (dom::outer_html(&block).to_string(), raw_text, profile)
        }
    };

    let score = score_profile(&profile, weights);
    trace!(
        score,
        text_len = profile.text_len,
        nested = profile.nested_blocks,
        anchors = profile.anchors,
        paragraphs = profile.paragraphs,
        lines = text.lines().count(),
        "scored block"
    );

    Some(CandidateBlock { markup, score })
}
