//! Block splitting.
//!
//! Enumerates every candidate container under `<body>` and hands each one,
//! as standalone markup, to the density scorer.

use std::cmp::Ordering;

use tracing::debug;

use crate::density::{score_block, CandidateBlock};
use crate::dom;
use crate::options::Options;

/// Outer markup of every `tag` element under `<body>`, in document order.
///
/// Returns `None` when the document has no body or no such element.
#[must_use]
pub fn split_blocks(html: &str, tag: &str) -> Option<Vec<String>> {
    let doc = dom::parse(html);
    let body = dom::body(&doc)?;
    let blocks = dom::get_elements_by_tag_name(&body, tag);
    if blocks.is_empty() {
        return None;
    }

    Some(
        blocks
            .iter()
            .map(|block| dom::outer_html(&block).to_string())
            .collect(),
    )
}

/// Score every candidate block of `html`, best first.
///
/// Blocks without visible text are left out. The sort is stable, so among
/// equal scores the block that appears first in the document comes first.
#[must_use]
pub fn rank_blocks(html: &str, options: &Options) -> Vec<CandidateBlock> {
    let Some(blocks) = split_blocks(html, &options.block_tag) else {
        debug!(tag = %options.block_tag, "no candidate blocks");
        return Vec::new();
    };

    let mut scored: Vec<CandidateBlock> = blocks
        .iter()
        .filter_map(|block| score_block(block, options))
        .collect();
    debug!(blocks = blocks.len(), scored = scored.len(), "scored candidate blocks");

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}
