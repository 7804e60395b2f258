//! Content selection.

use crate::density::CandidateBlock;
use crate::dom;
use crate::patterns::{BODY_CLOSE, BODY_OPEN};

/// The highest-scoring candidate; the first one wins ties.
#[must_use]
pub fn best_candidate(candidates: &[CandidateBlock]) -> Option<&CandidateBlock> {
    candidates.iter().fold(None, |best, candidate| match best {
        Some(current) if current.score >= candidate.score => Some(current),
        _ => Some(candidate),
    })
}

/// Inner markup of the `<body>` of `html`, the last-resort content.
///
/// The text between the first `<body>` tag and the last `</body>` tag is
/// returned as written, with no closing tag meaning "to the end". Documents
/// without a literal `<body>` tag fall back to the body the parser recovers,
/// which is re-serialized.
#[must_use]
pub fn body_markup(html: &str) -> String {
    if let Some(open) = BODY_OPEN.find(html) {
        let rest = &html[open.end()..];
        let end = BODY_CLOSE
            .find_iter(rest)
            .last()
            .map_or(rest.len(), |close| close.start());
        return rest[..end].to_string();
    }

    let doc = dom::parse(html);
    dom::body(&doc)
        .map(|body| dom::inner_html(&body).to_string())
        .unwrap_or_default()
}

/// Markup of the best candidate, or of the whole body when there is none.
#[must_use]
pub fn select_content(candidates: &[CandidateBlock], html: &str) -> String {
    match best_candidate(candidates) {
        Some(best) => best.markup.clone(),
        None => body_markup(html),
    }
}
