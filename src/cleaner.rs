//! HTML-to-text cleaning of the selected article body.
//!
//! Walks the fragment's tree and emits its text with a line break around
//! every block-level element, then normalizes whitespace. Non-strict mode
//! keeps one blank line between paragraphs; strict mode also drops link
//! text and removes blank lines entirely.

use crate::dom::{self, NodeRef};
use crate::patterns::{INLINE_WHITESPACE, MULTIPLE_NEWLINES};

/// Elements whose text never belongs to the article.
const SKIPPED_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "iframe", "object", "embed", "head", "title",
];

/// Elements rendered on their own lines.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "tr", "ul",
];

fn has_name(names: &[&str], name: &str) -> bool {
    names.iter().any(|n| n.eq_ignore_ascii_case(name))
}

/// Pending work for the text walk.
enum Step<'a> {
    Visit(NodeRef<'a>),
    CloseBlock,
}

/// Emit the text under `root` in document order.
///
/// Uses an explicit stack so nesting depth is bounded by the heap, not the
/// call stack.
fn push_text(root: &NodeRef, strict: bool, out: &mut String) {
    let mut stack: Vec<Step> = root.children().into_iter().rev().map(Step::Visit).collect();

    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Visit(node) => node,
            Step::CloseBlock => {
                out.push_str("\n\n");
                continue;
            }
        };

        if node.is_text() {
            out.push_str(&node.text());
            continue;
        }
        if !node.is_element() {
            continue;
        }

        let name = node.node_name().map(|n| n.to_string()).unwrap_or_default();
        if has_name(SKIPPED_TAGS, &name) || (strict && dom::is_tag(&node, "a")) {
            continue;
        }
        if dom::is_tag(&node, "br") {
            out.push('\n');
            continue;
        }

        if has_name(BLOCK_TAGS, &name) {
            out.push_str("\n\n");
            stack.push(Step::CloseBlock);
        }
        stack.extend(node.children().into_iter().rev().map(Step::Visit));
    }
}

fn normalize(text: &str, strict: bool) -> String {
    let lines: Vec<String> = text
        .replace('\r', "")
        .split('\n')
        .map(|line| INLINE_WHITESPACE.replace_all(line, " ").trim().to_string())
        .collect();

    if strict {
        return lines
            .into_iter()
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
    }

    let joined = lines.join("\n");
    MULTIPLE_NEWLINES.replace_all(&joined, "\n\n").trim().to_string()
}

/// Convert an HTML fragment to plain text.
#[must_use]
pub fn clean_html(fragment: &str, strict: bool) -> String {
    if fragment.trim().is_empty() {
        return String::new();
    }

    let doc = dom::parse(fragment);
    let Some(body) = dom::body(&doc) else {
        return String::new();
    };
    let Some(root) = body.nodes().first().copied() else {
        return String::new();
    };

    let mut out = String::with_capacity(fragment.len() / 2);
    push_text(&root, strict, &mut out);
    normalize(&out, strict)
}
