//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate exposing exactly the tree operations
//! the extractor relies on: parse-to-tree, tag selection, markup
//! serialization, visible text and child enumeration. Keeping them here lets
//! the scoring code read in terms of blocks and paragraphs rather than
//! selector strings.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
///
/// Malformed input never fails: html5ever recovers a best-effort tree that
/// always has `<html>`, `<head>` and `<body>` elements.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get the `<body>` element of a document, if present.
#[must_use]
pub fn body(doc: &Document) -> Option<Selection<'_>> {
    let body = doc.select("body");
    if body.is_empty() {
        None
    } else {
        Some(body.first())
    }
}

// === Tag/Node Information ===

/// Check whether a node is an element with the given tag name.
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.is_element()
        && node
            .node_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

// === Querying ===

/// Get descendant elements by tag name, in document order.
#[inline]
#[must_use]
pub fn get_elements_by_tag_name<'a>(sel: &Selection<'a>, tag: &str) -> Selection<'a> {
    sel.select(tag)
}

/// Get every element of the document, in document order.
#[inline]
#[must_use]
pub fn all_elements(doc: &Document) -> Selection<'_> {
    doc.select("*")
}

/// Get the direct element children of the first node in `sel` that carry
/// the given tag name.
#[must_use]
pub fn child_elements_named<'a>(sel: &Selection<'a>, tag: &str) -> Vec<Selection<'a>> {
    sel.nodes()
        .first()
        .map(|node| {
            node.children()
                .into_iter()
                .filter(|child| is_tag(child, tag))
                .map(Selection::from)
                .collect()
        })
        .unwrap_or_default()
}
