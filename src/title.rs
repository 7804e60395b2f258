//! Title extraction.
//!
//! Works on the raw markup rather than the parsed tree so that the
//! `<title>` and `<h1>` elements are read exactly as authored. The first
//! `<h1>` usually holds a cleaner title than `<title>`, which tends to carry
//! a site-name suffix; the heading wins whenever the metadata title contains
//! it.

use tracing::trace;

use crate::patterns::{strip_whitespace, ANY_TAG, H1_ELEMENT, TITLE_ELEMENT};

/// Text of the first element matched by `element`, with all tags removed.
fn first_element_text(html: &str, element: &regex::Regex) -> String {
    element
        .find(html)
        .map(|m| ANY_TAG.replace_all(m.as_str(), "").into_owned())
        .unwrap_or_default()
}

/// Pick between the metadata title and the heading title.
///
/// Both arguments are tag-free text. Whitespace is kept here because the
/// substring test runs on the text as written.
#[must_use]
pub fn choose_title<'a>(meta_title: &'a str, heading: &'a str) -> &'a str {
    if !heading.is_empty() && meta_title.contains(heading) {
        heading
    } else {
        meta_title
    }
}

/// Extract the article title from the original (unfiltered) markup.
///
/// The result has every whitespace character removed. Returns an empty string
/// when the document has neither a `<title>` nor an `<h1>` element.
#[must_use]
pub fn extract_title(html: &str) -> String {
    let meta_title = first_element_text(html, &TITLE_ELEMENT);
    let heading = first_element_text(html, &H1_ELEMENT);
    trace!(meta_title = %meta_title, heading = %heading, "title candidates");

    strip_whitespace(choose_title(&meta_title, &heading))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_without_heading() {
        let html = "<html><head><title>Foo</title></head><body></body></html>";
        assert_eq!(extract_title(html), "Foo");
    }

    #[test]
    fn heading_wins_when_contained_in_title() {
        let html = "<title>Bar - Example News</title><h1 class=\"headline\">Bar</h1>";
        assert_eq!(extract_title(html), "Bar");
    }

    #[test]
    fn title_wins_when_heading_is_unrelated() {
        let html = "<title>Daily Report</title><h1>Site Logo</h1>";
        assert_eq!(extract_title(html), "DailyReport");
    }

    #[test]
    fn nested_tags_are_stripped() {
        let html = "<title>Big <b>News</b> Today | Portal</title>\
                    <h1><a href=\"/x\">Big <b>News</b> Today</a></h1>";
        assert_eq!(extract_title(html), "BigNewsToday");
    }

    #[test]
    fn title_is_case_insensitive_and_multiline() {
        let html = "<TITLE>\n  Line One\n  Line Two\n</TITLE>";
        assert_eq!(extract_title(html), "LineOneLineTwo");
    }

    #[test]
    fn empty_heading_does_not_win() {
        assert_eq!(choose_title("Title", ""), "Title");
        assert_eq!(extract_title("<title>Title</title><h1></h1>"), "Title");
    }

    #[test]
    fn no_title_sources() {
        assert_eq!(extract_title(""), "");
        assert_eq!(extract_title("<p>No title here</p>"), "");
    }

    #[test]
    fn heading_alone_is_not_used() {
        // Without a metadata title the heading cannot be contained in it.
        assert_eq!(extract_title("<h1>Lonely</h1>"), "");
    }
}
