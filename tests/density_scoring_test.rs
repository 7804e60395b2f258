use density_article::block::{rank_blocks, split_blocks};
use density_article::density::{blank_runs, score_block, score_profile, BlockProfile};
use density_article::{Options, ScoreWeights};

fn score(markup: &str) -> f64 {
    match score_block(markup, &Options::default()) {
        Some(block) => block.score,
        None => panic!("expected a scored block for {markup:?}"),
    }
}

#[test]
fn more_text_with_equal_structure_scores_higher() {
    let short = score("<div><span>Some article text.</span><a href=\"/x\">x</a></div>");
    let long = score(
        "<div><span>Some article text, now followed by a good deal more of it.</span>\
         <a href=\"/x\">x</a></div>",
    );

    assert!(long > short);
}

#[test]
fn empty_nested_blocks_are_excluded_not_zero_scored() {
    let html = "<html><body>\
                <div><div></div><div></div><div></div></div>\
                <div>Real text</div>\
                </body></html>";
    let ranked = rank_blocks(html, &Options::default());

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].markup, "<div>Real text</div>");
}

#[test]
fn link_lists_lose_to_prose() {
    let html = r#"<html><body>
        <div class="nav"><a href="/1">One</a><a href="/2">Two</a><a href="/3">Three</a>
        <a href="/4">Four</a><a href="/5">Five</a></div>
        <div class="story">Prose of a modest length, still clearly an article body.</div>
        </body></html>"#;
    let ranked = rank_blocks(html, &Options::default());

    assert!(ranked[0].markup.contains("story"));
}

#[test]
fn nested_block_penalty_applies_per_non_blank_descendant() {
    let flat = score("<div>aaaaaaaaaabbbbbbbbbbcccccccccc</div>");
    let nested = score("<div><div>aaaaaaaaaa</div><div>bbbbbbbbbb</div><div>cccccccccc</div></div>");

    // Three non-blank children plus the block itself.
    assert!((flat - nested - 12.0).abs() < 1e-9);
}

#[test]
fn empty_child_block_still_penalizes_its_parent() {
    let flat = score("<div>abcdefghijklmnopqrst</div>");
    let with_empty_child = score("<div>abcdefghijklmnopqrst<div></div></div>");

    assert!((flat - with_empty_child - 3.0).abs() < 1e-9);
}

#[test]
fn long_blank_runs_cost_points() {
    let compact = score("<div>first line\nsecond line</div>");
    let gappy = score("<div>first line\n\n\n\n\n\nsecond line</div>");

    // Five blank lines: 1 for the first three, 0.2 for each extra one.
    assert!((compact - gappy - 1.4).abs() < 1e-9);
}

#[test]
fn paragraph_block_is_narrowed_to_its_paragraphs() {
    let html = "<div class=\"story\">\n\
                <p>Paragraph one of the story.</p>\n\
                <p>Paragraph two of the story.</p>\n\
                <p>Paragraph three of the story.</p>\n\
                <p>Paragraph four of the story.</p>\n\
                </div>";
    let block = match score_block(html, &Options::default()) {
        Some(block) => block,
        None => panic!("expected a scored block"),
    };

    assert!(block.markup.starts_with("<p>Paragraph one"));
    assert!(!block.markup.contains("story\""));
    assert_eq!(block.markup.matches("<p>").count(), 4);
}

#[test]
fn consolidation_drops_link_penalty() {
    let with_links = "<div><p>First <a href=\"/a\">linked</a> paragraph.</p>\
                      <p>Second <a href=\"/b\">linked</a> paragraph.</p>\
                      <p>Third <a href=\"/c\">linked</a> paragraph.</p></div>";
    let without_links = "<div><p>First linked paragraph.</p>\
                         <p>Second linked paragraph.</p>\
                         <p>Third linked paragraph.</p></div>";

    assert!((score(with_links) - score(without_links)).abs() < 1e-9);
}

#[test]
fn rank_is_sorted_descending() {
    let html = "<html><body><div>a</div><div>a much longer block of text than the first</div>\
                <div>medium length text</div></body></html>";
    let ranked = rank_blocks(html, &Options::default());

    assert_eq!(ranked.len(), 3);
    assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
}

#[test]
fn split_keeps_document_order_including_nested() {
    let html = "<html><body><div id=\"outer\"><div id=\"inner\">x</div></div></body></html>";
    let blocks = split_blocks(html, "div").unwrap_or_default();

    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].contains("outer"));
    assert_eq!(blocks[1], "<div id=\"inner\">x</div>");
}

#[test]
fn custom_weights_change_the_score() {
    let options = Options {
        weights: ScoreWeights {
            base_score: 0.0,
            chars_per_point: 10.0,
            ..ScoreWeights::default()
        },
        ..Options::default()
    };
    let block = score_block("<div>abcdefghijklmnopqrst</div>", &options);

    assert_eq!(block.map(|b| b.score), Some(2.0));
}

#[test]
fn profile_scoring_is_pure() {
    let profile = BlockProfile {
        nested_blocks: 1,
        anchors: 2,
        text_len: 40,
        paragraphs: None,
        blank_runs: blank_runs("a\n\n\n\nb"),
    };
    let weights = ScoreWeights::default();

    // 15 - 3 - 4 + 2 - 1
    assert!((score_profile(&profile, &weights) - 9.0).abs() < 1e-9);
    assert!((score_profile(&profile, &weights) - score_profile(&profile, &weights)).abs() < 1e-9);
}
