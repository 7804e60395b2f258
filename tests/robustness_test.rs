use density_article::cleaner::clean_html;
use density_article::{get_article, get_article_bytes, get_article_with_options, Options};
use std::time::{Duration, Instant};

#[test]
fn empty_input_gives_empty_article() {
    let article = get_article("");

    assert!(article.is_empty());
    assert_eq!(article.title, "");
    assert!(article.pub_date.is_none());
    assert_eq!(article.html_content, "");
    assert_eq!(article.content, "");
}

#[test]
fn whitespace_input_gives_no_content() {
    let article = get_article("  \n\t ");

    assert!(article.title.is_empty());
    assert!(article.pub_date.is_none());
    assert!(article.content.is_empty());
}

#[test]
fn does_not_panic_on_unclosed_tags() {
    let article = get_article("<p>text<div>more");
    assert!(article.content.contains("more"));
}

#[test]
fn does_not_panic_on_invalid_nesting() {
    let _ = get_article("<p><div></p></div>");
    let _ = get_article("</div></div><div>");
}

#[test]
fn does_not_panic_on_broken_attributes() {
    let _ = get_article("<div class=\"test id=broken>");
}

#[test]
fn does_not_panic_on_incomplete_entities() {
    let article = get_article("<div>&amp text &lt;</div>");
    assert!(article.content.contains("text"));
}

#[test]
fn does_not_panic_on_unterminated_title_and_heading() {
    let article = get_article("<title>Never closed <h1>Also open");
    assert!(article.title.is_empty());
}

#[test]
fn does_not_panic_on_unterminated_comment_or_script() {
    let _ = get_article("<div>before<!-- open comment</div>");
    let _ = get_article("<div>before<script>var x = 1;</div>");
}

#[test]
fn plain_text_input() {
    let article = get_article("no markup at all");
    assert_eq!(article.content, "no markup at all");
}

#[test]
fn deeply_nested_blocks() {
    let depth = 200;
    let html = format!("{}innermost{}", "<div>".repeat(depth), "</div>".repeat(depth));
    let article = get_article(&html);

    assert_eq!(article.html_content, "<div>innermost</div>");
    assert_eq!(article.content, "innermost");
}

#[test]
fn deeply_nested_inline_markup() {
    let depth = 20_000;
    let inline = format!("{}deep text{}", "<span>".repeat(depth), "</span>".repeat(depth));

    assert_eq!(clean_html(&format!("<div>{inline}</div>"), false), "deep text");

    let depth = 10_000;
    let html = format!(
        "<html><body><div>{}deep text{}</div></body></html>",
        "<span>".repeat(depth),
        "</span>".repeat(depth)
    );
    let article = get_article(&html);
    assert_eq!(article.content, "deep text");
}

#[test]
fn mixed_scripts_and_emoji() {
    let html = "<html><body><div>Привет мир 🌍 こんにちは 世界 مرحبا</div></body></html>";
    let article = get_article(html);

    assert!(article.content.contains("🌍"));
    assert!(article.content.contains("こんにちは"));
}

#[test]
fn invalid_bytes_do_not_panic() {
    let article = get_article_bytes(b"<div>Valid \xFF\xFE\xFD text</div>");
    assert!(article.content.contains("Valid"));
}

#[test]
fn invalid_options_fall_back_to_defaults() {
    let options = Options {
        block_tag: "div p".to_string(),
        ..Options::default()
    };
    let html = "<html><body><div>Still extracted with the default block tag.</div></body></html>";

    assert_eq!(get_article_with_options(html, &options), get_article(html));
}

#[test]
fn impossible_date_is_left_unparsed() {
    let html = "<html><body><div class=\"info\">2023-13-45 99:99</div><div>text</div></body></html>";
    assert!(get_article(html).pub_date.is_none());
}

#[test]
fn many_blocks_finish_quickly() {
    let block = "<div class=\"item\"><a href=\"/x\">link</a> some text</div>";
    let html = format!("<html><body>{}</body></html>", block.repeat(500));

    let start = Instant::now();
    let article = get_article(&html);
    let elapsed = start.elapsed();

    assert!(!article.content.is_empty());
    assert!(
        elapsed < Duration::from_secs(10),
        "extraction took too long: {elapsed:?}"
    );
}
