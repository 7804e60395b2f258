//! Extraction pipeline.
//!
//! raw markup → wrapper collapse → preprocessing → title (raw markup),
//! publish date (filtered markup), block ranking and selection (filtered
//! markup) → plain-text cleaning. No stage aborts the pipeline; each one
//! degrades to an empty field.

use tracing::{debug, warn};

use crate::block;
use crate::cleaner;
use crate::date;
use crate::date_parse;
use crate::options::Options;
use crate::preprocess;
use crate::result::Article;
use crate::select;
use crate::title;

/// Run the full pipeline on one document.
pub(crate) fn extract_article(html: &str, options: &Options) -> Article {
    debug!(len = html.len(), "starting article extraction");

    let html = preprocess::collapse_char_wrappers(html);
    let filtered = preprocess::preprocess(&html, &options.filters);

    let title = title::extract_title(&html);

    let date_text = date::extract_publish_date(&filtered, options);
    let pub_date = if date_text.is_empty() {
        None
    } else {
        match date_parse::parse_pub_date(&date_text, options.reference_time) {
            Ok(date) => Some(date),
            Err(err) => {
                warn!(%err, "publish date left unparsed");
                None
            }
        }
    };

    let candidates = block::rank_blocks(&filtered, options);
    let html_content = select::select_content(&candidates, &filtered);

    let content = if html_content.trim().is_empty() {
        String::new()
    } else {
        cleaner::clean_html(&html_content, options.strict_cleaning)
    };

    debug!(
        title_len = title.chars().count(),
        date = %date_text,
        candidates = candidates.len(),
        content_len = content.chars().count(),
        "article extracted"
    );

    Article {
        title,
        pub_date,
        html_content,
        content,
    }
}
