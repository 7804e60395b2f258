//! Reads HTML from stdin and writes the extracted article as JSON to stdout.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (e.g. `RUST_LOG=density_article=debug`).

use density_article::get_article_bytes;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Read raw bytes so the page's declared charset is honoured
    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {err}");
        std::process::exit(1);
    }

    let article = get_article_bytes(&html);

    match serde_json::to_string(&article) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Failed to serialize article: {err}");
            std::process::exit(1);
        }
    }
}
