//! Error types for density-article.
//!
//! Extraction itself never fails: every stage degrades to an empty field.
//! These errors surface only from the pieces that can be called on their
//! own, such as option validation and publish-date normalization.

/// Error type for configuration and date normalization.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Options contain a value the pipeline cannot work with.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// A filter pattern in the preprocessing table failed to compile.
    #[error("Invalid filter pattern {pattern:?}: {source}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The date string matched none of the supported formats.
    #[error("Unrecognized date: {0:?}")]
    UnrecognizedDate(String),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
