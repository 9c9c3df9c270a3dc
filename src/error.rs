// src/error.rs
use thiserror::Error;

/// Everything that can stop a scrape or an analysis run.
/// None of these are recoverable; callers surface them and bail.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP request failed for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} {url}")]
    Status { status: u16, url: String },

    #[error("Invalid selector '{0}'")]
    Selector(String),

    #[error("No '{0}' cells found on page")]
    MissingColumn(&'static str),

    #[error("{column} row {row}: cannot parse '{text}' as a number")]
    Parse {
        column: &'static str,
        /// 1-based, header excluded
        row: usize,
        text: String,
    },

    #[error("Column length mismatch: {left} has {left_len} rows, {right} has {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },

    #[error("Cannot fit a line: {0}")]
    Fit(&'static str),
}
