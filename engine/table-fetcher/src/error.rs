//! Error types for fetching and table extraction

use thiserror::Error;

/// Errors raised while retrieving a page or locating a table in it
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// The page fetched fine but the expected table structure was absent
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors raised while extracting a table from a fetched document
#[derive(Error, Debug)]
pub enum ParseError {
    /// Fewer tables in the document than the requested index implies
    #[error("table index {index} out of range: document has {found} table(s)")]
    TableNotFound { index: usize, found: usize },

    /// The indexed table exists but carries no data rows
    #[error("table {index} has no data rows")]
    EmptyTable { index: usize },

    /// A required column is missing from the table header
    #[error("missing expected column(s): {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// A CSS selector failed to compile
    #[error("invalid selector: {0}")]
    Selector(String),
}
