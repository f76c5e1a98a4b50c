//! Error types for directory building

use table_fetcher::FetchError;
use thiserror::Error;

/// Errors that can occur while building the player directory.
///
/// All of these abort the run: a partial or misaligned directory would
/// silently corrupt every downstream join.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The directory page could not be fetched or parsed
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Extracted profile links do not line up one-to-one with player rows
    #[error("link/row mismatch: {links} profile link(s) for {rows} player row(s)")]
    LinkRowMismatch { links: usize, rows: usize },

    /// A profile href did not contain a player id in the expected position
    #[error("malformed profile link: {href}")]
    MalformedLink { href: String },

    /// No players survived filtering
    #[error("directory is empty after filtering (season {season})")]
    Empty { season: u32 },

    /// Configuration out of plausible range
    #[error("configuration error: {0}")]
    Config(String),
}
