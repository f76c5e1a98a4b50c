//! Error types for aggregation

use thiserror::Error;

/// Errors that abort an aggregation run.
///
/// Individual player failures are not errors at this level; they are
/// recorded as skips in the run report.
#[derive(Error, Debug)]
pub enum AggregateError {
    /// Called with no player ids
    #[error("no player ids to aggregate")]
    NoPlayers,

    /// Every player was skipped; there is no dataset to hand downstream
    #[error("all {attempted} player(s) failed to aggregate")]
    AllFailed { attempted: usize },
}
