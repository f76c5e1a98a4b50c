//! # GamelogAggregator
//!
//! Pulls every directory player's per-game log from the source site and
//! merges them into one raw table for cleaning. Requests are strictly
//! sequential with an enforced minimum inter-request delay; a player whose
//! page cannot be fetched or parsed is skipped and recorded in the run
//! report rather than aborting the batch.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod report;
pub mod source;

pub use aggregator::{AggregateOutcome, Aggregator};
pub use config::AggregatorConfig;
pub use error::AggregateError;
pub use report::{RunReport, SkippedPlayer};
pub use source::{GamelogSource, HttpGamelogSource};

/// Column name used to tag merged rows with their player
pub const PLAYER_ID_COLUMN: &str = "player_id";
