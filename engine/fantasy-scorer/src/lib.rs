//! # FantasyScorer
//!
//! Applies a league's per-statistic multiplier table to every cleaned game
//! row and rolls the results up into one summary row per player: season
//! totals and distribution statistics over all scheduled games (unplayed
//! games count as zero) alongside the same statistics over played games
//! only. The summary table is the final artifact of the pipeline.

pub mod error;
pub mod scorer;
pub mod stats;
pub mod summary;
pub mod weights;

pub use error::{ConfigError, ScoreError};
pub use scorer::{score_game, score_game_or_missing};
pub use stats::{mean, median, std_dev};
pub use summary::{summarize, PlayerSummary};
pub use weights::ScoringWeights;
