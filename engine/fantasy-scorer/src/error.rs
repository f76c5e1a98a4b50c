//! Error types for scoring

use thiserror::Error;

/// A multiplier mapping that cannot be applied
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The mapping references a statistic the cleaner never produces
    #[error("unrecognized statistic(s) in multiplier table: {}", keys.join(", "))]
    UnknownStat { keys: Vec<String> },

    /// The mapping has no entries at all
    #[error("multiplier table is empty")]
    EmptyWeights,

    /// The weights file could not be read or parsed
    #[error("failed to load weights: {0}")]
    Load(String),
}

/// Errors that can occur while building the summary table
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No cleaned rows to score
    #[error("no game rows to score")]
    Empty,
}
