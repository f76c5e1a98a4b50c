//! Per-game weighted scoring

use stat_cleaner::{stat_value, GameLog};

use crate::weights::ScoringWeights;

/// Weighted fantasy score for one game row.
///
/// A missing statistic contributes 0 to the sum, so an unplayed game scores
/// exactly 0 rather than missing. A single missing term in an otherwise
/// played game likewise zeroes only that term.
pub fn score_game(log: &GameLog, weights: &ScoringWeights) -> f64 {
    weights
        .weights
        .iter()
        .map(|(key, multiplier)| stat_value(log, key).unwrap_or(0.0) * multiplier)
        .sum()
}

/// Weighted score for played games, missing for unplayed ones.
///
/// This is the variant the played-games aggregates are computed over, so an
/// unplayed game never drags the per-game distribution toward zero.
pub fn score_game_or_missing(log: &GameLog, weights: &ScoringWeights) -> Option<f64> {
    log.games_played.then(|| score_game(log, weights))
}
