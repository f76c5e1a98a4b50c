//! Per-player season summary table

use std::collections::HashMap;

use player_directory::PlayerDirectory;
use serde::{Deserialize, Serialize};
use stat_cleaner::GameLog;
use tracing::info;

use crate::error::ScoreError;
use crate::scorer::{score_game, score_game_or_missing};
use crate::stats::{mean, median, std_dev};
use crate::weights::ScoringWeights;

/// One row of the final dataset: a player's season in fantasy terms.
///
/// Season-wide aggregates run over all scheduled games with unplayed games
/// counted as zero; the `played_*` aggregates run over played games only
/// and are missing for a player with no played games.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub player_id: String,
    pub player_name: Option<String>,
    /// Position joined back from the directory
    pub position: Option<String>,
    /// Season-average minutes joined back from the directory
    pub minutes_played: Option<f64>,

    /// Scheduled games seen for this player
    pub games_scheduled: usize,
    /// Games actually played
    pub games_played: usize,

    /// Sum of weighted scores over all scheduled games
    pub season_total: f64,
    pub season_mean: Option<f64>,
    pub season_median: Option<f64>,
    pub season_std_dev: Option<f64>,

    pub played_mean: Option<f64>,
    pub played_median: Option<f64>,
    pub played_std_dev: Option<f64>,
}

/// Score every game and fold the rows into one summary per player.
///
/// Players appear grouped in first-seen input order before the final sort,
/// which ranks by season median descending (stable, so input order breaks
/// ties).
pub fn summarize(
    logs: &[GameLog],
    weights: &ScoringWeights,
    directory: &PlayerDirectory,
) -> Result<Vec<PlayerSummary>, ScoreError> {
    weights.validate()?;
    if logs.is_empty() {
        return Err(ScoreError::Empty);
    }

    let mut order: Vec<String> = Vec::new();
    let mut season_scores: HashMap<String, Vec<f64>> = HashMap::new();
    let mut played_scores: HashMap<String, Vec<f64>> = HashMap::new();
    let mut names: HashMap<String, Option<String>> = HashMap::new();

    for log in logs {
        if !season_scores.contains_key(&log.player_id) {
            order.push(log.player_id.clone());
            names.insert(log.player_id.clone(), log.player_name.clone());
        }
        season_scores.entry(log.player_id.clone()).or_default().push(score_game(log, weights));
        if let Some(score) = score_game_or_missing(log, weights) {
            played_scores.entry(log.player_id.clone()).or_default().push(score);
        }
    }

    let mut summaries: Vec<PlayerSummary> = order
        .into_iter()
        .map(|player_id| {
            let season = &season_scores[&player_id];
            let played = played_scores.get(&player_id).map(Vec::as_slice).unwrap_or(&[]);
            let record = directory.get(&player_id);

            PlayerSummary {
                player_name: names.get(&player_id).cloned().flatten(),
                position: record.map(|r| r.position.clone()),
                minutes_played: record.map(|r| r.minutes_played),
                games_scheduled: season.len(),
                games_played: played.len(),
                season_total: season.iter().sum(),
                season_mean: mean(season),
                season_median: median(season),
                season_std_dev: std_dev(season),
                played_mean: mean(played),
                played_median: median(played),
                played_std_dev: std_dev(played),
                player_id,
            }
        })
        .collect();

    summaries.sort_by(|a, b| {
        let a_med = a.season_median.unwrap_or(f64::NEG_INFINITY);
        let b_med = b.season_median.unwrap_or(f64::NEG_INFINITY);
        b_med.total_cmp(&a_med)
    });

    info!(players = summaries.len(), "built player summary table");
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use player_directory::PlayerRecord;

    fn played(id: &str, pts: f64) -> GameLog {
        GameLog {
            player_id: id.into(),
            player_name: Some(format!("Player {id}")),
            gs: Some(1.0),
            pts: Some(pts),
            games_played: true,
            ..Default::default()
        }
    }

    fn unplayed(id: &str) -> GameLog {
        GameLog {
            player_id: id.into(),
            player_name: Some(format!("Player {id}")),
            ..Default::default()
        }
    }

    fn directory() -> PlayerDirectory {
        let mut dir = PlayerDirectory::new(2024);
        for (id, pos, mp) in [("guardal01", "PG", 34.2), ("centebo01", "C", 29.1)] {
            dir.players.insert(
                id.to_string(),
                PlayerRecord {
                    player_id: id.to_string(),
                    name: format!("Player {id}"),
                    position: pos.to_string(),
                    minutes_played: mp,
                },
            );
        }
        dir
    }

    fn pts_weights() -> ScoringWeights {
        ScoringWeights::from_pairs(&[("pts", 1.0)])
    }

    #[test]
    fn test_season_total_counts_unplayed_as_zero() {
        // Two scheduled games: one unplayed, one with 20 points.
        // With PTS=1 and GP=1, the played game scores 21, the unplayed 0.
        let weights = ScoringWeights::from_pairs(&[("pts", 1.0), ("gp", 1.0)]);
        let logs = vec![unplayed("guardal01"), played("guardal01", 20.0)];

        let table = summarize(&logs, &weights, &directory()).unwrap();
        assert_eq!(table.len(), 1);
        let row = &table[0];
        assert_eq!(row.games_scheduled, 2);
        assert_eq!(row.games_played, 1);
        assert!((row.season_total - 21.0).abs() < 1e-9);
        // Season track includes the zero; played track does not.
        assert_eq!(row.season_median, Some(10.5));
        assert_eq!(row.played_median, Some(21.0));
    }

    #[test]
    fn test_played_aggregates_missing_for_zero_played_games() {
        let logs = vec![unplayed("guardal01"), unplayed("guardal01")];
        let table = summarize(&logs, &pts_weights(), &directory()).unwrap();
        let row = &table[0];
        assert_eq!(row.games_played, 0);
        assert_eq!(row.played_mean, None);
        assert_eq!(row.played_median, None);
        assert_eq!(row.season_total, 0.0);
        assert_eq!(row.season_mean, Some(0.0));
    }

    #[test]
    fn test_sorted_by_season_median_descending() {
        let logs = vec![
            played("guardal01", 10.0),
            played("guardal01", 12.0),
            played("centebo01", 30.0),
            played("centebo01", 28.0),
        ];
        let table = summarize(&logs, &pts_weights(), &directory()).unwrap();
        assert_eq!(table[0].player_id, "centebo01");
        assert_eq!(table[1].player_id, "guardal01");
        assert_eq!(table[0].season_median, Some(29.0));
    }

    #[test]
    fn test_stable_order_on_tied_medians() {
        let logs = vec![played("guardal01", 15.0), played("centebo01", 15.0)];
        let table = summarize(&logs, &pts_weights(), &directory()).unwrap();
        // guardal01 appeared first in the input, so it stays first.
        assert_eq!(table[0].player_id, "guardal01");
        assert_eq!(table[1].player_id, "centebo01");
    }

    #[test]
    fn test_directory_join_brings_position_and_minutes() {
        let logs = vec![played("guardal01", 15.0)];
        let table = summarize(&logs, &pts_weights(), &directory()).unwrap();
        assert_eq!(table[0].position.as_deref(), Some("PG"));
        assert_eq!(table[0].minutes_played, Some(34.2));
    }

    #[test]
    fn test_player_outside_directory_keeps_missing_joins() {
        let logs = vec![played("stranger01", 15.0)];
        let table = summarize(&logs, &pts_weights(), &directory()).unwrap();
        assert_eq!(table[0].position, None);
        assert_eq!(table[0].minutes_played, None);
    }

    #[test]
    fn test_invalid_weights_rejected_before_scoring() {
        let weights = ScoringWeights::from_pairs(&[("dunks", 5.0)]);
        let logs = vec![played("guardal01", 15.0)];
        assert!(matches!(
            summarize(&logs, &weights, &directory()),
            Err(ScoreError::Config(_))
        ));
    }

    #[test]
    fn test_empty_logs_rejected() {
        assert!(matches!(
            summarize(&[], &pts_weights(), &directory()),
            Err(ScoreError::Empty)
        ));
    }
}
