//! CSV export of the summary table

use std::path::Path;

use anyhow::{Context, Result};
use fantasy_scorer::PlayerSummary;

/// Write the summary table to `path` as CSV, one row per player.
///
/// Missing aggregates serialize as empty cells, keeping them distinct from
/// zero for the spreadsheet consumer.
pub fn write_summary_csv(path: &Path, summaries: &[PlayerSummary]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for summary in summaries {
        writer.serialize(summary).context("failed to write summary row")?;
    }
    writer.flush().context("failed to flush CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, median: Option<f64>) -> PlayerSummary {
        PlayerSummary {
            player_id: id.to_string(),
            player_name: Some(format!("Player {id}")),
            position: Some("PG".to_string()),
            minutes_played: Some(34.2),
            games_scheduled: 82,
            games_played: 70,
            season_total: 2200.0,
            season_mean: Some(26.8),
            season_median: median,
            season_std_dev: Some(9.1),
            played_mean: Some(31.4),
            played_median: Some(30.9),
            played_std_dev: Some(7.7),
        }
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_summary_csv(&path, &[summary("guardal01", Some(27.5))]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.contains("player_id"));
        assert!(header.contains("season_median"));
        let row = lines.next().unwrap();
        assert!(row.contains("guardal01"));
        assert!(row.contains("27.5"));
    }

    #[test]
    fn test_missing_aggregate_serializes_empty_not_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_summary_csv(&path, &[summary("guardal01", None)]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let header: Vec<&str> = text.lines().next().unwrap().split(',').collect();
        let row: Vec<&str> = text.lines().nth(1).unwrap().split(',').collect();
        let median_col = header.iter().position(|h| *h == "season_median").unwrap();
        assert_eq!(row[median_col], "");
    }
}
