//! The cleaning pass over the merged raw table

use player_directory::PlayerDirectory;
use table_fetcher::Table;
use tracing::info;

use crate::error::CleanError;
use crate::types::GameLog;
use crate::DID_NOT_PLAY_SENTINELS;

/// Source-site column headers the cleaner needs, paired with their typed
/// destinations. `player_id` is the tag column the aggregator prepends.
const STAT_COLUMNS: &[&str] = &[
    "GS", "FG", "FGA", "FG%", "3P", "3PA", "3P%", "FT", "FTA", "FT%", "ORB", "DRB", "TRB", "AST",
    "STL", "BLK", "TOV", "PTS",
];

/// Replace every "did not play" sentinel cell with the empty (missing)
/// marker, in every column.
///
/// Pure and idempotent: normalizing an already-normalized table returns it
/// byte-identical.
pub fn normalize_table(raw: &Table) -> Table {
    let rows = raw
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if DID_NOT_PLAY_SENTINELS.contains(&cell.as_str()) {
                        String::new()
                    } else {
                        cell.clone()
                    }
                })
                .collect()
        })
        .collect();
    Table::new(raw.headers.clone(), rows)
}

fn parse_cell(table: &Table, row: usize, column: &str) -> Option<f64> {
    table.cell(row, column).filter(|c| !c.is_empty()).and_then(|c| c.parse::<f64>().ok())
}

fn text_cell(table: &Table, row: usize, column: &str) -> Option<String> {
    table.cell(row, column).filter(|c| !c.is_empty()).map(str::to_string)
}

/// Difference of two optional stats; missing if either operand is missing
fn missed(attempted: Option<f64>, made: Option<f64>) -> Option<f64> {
    match (attempted, made) {
        (Some(a), Some(m)) => Some(a - m),
        _ => None,
    }
}

/// Clean the merged raw table into typed rows.
///
/// Steps, in order: directory name join, sentinel normalization, numeric
/// coercion, derived flags. Rows whose id is absent from the directory are
/// kept with a missing name. Fails only when an expected column is
/// structurally absent or the table is empty.
pub fn clean(raw: &Table, directory: &PlayerDirectory) -> Result<Vec<GameLog>, CleanError> {
    if raw.is_empty() {
        return Err(CleanError::Empty);
    }

    let mut required = vec!["player_id"];
    required.extend_from_slice(STAT_COLUMNS);
    raw.require_columns(&required).map_err(|e| match e {
        table_fetcher::ParseError::MissingColumns { missing } => CleanError::MissingColumns { missing },
        other => CleanError::MissingColumns { missing: vec![other.to_string()] },
    })?;

    let table = normalize_table(raw);
    let mut logs = Vec::with_capacity(table.len());

    for i in 0..table.len() {
        let player_id = table.cell(i, "player_id").unwrap_or_default().to_string();
        let player_name = directory.get(&player_id).map(|rec| rec.name.clone());

        let mut log = GameLog {
            player_id,
            player_name,
            game_rank: table
                .cell(i, "Rk")
                .and_then(|c| c.parse::<u32>().ok()),
            date: text_cell(&table, i, "Date"),
            opponent: text_cell(&table, i, "Opp"),
            gs: parse_cell(&table, i, "GS"),
            fg: parse_cell(&table, i, "FG"),
            fga: parse_cell(&table, i, "FGA"),
            fg_pct: parse_cell(&table, i, "FG%"),
            fg3: parse_cell(&table, i, "3P"),
            fg3a: parse_cell(&table, i, "3PA"),
            fg3_pct: parse_cell(&table, i, "3P%"),
            ft: parse_cell(&table, i, "FT"),
            fta: parse_cell(&table, i, "FTA"),
            ft_pct: parse_cell(&table, i, "FT%"),
            orb: parse_cell(&table, i, "ORB"),
            drb: parse_cell(&table, i, "DRB"),
            trb: parse_cell(&table, i, "TRB"),
            ast: parse_cell(&table, i, "AST"),
            stl: parse_cell(&table, i, "STL"),
            blk: parse_cell(&table, i, "BLK"),
            tov: parse_cell(&table, i, "TOV"),
            pts: parse_cell(&table, i, "PTS"),
            ..Default::default()
        };

        // A fully inactive game has no games-started value.
        log.games_played = log.gs.is_some();

        let big = log.big_category_count();
        log.double_double = big >= 2;
        log.triple_double = big >= 3;
        log.quadruple_double = big >= 4;

        log.fg_missed = missed(log.fga, log.fg);
        log.ft_missed = missed(log.fta, log.ft);
        log.fg3_missed = missed(log.fg3a, log.fg3);

        logs.push(log);
    }

    info!(rows = logs.len(), "cleaned merged game logs");
    Ok(logs)
}
