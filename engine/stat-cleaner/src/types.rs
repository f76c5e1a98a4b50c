//! Typed per-game rows and the recognized-statistic contract

use serde::{Deserialize, Serialize};

use crate::BIG_GAME_THRESHOLD;

/// One cleaned game row for one player.
///
/// Counting stats are `None` for games the player did not play: missing,
/// never zero. Derived fields are computed once at cleaning time from the
/// raw stats on the same row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameLog {
    /// Stable player identifier (directory foreign key)
    pub player_id: String,
    /// Display name joined from the directory; `None` when the id is not in
    /// the directory
    pub player_name: Option<String>,
    /// Game number within the season, when the row carried one
    pub game_rank: Option<u32>,
    /// Game date as printed by the source
    pub date: Option<String>,
    /// Opponent team abbreviation
    pub opponent: Option<String>,

    /// Games started indicator (0/1); missing for fully inactive games
    pub gs: Option<f64>,
    pub fg: Option<f64>,
    pub fga: Option<f64>,
    pub fg_pct: Option<f64>,
    pub fg3: Option<f64>,
    pub fg3a: Option<f64>,
    pub fg3_pct: Option<f64>,
    pub ft: Option<f64>,
    pub fta: Option<f64>,
    pub ft_pct: Option<f64>,
    pub orb: Option<f64>,
    pub drb: Option<f64>,
    pub trb: Option<f64>,
    pub ast: Option<f64>,
    pub stl: Option<f64>,
    pub blk: Option<f64>,
    pub tov: Option<f64>,
    pub pts: Option<f64>,

    /// True iff the games-started cell was present (proxy for having played)
    pub games_played: bool,
    pub double_double: bool,
    pub triple_double: bool,
    pub quadruple_double: bool,
    pub fg_missed: Option<f64>,
    pub ft_missed: Option<f64>,
    pub fg3_missed: Option<f64>,
}

impl GameLog {
    /// Count of {TRB, AST, BLK, STL, PTS} strictly above the threshold
    pub fn big_category_count(&self) -> usize {
        [self.trb, self.ast, self.blk, self.stl, self.pts]
            .iter()
            .filter(|v| v.map_or(false, |x| x > BIG_GAME_THRESHOLD))
            .count()
    }
}

/// Statistic keys a scoring multiplier table may reference.
///
/// These are exactly the raw and derived per-game statistics the cleaner
/// produces; anything else in a multiplier mapping is a configuration error.
pub const RECOGNIZED_STATS: &[&str] = &[
    "gs", "fg", "fga", "fg_pct", "fg3", "fg3a", "fg3_pct", "ft", "fta", "ft_pct", "orb", "drb",
    "trb", "ast", "stl", "blk", "tov", "pts", "fg_missed", "ft_missed", "fg3_missed",
    "double_double", "triple_double", "quadruple_double", "gp",
];

/// Value of one recognized statistic on one row.
///
/// Boolean flags read as 0/1; `gp` is 1 for a played game and missing for
/// an unplayed one. Returns `None` both for missing values and for
/// unrecognized keys, so callers validate keys up front against
/// [`RECOGNIZED_STATS`].
pub fn stat_value(log: &GameLog, key: &str) -> Option<f64> {
    match key {
        "gs" => log.gs,
        "fg" => log.fg,
        "fga" => log.fga,
        "fg_pct" => log.fg_pct,
        "fg3" => log.fg3,
        "fg3a" => log.fg3a,
        "fg3_pct" => log.fg3_pct,
        "ft" => log.ft,
        "fta" => log.fta,
        "ft_pct" => log.ft_pct,
        "orb" => log.orb,
        "drb" => log.drb,
        "trb" => log.trb,
        "ast" => log.ast,
        "stl" => log.stl,
        "blk" => log.blk,
        "tov" => log.tov,
        "pts" => log.pts,
        "fg_missed" => log.fg_missed,
        "ft_missed" => log.ft_missed,
        "fg3_missed" => log.fg3_missed,
        "double_double" => Some(if log.double_double { 1.0 } else { 0.0 }),
        "triple_double" => Some(if log.triple_double { 1.0 } else { 0.0 }),
        "quadruple_double" => Some(if log.quadruple_double { 1.0 } else { 0.0 }),
        "gp" => log.games_played.then_some(1.0),
        _ => None,
    }
}
