//! Directory data types

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One known player in a season's directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Stable identifier derived from the player's profile link
    /// (e.g. "jamesle01")
    pub player_id: String,
    /// Display name (e.g. "LeBron James")
    pub name: String,
    /// Position, possibly multi-valued (e.g. "PF-C")
    pub position: String,
    /// Season-average minutes played per game
    pub minutes_played: f64,
}

/// The de-duplicated player set for one season.
///
/// Keyed by `player_id`, which both enforces uniqueness and yields a
/// deterministic iteration order for the aggregation stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDirectory {
    /// Season end-year this directory was built for
    pub season: u32,
    /// When the directory page was scraped
    pub scraped_at: DateTime<Utc>,
    /// Players keyed by id
    pub players: BTreeMap<String, PlayerRecord>,
}

impl PlayerDirectory {
    /// Empty directory for a season, stamped now
    pub fn new(season: u32) -> Self {
        Self { season, scraped_at: Utc::now(), players: BTreeMap::new() }
    }

    /// Number of players in the directory
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True when no players are present
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up one player by id
    pub fn get(&self, player_id: &str) -> Option<&PlayerRecord> {
        self.players.get(player_id)
    }

    /// Player ids in deterministic (sorted) order
    pub fn player_ids(&self) -> Vec<String> {
        self.players.keys().cloned().collect()
    }
}
