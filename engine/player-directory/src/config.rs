//! Configuration for the directory builder

use serde::{Deserialize, Serialize};

/// Default base URL of the source site
pub const DEFAULT_BASE_URL: &str = "https://www.basketball-reference.com";

/// Default minutes-played cutoff for inclusion in the directory
pub const DEFAULT_MIN_MINUTES: f64 = 25.0;

/// Default 0-based position of the stats table on the per-game page
pub const DEFAULT_DIRECTORY_TABLE_INDEX: usize = 0;

/// A known same-name collision on the directory page.
///
/// Two distinct players sharing one display name is a source-site data
/// quirk; the row whose disambiguator cell is empty is a known artifact and
/// gets dropped. This is configuration rather than a hardcoded special case
/// so new collisions do not require a code change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameCollision {
    /// Display name shared by two distinct players
    pub name: String,
    /// Column whose empty value marks the artifact row (e.g. "Age")
    pub disambiguator_column: String,
}

/// Configuration for [`crate::DirectoryBuilder`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Season end-year, e.g. 2024 for the 2023-24 season
    pub season: u32,

    /// Base URL of the source site
    pub base_url: String,

    /// 0-based position of the stats table on the per-game averages page.
    /// Tied to the source site's page layout; revalidate when it changes.
    pub table_index: usize,

    /// Players averaging fewer minutes than this are dropped
    pub min_minutes: f64,

    /// Known same-name collisions to resolve while parsing
    pub name_collisions: Vec<NameCollision>,
}

impl DirectoryConfig {
    /// Directory configuration for one season with default site constants
    pub fn for_season(season: u32) -> Self {
        Self {
            season,
            base_url: DEFAULT_BASE_URL.to_string(),
            table_index: DEFAULT_DIRECTORY_TABLE_INDEX,
            min_minutes: DEFAULT_MIN_MINUTES,
            name_collisions: Vec::new(),
        }
    }

    /// URL of the season's per-game averages page
    pub fn per_game_url(&self) -> String {
        format!("{}/leagues/NBA_{}_per_game.html", self.base_url, self.season)
    }
}
