//! Configuration for game log aggregation

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default 0-based position of the regular-season log table on a player's
/// gamelog page. An empirical constant tied to the site layout.
pub const DEFAULT_GAMELOG_TABLE_INDEX: usize = 7;

/// Default minimum delay between successive requests, in seconds
pub const DEFAULT_REQUEST_DELAY_SECS: u64 = 5;

/// Default number of retries after a failed fetch before skipping a player
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Configuration for [`crate::Aggregator`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Season end-year the logs are fetched for
    pub season: u32,

    /// Base URL of the source site
    pub base_url: String,

    /// 0-based position of the gamelog table on a player page.
    /// Tied to the source site's page layout; revalidate when it changes.
    pub table_index: usize,

    /// Minimum delay between the start of one request and the start of the
    /// next. Not applied before the very first request.
    pub request_delay_secs: u64,

    /// Retries per player on a failed fetch before skip-and-record
    pub max_retries: u32,
}

impl AggregatorConfig {
    /// Aggregator configuration for one season with default site constants
    pub fn for_season(season: u32) -> Self {
        Self {
            season,
            base_url: crate::source::DEFAULT_BASE_URL.to_string(),
            table_index: DEFAULT_GAMELOG_TABLE_INDEX,
            request_delay_secs: DEFAULT_REQUEST_DELAY_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Minimum inter-request delay as a [`Duration`]
    pub fn request_delay(&self) -> Duration {
        Duration::from_secs(self.request_delay_secs)
    }

    /// URL of one player's gamelog page for the configured season
    pub fn gamelog_url(&self, player_id: &str) -> String {
        let first_letter = player_id.chars().next().unwrap_or('x');
        format!("{}/players/{}/{}/gamelog/{}", self.base_url, first_letter, player_id, self.season)
    }
}
