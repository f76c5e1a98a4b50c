//! Seam between the aggregator and the source site

use async_trait::async_trait;
use table_fetcher::{FetchError, Table, TableFetcher};

use crate::config::AggregatorConfig;

/// Default base URL of the source site
pub const DEFAULT_BASE_URL: &str = "https://www.basketball-reference.com";

/// Supplier of one player's raw gamelog table.
///
/// The aggregator only ever talks to this trait, so tests can drive it with
/// a canned source and no network.
#[async_trait]
pub trait GamelogSource: Send + Sync {
    async fn fetch_gamelog(&self, player_id: &str) -> Result<Table, FetchError>;
}

/// Live implementation against the source site
pub struct HttpGamelogSource {
    fetcher: TableFetcher,
    config: AggregatorConfig,
}

impl HttpGamelogSource {
    pub fn new(fetcher: TableFetcher, config: AggregatorConfig) -> Self {
        Self { fetcher, config }
    }
}

#[async_trait]
impl GamelogSource for HttpGamelogSource {
    async fn fetch_gamelog(&self, player_id: &str) -> Result<Table, FetchError> {
        let url = self.config.gamelog_url(player_id);
        self.fetcher.fetch_table(&url, self.config.table_index).await
    }
}
