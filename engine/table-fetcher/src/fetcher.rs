//! HTTP client wrapper around the pure extraction functions

use std::time::Duration;

use reqwest::Client;
use tracing::info;

use crate::config::FetcherConfig;
use crate::error::FetchError;
use crate::extract;
use crate::table::Table;

/// Fetches HTML pages and extracts ordinal tables from them.
///
/// One outbound request per call; responses are never cached, so repeated
/// calls re-fetch. Rate limiting between requests is the caller's concern.
#[derive(Debug)]
pub struct TableFetcher {
    client: Client,
}

impl TableFetcher {
    /// Build a fetcher with a bounded per-request timeout and a browser
    /// user agent.
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Retrieve the document at `url` as a string, failing on transport
    /// errors and non-success statuses.
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: url.to_string() });
        }
        let html = response.text().await?;
        info!(url, bytes = html.len(), "fetched page");
        Ok(html)
    }

    /// Retrieve `url` and extract the table at `table_index` (0-based).
    pub async fn fetch_table(&self, url: &str, table_index: usize) -> Result<Table, FetchError> {
        let html = self.fetch_html(url).await?;
        let table = extract::extract_table(&html, table_index)?;
        Ok(table)
    }
}
