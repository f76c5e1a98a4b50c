//! Sequential aggregation loop

use chrono::{DateTime, Utc};
use table_fetcher::{FetchError, Table};
use tokio::time::Instant;
use tracing::{info, warn};

use crate::config::AggregatorConfig;
use crate::error::AggregateError;
use crate::report::RunReport;
use crate::source::GamelogSource;
use crate::PLAYER_ID_COLUMN;

/// The merged raw dataset plus the run report
#[derive(Debug, Clone)]
pub struct AggregateOutcome {
    /// All players' gamelog rows in one table, each row tagged with its
    /// player id in the leading column
    pub table: Table,
    /// Attempted/succeeded/skipped accounting for the run
    pub report: RunReport,
    /// When the last page of the run was fetched
    pub scraped_at: DateTime<Utc>,
}

/// Drives the per-player gamelog fetches and merges the results.
///
/// Strictly one request in flight at a time, in the caller's id order. The
/// configured minimum delay is measured from the start of one request to
/// the start of the next and is not applied before the first request.
pub struct Aggregator<S: GamelogSource> {
    source: S,
    config: AggregatorConfig,
}

impl<S: GamelogSource> Aggregator<S> {
    pub fn new(source: S, config: AggregatorConfig) -> Self {
        Self { source, config }
    }

    /// Fetch and merge every player's log, skipping and recording failures
    pub async fn aggregate(&self, player_ids: &[String]) -> Result<AggregateOutcome, AggregateError> {
        if player_ids.is_empty() {
            return Err(AggregateError::NoPlayers);
        }

        info!(
            players = player_ids.len(),
            season = self.config.season,
            delay_secs = self.config.request_delay_secs,
            "starting gamelog aggregation"
        );

        let mut report = RunReport { attempted: player_ids.len(), ..Default::default() };
        let mut headers: Option<Vec<String>> = None;
        let mut merged_rows: Vec<Vec<String>> = Vec::new();
        let mut last_request: Option<Instant> = None;

        for player_id in player_ids {
            match self.throttled_fetch(player_id, &mut last_request).await {
                Ok(table) => {
                    let header_ref = headers.get_or_insert_with(|| table.headers.clone());
                    let width = header_ref.len();
                    for row in &table.rows {
                        if is_header_echo(&table, row) {
                            continue;
                        }
                        // Played and unplayed rows differ in width; pad so
                        // they coexist in one string table pre-cleaning.
                        let mut tagged = Vec::with_capacity(width + 1);
                        tagged.push(player_id.clone());
                        tagged.extend(row.iter().cloned());
                        tagged.resize(width + 1, String::new());
                        merged_rows.push(tagged);
                    }
                    report.succeeded += 1;
                }
                Err(e) => {
                    warn!(player_id, error = %e, "skipping player after failed fetch");
                    report.record_skip(player_id, e.to_string());
                }
            }
        }

        if report.succeeded == 0 {
            return Err(AggregateError::AllFailed { attempted: report.attempted });
        }

        let mut merged_headers = vec![PLAYER_ID_COLUMN.to_string()];
        merged_headers.extend(headers.unwrap_or_default());

        info!(
            succeeded = report.succeeded,
            skipped = report.skipped.len(),
            rows = merged_rows.len(),
            "gamelog aggregation finished"
        );

        Ok(AggregateOutcome {
            table: Table::new(merged_headers, merged_rows),
            report,
            scraped_at: Utc::now(),
        })
    }

    /// One player's fetch, honoring the inter-request delay and the bounded
    /// retry budget. Retries share the same throttle as fresh requests.
    async fn throttled_fetch(
        &self,
        player_id: &str,
        last_request: &mut Option<Instant>,
    ) -> Result<Table, FetchError> {
        let delay = self.config.request_delay();
        let mut attempt: u32 = 0;
        loop {
            if let Some(prev) = *last_request {
                tokio::time::sleep_until(prev + delay).await;
            }
            *last_request = Some(Instant::now());

            match self.source.fetch_gamelog(player_id).await {
                Ok(table) => return Ok(table),
                Err(e) if attempt < self.config.max_retries => {
                    attempt += 1;
                    warn!(
                        player_id,
                        attempt,
                        max_retries = self.config.max_retries,
                        error = %e,
                        "gamelog fetch failed, retrying"
                    );
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// The site re-embeds the header row mid-table every 20 games or so
fn is_header_echo(table: &Table, row: &[String]) -> bool {
    if let Some(rk_col) = table.column_index("Rk") {
        if row.get(rk_col).map(String::as_str) == Some("Rk") {
            return true;
        }
    }
    row == table.headers.as_slice()
}
