//! End-to-end draft dataset builder.
//!
//! Runs the full pipeline for one season: player directory, per-player
//! gamelog aggregation, cleaning, fantasy scoring, CSV export. Prints the
//! run report (attempted / succeeded / skipped) and a top-10 table.

mod export;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fantasy_scorer::{summarize, ScoringWeights};
use gamelog_aggregator::{Aggregator, AggregatorConfig, HttpGamelogSource};
use player_directory::{DirectoryBuilder, DirectoryConfig};
use stat_cleaner::clean;
use table_fetcher::{FetcherConfig, TableFetcher};

#[derive(Parser, Debug)]
#[command(name = "draft-dataset", about = "Build an NBA fantasy draft dataset for one season")]
struct Args {
    /// Season end-year, e.g. 2024 for the 2023-24 season
    #[arg(long)]
    season: u32,

    /// Minimum season-average minutes for directory inclusion
    #[arg(long, default_value_t = 25.0)]
    min_minutes: f64,

    /// Minimum delay between successive requests, in seconds
    #[arg(long, default_value_t = 5)]
    delay_secs: u64,

    /// 0-based table position on the per-game averages page
    #[arg(long, default_value_t = 0)]
    directory_table: usize,

    /// 0-based table position on a player's gamelog page
    #[arg(long, default_value_t = 7)]
    gamelog_table: usize,

    /// TOML file with a [weights] multiplier table; defaults to the
    /// reference league weights
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Output CSV path for the summary table
    #[arg(long, default_value = "draft_dataset.csv")]
    out: PathBuf,

    /// Optional JSON dump of the merged raw table before cleaning
    #[arg(long)]
    raw_out: Option<PathBuf>,

    /// Cap the number of players for smoke runs
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let weights = match &args.weights {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            ScoringWeights::from_toml_str(&text)?
        }
        None => ScoringWeights::default(),
    };
    weights.validate()?;

    let fetcher_config = FetcherConfig::default();

    let mut directory_config = DirectoryConfig::for_season(args.season);
    directory_config.min_minutes = args.min_minutes;
    directory_config.table_index = args.directory_table;

    let directory_fetcher = TableFetcher::new(&fetcher_config)?;
    let builder = DirectoryBuilder::new(directory_fetcher, directory_config)?;
    let directory = builder.build().await?;
    info!(players = directory.len(), "directory ready");

    let mut player_ids = directory.player_ids();
    if let Some(limit) = args.limit {
        player_ids.truncate(limit);
    }

    let mut aggregator_config = AggregatorConfig::for_season(args.season);
    aggregator_config.table_index = args.gamelog_table;
    aggregator_config.request_delay_secs = args.delay_secs;

    let gamelog_fetcher = TableFetcher::new(&fetcher_config)?;
    let source = HttpGamelogSource::new(gamelog_fetcher, aggregator_config.clone());
    let aggregator = Aggregator::new(source, aggregator_config);
    let outcome = aggregator.aggregate(&player_ids).await?;

    if let Some(path) = &args.raw_out {
        let json = serde_json::to_string_pretty(&outcome.table)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote raw merged table");
    }

    let logs = clean(&outcome.table, &directory)?;
    let summaries = summarize(&logs, &weights, &directory)?;

    export::write_summary_csv(&args.out, &summaries)?;
    info!(path = %args.out.display(), players = summaries.len(), "wrote summary table");

    // Run report: skips are surfaced, never swallowed.
    println!("\nRun report for season {}:", args.season);
    println!("- players attempted:  {}", outcome.report.attempted);
    println!("- players aggregated: {}", outcome.report.succeeded);
    println!("- players skipped:    {}", outcome.report.skipped.len());
    for skip in &outcome.report.skipped {
        println!("    {}: {}", skip.player_id, skip.reason);
    }

    println!("\nTop 10 Players by Season Median Fantasy Score:");
    println!("{:<10} {:<22} {:<6} {:<8} {:<10} {:<10}", "Id", "Name", "Pos", "MP", "Median", "Total");
    println!("{}", "-".repeat(70));
    for summary in summaries.iter().take(10) {
        println!(
            "{:<10} {:<22} {:<6} {:<8.1} {:<10.2} {:<10.1}",
            summary.player_id,
            summary.player_name.as_deref().unwrap_or("?"),
            summary.position.as_deref().unwrap_or("?"),
            summary.minutes_played.unwrap_or(0.0),
            summary.season_median.unwrap_or(0.0),
            summary.season_total,
        );
    }

    Ok(())
}
