//! Run report surfaced to the caller after aggregation

use serde::{Deserialize, Serialize};

/// One player the run had to leave out, with the reason
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedPlayer {
    pub player_id: String,
    pub reason: String,
}

/// Outcome counts for one aggregation run.
///
/// A completed run always reports how many players were attempted, how many
/// made it into the dataset, and which were skipped; skips are surfaced
/// here, never swallowed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub skipped: Vec<SkippedPlayer>,
}

impl RunReport {
    pub fn record_skip(&mut self, player_id: &str, reason: String) {
        self.skipped.push(SkippedPlayer { player_id: player_id.to_string(), reason });
    }
}
