//! Error types for cleaning

use thiserror::Error;

/// Errors that can occur while cleaning the merged table.
///
/// Cleaning failures are fatal: a structurally broken merged table has no
/// meaningful partial result. Per-cell coercion problems are not errors;
/// they degrade to missing values.
#[derive(Error, Debug)]
pub enum CleanError {
    /// An expected column is entirely absent from the merged table
    #[error("missing expected column(s): {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// The merged table has no rows at all
    #[error("merged table is empty")]
    Empty,
}
