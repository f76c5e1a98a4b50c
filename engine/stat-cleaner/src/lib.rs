//! # StatCleaner
//!
//! Turns the merged raw string table into typed per-game rows. Cleaning is
//! order-sensitive: join display names from the directory, map "did not
//! play" sentinel strings to missing values, coerce the statistical columns
//! to numbers, then attach the derived per-game flags (double-double family,
//! games-played indicator, missed-shot counts). Cell-level problems degrade
//! to missing values; only a structurally malformed table aborts the run.

pub mod cleaner;
pub mod error;
pub mod types;

pub use cleaner::{clean, normalize_table};
pub use error::CleanError;
pub use types::{stat_value, GameLog, RECOGNIZED_STATS};

/// Cell values meaning the player did not take the court. Replaced with the
/// missing marker in every column; they only ever appear in stat columns,
/// but applying the mapping uniformly is harmless and future-proof.
pub const DID_NOT_PLAY_SENTINELS: &[&str] =
    &["Inactive", "Did Not Dress", "Did Not Play", "Not With Team", "Player Suspended"];

/// A big-game category (rebounds, assists, blocks, steals, points) counts
/// toward the double/triple/quadruple-double flags when its value strictly
/// exceeds this threshold
pub const BIG_GAME_THRESHOLD: f64 = 9.0;
