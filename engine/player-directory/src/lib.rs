//! # PlayerDirectory
//!
//! Builds the authoritative set of known players for one season from the
//! league per-game averages page. Each player gets a stable identifier
//! derived from their profile hyperlink; the directory is de-duplicated,
//! filtered to rotation players by minutes, and ordered deterministically.
//! Nothing downstream is meaningful without a correct directory, so every
//! failure here is fatal to the run.

pub mod builder;
pub mod config;
pub mod error;
pub mod types;

pub use builder::DirectoryBuilder;
pub use config::{DirectoryConfig, NameCollision};
pub use error::DirectoryError;
pub use types::{PlayerDirectory, PlayerRecord};
