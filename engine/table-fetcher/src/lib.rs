//! # TableFetcher
//!
//! HTTP fetching and ordinal HTML table extraction for the draft dataset
//! pipeline. Pages on the source site carry their data in `<table>` elements
//! at known document positions; this crate retrieves a page and converts the
//! N-th table into a plain string matrix that downstream stages clean and
//! type. Extraction is exposed as pure functions over an HTML string so the
//! parsing path is testable without a network.

pub mod config;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod table;

pub use config::FetcherConfig;
pub use error::{FetchError, ParseError};
pub use extract::{extract_table, extract_table_links, extract_tables};
pub use fetcher::TableFetcher;
pub use table::Table;
