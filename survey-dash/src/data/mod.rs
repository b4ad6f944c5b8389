//! Dataset loading, caching and aggregation.
//!
//! - `table` - the loosely typed respondent table
//! - `loader` - fetch (HTTP or file) and CSV parse
//! - `cache` - fetch once per process, keyed by URL
//! - `stats` - median, mode, crosstab and the other chart aggregates

pub mod cache;
pub mod loader;
pub mod stats;
pub mod table;

pub use cache::{invalidate, load_data, Dataset};
pub use table::{Column, Table};
