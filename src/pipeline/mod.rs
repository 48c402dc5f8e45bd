//! Catalog pipeline stages.
//!
//! - `normalize`: filter, sort, and enrich raw feed records
//! - `index`: derive language filter options
//! - `filter`: application state and subset selection
//! - `stats`: headline totals over the raw record set
//! - `catalog`: end-to-end orchestration

pub mod catalog;
pub mod filter;
pub mod index;
pub mod normalize;
pub mod stats;

pub use catalog::{CatalogSummary, run_build, run_render};
pub use filter::CatalogState;
pub use index::{FilterIndex, FilterOption, build_filter_index};
pub use normalize::normalize;
pub use stats::CatalogStats;
