//! Partial aggregation and grouped reduction of rainfall records.
//!
//! Every [`YearRecord`](rainstat_record::YearRecord) is turned into per-month
//! [`Contribution`](rainstat_record::Contribution)s keyed by year, by
//! year-season and globally. Contributions sharing a key are merged into an
//! [`Aggregate`], and the global stream feeds an [`ExtremaTracker`].
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌──────────────────┐     ┌──────────────────┐
//!  │   Records    │────▶│ Partial aggregate │────▶│ Grouped reducer  │
//!  │ (sharded)    │     │ (contributions)   │     │ (per shard)      │
//!  └──────────────┘     └──────────────────┘     └────────┬─────────┘
//!                                                         │ merge
//!                                                         ▼
//!                                                ┌──────────────────┐
//!                                                │     Reduced      │
//!                                                └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```ignore
//! use rainstat_aggregate::{AggregateConfig, aggregate};
//!
//! let config = AggregateConfig::new().with_shard_size(1024);
//! let reduced = aggregate(&records, &config)?;
//! for (year, agg) in reduced.yearly() {
//!     println!("{year}: {}", agg.sum());
//! }
//! ```

mod budget;
mod config;
mod error;
mod partial;
mod reduce;
mod result;
mod shard;

pub use budget::{ErrorBudget, ErrorCollector};
pub use config::AggregateConfig;
pub use error::{AggregateError, MalformedRecordError};
pub use partial::{contributions, partial_aggregate};
pub use reduce::GroupedReducer;
pub use result::Reduced;
pub use shard::aggregate;

pub use rainstat_stats::{Aggregate, Extreme, ExtremaTracker};
