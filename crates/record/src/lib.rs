//! # rainstat-record
//!
//! The record model shared by every stage of the rainfall statistics
//! pipeline.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["YearRecord"] -->|".month_values()"| B["(month index, value)"]
//!     B -->|"Season::from_month_index()"| C["Season"]
//!     B -->|"month_locator()"| D["\"M/YYYY\""]
//!     C -->|"season_key()"| E["\"YYYY-season\""]
//!     B --> F["Contribution"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use rainstat_record::{Season, YearRecord, month_locator, season_key};
//!
//! let record = YearRecord::new("1990", vec![10, 20, 30])?;
//! assert_eq!(record.month_count(), 3);
//!
//! assert_eq!(Season::from_month_index(11)?, Season::Winter);
//! assert_eq!(month_locator(2, "1990"), "3/1990");
//! assert_eq!(season_key("1990", Season::Fall), "1990-fall");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `record` | Parsed year record (year label + up to 12 monthly values) |
//! | `season` | Season classification of month indices |
//! | `contribution` | Keyed per-month facts destined for aggregation |
//! | `error` | Error types |

mod contribution;
mod error;
mod record;
mod season;

pub use contribution::{
    Contribution, GLOBAL_KEY, KeyKind, month_locator, season_key, split_season_key,
};
pub use error::RecordError;
pub use record::{MONTHS_PER_YEAR, YearRecord};
pub use season::Season;
