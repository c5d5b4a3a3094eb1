//! Multi-year drought detection.
//!
//! A drought run is a maximal sequence of consecutive years (in ascending
//! year order) whose average monthly rainfall is strictly below the
//! multi-annual average, reported only when it spans at least
//! [`MIN_RUN_LENGTH`] years.
//!
//! ```ignore
//! use std::collections::BTreeMap;
//! use rainstat_drought::detect_droughts;
//!
//! let averages: BTreeMap<String, i64> = [("1", 10), ("2", 1), ("3", 1), ("4", 1)]
//!     .into_iter()
//!     .map(|(y, a)| (y.to_string(), a))
//!     .collect();
//! let analysis = detect_droughts(&averages)?;
//! assert_eq!(analysis.multi_annual_average(), 3);
//! assert_eq!(analysis.runs().len(), 1);
//! ```

mod detect;
mod error;
mod run;

pub use detect::{detect_droughts, multi_annual_average};
pub use error::DroughtError;
pub use run::{DroughtAnalysis, DroughtRun, MIN_RUN_LENGTH, YearAverage};
