//! Error types for the rainstat-aggregate crate.

use serde::Serialize;

/// A record that produced no contributions because it has no month values.
///
/// Non-fatal: the record is skipped, logged and reported alongside the
/// results unless the malformed-record budget is exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("record {index} (year {year}) has no month values")]
pub struct MalformedRecordError {
    /// Position of the record in the input sequence (0-based).
    pub index: usize,
    /// Year label of the record.
    pub year: String,
}

/// Error type for all fallible operations in the rainstat-aggregate crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregateError {
    /// Returned when more malformed records were seen than the budget allows.
    #[error("malformed record budget exceeded: {seen} malformed record(s), limit {limit}")]
    ErrorBudgetExceeded {
        /// Configured maximum.
        limit: usize,
        /// Number of malformed records counted when the run was aborted.
        seen: usize,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Accumulator error (overflow).
    #[error(transparent)]
    Stats(#[from] rainstat_stats::StatsError),
}
