//! Report error types.

/// Errors that abort a statistics run. No report is produced.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// No record contributed any month value.
    #[error("no usable records: nothing to analyze")]
    EmptyInput,

    /// A seasonal group key could not be split into year and season.
    #[error("invalid season key: {key:?}")]
    InvalidSeasonKey { key: String },

    /// Aggregation failed (error budget, overflow, configuration).
    #[error(transparent)]
    Aggregate(#[from] rainstat_aggregate::AggregateError),

    /// Drought detection failed.
    #[error(transparent)]
    Drought(#[from] rainstat_drought::DroughtError),

    /// JSON serialization failed.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}
