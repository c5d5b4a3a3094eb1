//! Error types for the rainstat-drought crate.

/// Error type for drought detection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DroughtError {
    /// Returned when there are no yearly averages to compare against.
    #[error("no yearly averages: the multi-annual average is undefined")]
    EmptyInput,

    /// Accumulator error (overflow while summing yearly averages).
    #[error(transparent)]
    Stats(#[from] rainstat_stats::StatsError),
}
