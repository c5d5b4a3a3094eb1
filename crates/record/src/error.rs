//! Error types for the rainstat-record crate.

/// Error type for all fallible operations in the rainstat-record crate.
///
/// This enum covers validation failures when building a [`YearRecord`]
/// and when classifying month indices or parsing season names.
///
/// [`YearRecord`]: crate::YearRecord
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// Returned when the year label is empty or contains whitespace.
    #[error("invalid year label: {label:?}")]
    InvalidYear {
        /// The rejected label.
        label: String,
    },

    /// Returned when more than twelve monthly values are supplied.
    #[error("year {year}: expected at most 12 monthly values, got {got}")]
    TooManyMonths {
        /// Year label of the offending record.
        year: String,
        /// Number of values supplied.
        got: usize,
    },

    /// Returned when a 0-based month index is outside 0..12.
    #[error("invalid month index: {index} (must be 0..=11)")]
    InvalidMonthIndex {
        /// The invalid index.
        index: usize,
    },

    /// Returned when a season name cannot be parsed.
    #[error("unknown season: {name:?}")]
    UnknownSeason {
        /// The unparseable name.
        name: String,
    },
}
