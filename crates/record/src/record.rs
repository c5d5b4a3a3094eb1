//! Parsed per-year rainfall record.

use crate::error::RecordError;
use crate::season::Season;

/// Number of monthly slots in a year record.
pub const MONTHS_PER_YEAR: usize = 12;

/// One year of monthly precipitation values.
///
/// Produced by the line parser and consumed by the partial aggregator.
/// A record may carry fewer than twelve values when the source line was
/// short; missing trailing months simply contribute nothing. A record with
/// zero values is constructible but is reported as malformed downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearRecord {
    year: String,
    months: Vec<i32>,
}

impl YearRecord {
    /// Builds a record from a year label and its monthly values, January first.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidYear`] if the label is empty or contains
    /// whitespace, and [`RecordError::TooManyMonths`] if more than
    /// [`MONTHS_PER_YEAR`] values are given.
    pub fn new(year: impl Into<String>, months: Vec<i32>) -> Result<Self, RecordError> {
        let year = year.into();
        if year.is_empty() || year.chars().any(char::is_whitespace) {
            return Err(RecordError::InvalidYear { label: year });
        }
        if months.len() > MONTHS_PER_YEAR {
            return Err(RecordError::TooManyMonths {
                year,
                got: months.len(),
            });
        }
        Ok(Self { year, months })
    }

    /// Returns the year label.
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns the monthly values present on the record.
    pub fn months(&self) -> &[i32] {
        &self.months
    }

    /// Returns the number of monthly values present.
    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    /// Returns `true` when the record has no monthly values at all.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Iterates `(month_index, value)` pairs, 0-based from January.
    pub fn month_values(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.months.iter().copied().enumerate()
    }

    /// Iterates `(month_index, season, value)` triples, 0-based from January.
    pub fn seasonal_values(&self) -> impl Iterator<Item = (usize, Season, i32)> + '_ {
        self.month_values()
            .zip(Season::BY_MONTH_INDEX)
            .map(|((index, value), season)| (index, season, value))
    }
}
