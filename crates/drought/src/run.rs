//! Drought run types.

use serde::Serialize;

/// Minimum number of consecutive below-average years reported as a drought.
pub const MIN_RUN_LENGTH: usize = 3;

/// A year label with its average monthly rainfall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearAverage {
    pub year: String,
    pub average: i64,
}

/// Consecutive years below the multi-annual average.
///
/// Always holds at least [`MIN_RUN_LENGTH`] years, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DroughtRun {
    years: Vec<YearAverage>,
}

impl DroughtRun {
    /// Wraps a finished run; `None` if it is too short to count.
    pub(crate) fn from_years(years: Vec<YearAverage>) -> Option<Self> {
        (years.len() >= MIN_RUN_LENGTH).then_some(Self { years })
    }

    /// Member years in ascending order.
    pub fn years(&self) -> &[YearAverage] {
        &self.years
    }

    /// Number of years in the run.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Always `false`; runs are never empty.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// First year of the run.
    pub fn first_year(&self) -> &str {
        &self.years[0].year
    }

    /// Last year of the run.
    pub fn last_year(&self) -> &str {
        &self.years[self.years.len() - 1].year
    }
}

/// Result of a drought scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroughtAnalysis {
    multi_annual_average: i64,
    runs: Vec<DroughtRun>,
}

impl DroughtAnalysis {
    pub(crate) fn new(multi_annual_average: i64, runs: Vec<DroughtRun>) -> Self {
        Self {
            multi_annual_average,
            runs,
        }
    }

    /// Truncating mean of all yearly averages.
    pub fn multi_annual_average(&self) -> i64 {
        self.multi_annual_average
    }

    /// Detected runs in ascending year order.
    pub fn runs(&self) -> &[DroughtRun] {
        &self.runs
    }
}
