//! Keyed per-month facts produced by the partial aggregator.

use serde::Serialize;

use crate::record::MONTHS_PER_YEAR;
use crate::season::Season;

/// Key under which every monthly value is reported for the flat
/// min/max stream.
pub const GLOBAL_KEY: &str = "rainfall";

/// The grouping dimension a [`Contribution`] is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum KeyKind {
    /// One group per year label (yearly totals, drought averages).
    Year,
    /// One group per `year-season` key (seasonal totals).
    YearSeason,
    /// A single group holding every monthly value (monthly extrema).
    Global,
}

/// One (key, value) fact derived from a single month of a single record.
///
/// `order` is the position of the source month in the input,
/// `record_index * 12 + month_index`. Reducers use it to break ties between
/// equal extrema so that the first-seen value wins no matter how the input
/// was sharded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub kind: KeyKind,
    pub key: String,
    pub value: i64,
    pub locator: Option<String>,
    pub order: u64,
}

impl Contribution {
    /// Contribution to the global monthly stream, located as `M/YYYY`.
    pub fn global(year: &str, month_index: usize, value: i32, order: u64) -> Self {
        Self {
            kind: KeyKind::Global,
            key: GLOBAL_KEY.to_string(),
            value: i64::from(value),
            locator: Some(month_locator(month_index, year)),
            order,
        }
    }

    /// Contribution to the `year-season` group.
    pub fn seasonal(year: &str, season: Season, value: i32, order: u64) -> Self {
        Self {
            kind: KeyKind::YearSeason,
            key: season_key(year, season),
            value: i64::from(value),
            locator: None,
            order,
        }
    }

    /// Contribution to the per-year group.
    pub fn yearly(year: &str, value: i32, order: u64) -> Self {
        Self {
            kind: KeyKind::Year,
            key: year.to_string(),
            value: i64::from(value),
            locator: None,
            order,
        }
    }

    /// Sequence key for month `month_index` of record `record_index`.
    pub fn order_of(record_index: usize, month_index: usize) -> u64 {
        (record_index as u64) * MONTHS_PER_YEAR as u64 + month_index as u64
    }
}

/// Human-readable month locator: 1-based month, a slash, then the year.
pub fn month_locator(month_index: usize, year: &str) -> String {
    format!("{}/{}", month_index + 1, year)
}

/// Group key of a season within a year, e.g. `1990-winter`.
pub fn season_key(year: &str, season: Season) -> String {
    format!("{year}-{season}")
}

/// Splits a season key back into its year label and season.
///
/// The split happens at the last `-`, so year labels that themselves
/// contain dashes survive. Returns `None` for keys that are not season keys.
pub fn split_season_key(key: &str) -> Option<(&str, Season)> {
    let (year, season) = key.rsplit_once('-')?;
    if year.is_empty() {
        return None;
    }
    season.parse().ok().map(|s| (year, s))
}
