//! Report structures and JSON output.

use serde::Serialize;

use rainstat_aggregate::{MalformedRecordError, Reduced};
use rainstat_drought::DroughtAnalysis;
use rainstat_record::{Season, split_season_key};
use rainstat_stats::{Extreme, ExtremaTracker};

use crate::error::ReportError;

/// One extreme value and where it was observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtremeEntry {
    /// `M/YYYY` for months, the year for yearly totals, `YYYY-season` for
    /// seasonal totals.
    pub locator: String,
    pub value: i64,
}

impl From<&Extreme> for ExtremeEntry {
    fn from(e: &Extreme) -> Self {
        Self {
            locator: e.locator().to_string(),
            value: e.value(),
        }
    }
}

/// Maximum and minimum of one statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extremes {
    pub max: ExtremeEntry,
    pub min: ExtremeEntry,
}

impl From<&ExtremaTracker> for Extremes {
    fn from(t: &ExtremaTracker) -> Self {
        Self {
            max: t.max().into(),
            min: t.min().into(),
        }
    }
}

/// Total rainfall of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearTotal {
    pub year: String,
    pub total: i64,
    /// Number of monthly values that went into `total`.
    pub months: u64,
    /// Truncating `total / months`.
    pub average: i64,
}

/// Total rainfall of one season in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonTotal {
    pub year: String,
    pub season: Season,
    pub total: i64,
}

/// Per-year totals with the wettest and driest year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlySummary {
    pub totals: Vec<YearTotal>,
    pub extremes: Extremes,
}

/// Per-season totals with the wettest and driest season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonalSummary {
    pub totals: Vec<SeasonTotal>,
    pub extremes: Extremes,
}

/// Every statistic produced by one run.
///
/// Built by [`analyze`](crate::analyze); read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsReport {
    records: usize,
    skipped: Vec<MalformedRecordError>,
    monthly: Extremes,
    yearly: YearlySummary,
    seasonal: SeasonalSummary,
    drought: DroughtAnalysis,
}

impl StatisticsReport {
    pub(crate) fn assemble(
        reduced: &Reduced,
        drought: DroughtAnalysis,
    ) -> Result<Self, ReportError> {
        let (Some(monthly), Some(yearly_ext), Some(seasonal_ext)) = (
            reduced.monthly_extrema(),
            reduced.yearly_extrema(),
            reduced.seasonal_extrema(),
        ) else {
            return Err(ReportError::EmptyInput);
        };

        let yearly_totals = reduced
            .yearly()
            .iter()
            .map(|(year, agg)| YearTotal {
                year: year.clone(),
                total: agg.sum(),
                months: agg.count(),
                average: agg.average().unwrap_or(0),
            })
            .collect();

        let seasonal_totals = reduced
            .seasonal()
            .iter()
            .map(|(key, agg)| {
                let (year, season) = split_season_key(key)
                    .ok_or_else(|| ReportError::InvalidSeasonKey { key: key.clone() })?;
                Ok(SeasonTotal {
                    year: year.to_string(),
                    season,
                    total: agg.sum(),
                })
            })
            .collect::<Result<Vec<_>, ReportError>>()?;

        Ok(Self {
            records: reduced.records(),
            skipped: reduced.malformed().to_vec(),
            monthly: monthly.into(),
            yearly: YearlySummary {
                totals: yearly_totals,
                extremes: yearly_ext.into(),
            },
            seasonal: SeasonalSummary {
                totals: seasonal_totals,
                extremes: seasonal_ext.into(),
            },
            drought,
        })
    }

    /// Number of input records, malformed ones included.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Records skipped because they had no month values.
    pub fn skipped(&self) -> &[MalformedRecordError] {
        &self.skipped
    }

    /// Wettest and driest single month.
    pub fn monthly(&self) -> &Extremes {
        &self.monthly
    }

    /// Per-year totals and extremes.
    pub fn yearly(&self) -> &YearlySummary {
        &self.yearly
    }

    /// Per-season totals and extremes.
    pub fn seasonal(&self) -> &SeasonalSummary {
        &self.seasonal
    }

    /// Multi-annual average and drought runs.
    pub fn drought(&self) -> &DroughtAnalysis {
        &self.drought
    }
}

/// Serialize a report to pretty-printed JSON.
pub fn to_json(report: &StatisticsReport) -> Result<String, ReportError> {
    serde_json::to_string_pretty(report).map_err(|e| ReportError::Serialization {
        reason: e.to_string(),
    })
}
