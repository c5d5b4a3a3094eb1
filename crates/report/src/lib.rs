//! Rainfall statistics report: monthly, yearly and seasonal extremes plus
//! multi-year drought runs, computed in one pass over the records.

mod error;
mod output;

use rainstat_aggregate::{AggregateConfig, aggregate};
use rainstat_drought::detect_droughts;
use rainstat_record::YearRecord;
use tracing::info;

pub use error::ReportError;
pub use output::{
    ExtremeEntry, Extremes, SeasonTotal, SeasonalSummary, StatisticsReport, YearTotal,
    YearlySummary, to_json,
};
pub use rainstat_aggregate::MalformedRecordError;
pub use rainstat_drought::{DroughtAnalysis, DroughtRun, YearAverage};

/// Computes the full statistics report for a sequence of year records.
///
/// Records are aggregated once (sharded per `config`), the per-year
/// averages are scanned for drought runs, and everything is assembled into
/// an immutable [`StatisticsReport`]. Malformed records are skipped and
/// listed in [`StatisticsReport::skipped`].
///
/// # Errors
///
/// Returns [`ReportError::EmptyInput`] if `records` is empty or none of them
/// has a month value, and [`ReportError::Aggregate`] if the malformed-record
/// budget is exceeded or a sum overflows.
#[tracing::instrument(skip(records, config), fields(n_records = records.len()))]
pub fn analyze(
    records: &[YearRecord],
    config: &AggregateConfig,
) -> Result<StatisticsReport, ReportError> {
    if records.is_empty() {
        return Err(ReportError::EmptyInput);
    }

    let reduced = aggregate(records, config)?;
    if reduced.is_empty() {
        return Err(ReportError::EmptyInput);
    }

    let drought = detect_droughts(&reduced.yearly_averages())?;
    info!(
        multi_annual_average = drought.multi_annual_average(),
        n_runs = drought.runs().len(),
        "drought detection complete"
    );

    StatisticsReport::assemble(&reduced, drought)
}
