//! Single forward scan for drought runs.

use std::collections::BTreeMap;

use rainstat_stats::Aggregate;
use tracing::debug;

use crate::error::DroughtError;
use crate::run::{DroughtAnalysis, DroughtRun, YearAverage};

/// Truncating mean of the yearly averages.
///
/// # Errors
///
/// Returns [`DroughtError::EmptyInput`] for an empty map and
/// [`DroughtError::Stats`] if the sum overflows.
pub fn multi_annual_average(averages: &BTreeMap<String, i64>) -> Result<i64, DroughtError> {
    let mut total = Aggregate::new();
    for &avg in averages.values() {
        total.add(avg, "multi-annual average")?;
    }
    total.average().ok_or(DroughtError::EmptyInput)
}

/// Scans yearly averages in ascending year order for drought runs.
///
/// Years strictly below the multi-annual average extend the current run; a
/// year at or above it closes the run. A run still open after the last year
/// is closed by the same rule, so a drought lasting until the end of the
/// record is reported.
///
/// # Errors
///
/// Same as [`multi_annual_average`].
pub fn detect_droughts(averages: &BTreeMap<String, i64>) -> Result<DroughtAnalysis, DroughtError> {
    let threshold = multi_annual_average(averages)?;

    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (year, &average) in averages {
        if average < threshold {
            current.push(YearAverage {
                year: year.clone(),
                average,
            });
        } else {
            close_run(&mut current, &mut runs);
        }
    }
    close_run(&mut current, &mut runs);

    debug!(
        n_years = averages.len(),
        multi_annual_average = threshold,
        n_runs = runs.len(),
        "drought scan complete"
    );
    Ok(DroughtAnalysis::new(threshold, runs))
}

fn close_run(current: &mut Vec<YearAverage>, runs: &mut Vec<DroughtRun>) {
    if let Some(run) = DroughtRun::from_years(std::mem::take(current)) {
        runs.push(run);
    }
}
