//! Report rendering and output.

use std::fmt;
use std::path::Path;

use rainstat_report::{StatisticsReport, to_json};
use tracing::info;

use crate::error::IoError;

/// Output format of a rendered report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable sentences, one statistic per line.
    #[default]
    Text,
    /// Pretty-printed JSON of the whole report.
    Json,
}

/// Render a report as plain text.
///
/// Sections appear in a fixed order: monthly extremes, yearly totals and
/// extremes, seasonal totals and extremes, drought analysis, skipped
/// records. Totals are tab-separated `key\tvalue` lines.
pub fn render_text(report: &StatisticsReport) -> String {
    TextReport(report).to_string()
}

/// Plain-text view of a report.
struct TextReport<'a>(&'a StatisticsReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, out: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let monthly = report.monthly();
        writeln!(
            out,
            "The month and year in which the greatest amount of precipitation fell are {}, the amount is {}",
            monthly.max.locator, monthly.max.value
        )?;
        writeln!(
            out,
            "The month and year in which the lowest amount of precipitation fell are {}, the amount is {}",
            monthly.min.locator, monthly.min.value
        )?;

        let yearly = report.yearly();
        writeln!(out)?;
        for total in &yearly.totals {
            writeln!(out, "{}\t{}", total.year, total.total)?;
        }
        writeln!(
            out,
            "The year in which the biggest amount of precipitation fell is {}, the amount is {}",
            yearly.extremes.max.locator, yearly.extremes.max.value
        )?;
        writeln!(
            out,
            "The year in which the smallest amount of precipitation fell is {}, the amount is {}",
            yearly.extremes.min.locator, yearly.extremes.min.value
        )?;

        let seasonal = report.seasonal();
        writeln!(out)?;
        for total in &seasonal.totals {
            writeln!(out, "{}-{}\t{}", total.year, total.season, total.total)?;
        }
        writeln!(
            out,
            "The season and year in which the largest precipitation fell are {}, the amount is {}",
            seasonal.extremes.max.locator, seasonal.extremes.max.value
        )?;
        writeln!(
            out,
            "The season and year in which the smallest precipitation fell are {}, the amount is {}",
            seasonal.extremes.min.locator, seasonal.extremes.min.value
        )?;

        let drought = report.drought();
        writeln!(out)?;
        writeln!(
            out,
            "The multi annual average is {}",
            drought.multi_annual_average()
        )?;
        for run in drought.runs() {
            let years = run
                .years()
                .iter()
                .map(|y| format!("{} - {}", y.year, y.average))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(out, "The following years detected as drought [{years}]")?;
        }

        if !report.skipped().is_empty() {
            writeln!(out)?;
            writeln!(out, "Skipped {} malformed record(s):", report.skipped().len())?;
            for skipped in report.skipped() {
                writeln!(out, "  {skipped}")?;
            }
        }
        Ok(())
    }
}

/// Render `report` in `format` and write it to `path`, or to stdout when
/// `path` is `None`.
///
/// # Errors
///
/// Returns [`IoError::Report`] if JSON serialization fails and
/// [`IoError::Io`] if the destination cannot be written.
pub fn write_report(
    report: &StatisticsReport,
    path: Option<&Path>,
    format: OutputFormat,
) -> Result<(), IoError> {
    let rendered = match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => {
            let mut json = to_json(report)?;
            json.push('\n');
            json
        }
    };

    match path {
        Some(path) => {
            std::fs::write(path, &rendered).map_err(|source| IoError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), ?format, "wrote report");
        }
        None => {
            use std::io::Write;
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| IoError::Io {
                    path: "<stdout>".into(),
                    source,
                })?;
        }
    }
    Ok(())
}
