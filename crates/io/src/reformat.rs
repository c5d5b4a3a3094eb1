//! Comma-separated to whitespace-separated conversion.
//!
//! Input lines hold a year followed by exactly twelve monthly values,
//! `1990,12,30,45,...`. Output lines repeat the values separated by single
//! spaces and append the truncating average of the monthly values:
//!
//! ```text
//! 1990,1,2,3,4,5,6,7,8,9,10,11,12   ->   1990 1 2 3 4 5 6 7 8 9 10 11 12 6
//! ```
//!
//! The average lands after the twelfth month, where the line parser ignores
//! it, so reformatted files read back with the original monthly values.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use rainstat_record::MONTHS_PER_YEAR;
use rainstat_stats::{checked_sum, truncating_mean};
use tracing::info;

use crate::error::IoError;
use crate::validate::LineErrors;

/// Convert comma-separated year records to the whitespace format.
///
/// Every bad line is reported; nothing is returned unless all lines
/// convert.
///
/// # Errors
///
/// Returns [`IoError::Validation`] for lines with a missing year, with
/// other than twelve month values, or with values that are not `i32`
/// integers, and [`IoError::Csv`] if the CSV reader fails.
pub fn reformat_csv(text: &str) -> Result<String, IoError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut errors = LineErrors::new();
    for (i, row) in reader.records().enumerate() {
        let row = row?;
        let line_no = row
            .position()
            .map_or(i + 1, |p| usize::try_from(p.line()).unwrap_or(i + 1));

        match convert_row(&row) {
            Ok(line) => {
                out.push_str(&line);
                out.push('\n');
            }
            Err(msg) => errors.push(line_no, msg),
        }
    }
    errors.finish()?;
    Ok(out)
}

fn convert_row(row: &StringRecord) -> Result<String, String> {
    let mut fields = row.iter();
    let year = fields
        .next()
        .filter(|y| !y.is_empty())
        .ok_or_else(|| "missing year".to_string())?;
    if year.chars().any(char::is_whitespace) {
        return Err(format!("invalid year label {year:?}"));
    }

    let values = fields
        .enumerate()
        .map(|(idx, field)| {
            field
                .parse::<i32>()
                .map(i64::from)
                .map_err(|_| format!("column {}: invalid value {field:?}", idx + 2))
        })
        .collect::<Result<Vec<i64>, String>>()?;
    if values.len() != MONTHS_PER_YEAR {
        return Err(format!(
            "year {year}: expected {MONTHS_PER_YEAR} month values, got {}",
            values.len()
        ));
    }

    let sum = checked_sum(&values, year).map_err(|e| e.to_string())?;
    let avg = truncating_mean(sum, values.len() as u64).unwrap_or(0);

    let mut line = String::from(year);
    for v in &values {
        line.push(' ');
        line.push_str(&v.to_string());
    }
    line.push(' ');
    line.push_str(&avg.to_string());
    Ok(line)
}

/// Convert a CSV file and write the result to `output`.
///
/// Returns the number of lines written.
///
/// # Errors
///
/// As [`reformat_csv`], plus [`IoError::FileNotFound`] and [`IoError::Io`]
/// for filesystem failures.
pub fn reformat_csv_file(input: &Path, output: &Path) -> Result<usize, IoError> {
    if !input.exists() {
        return Err(IoError::FileNotFound {
            path: input.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(input).map_err(|source| IoError::Io {
        path: input.to_path_buf(),
        source,
    })?;
    let converted = reformat_csv(&text)?;
    std::fs::write(output, &converted).map_err(|source| IoError::Io {
        path: output.to_path_buf(),
        source,
    })?;
    let n = converted.lines().count();
    info!(input = %input.display(), output = %output.display(), n_lines = n, "reformatted");
    Ok(n)
}
