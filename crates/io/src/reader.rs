//! Whitespace-separated year record parsing.
//!
//! Each non-blank line holds a year label followed by up to twelve integer
//! monthly values:
//!
//! ```text
//! 1990 12 30 45 50 20 5 0 0 10 40 60 80 29
//! ```
//!
//! Tokens after the twelfth month are ignored; the reformatter appends the
//! yearly average there.

use std::path::Path;

use rainstat_record::{MONTHS_PER_YEAR, YearRecord};
use tracing::{info, trace};

use crate::error::IoError;
use crate::validate::LineErrors;

/// Parse one line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if a month token is not an integer.
pub fn parse_line(line: &str) -> Result<Option<YearRecord>, IoError> {
    parse_fields(line).map_err(|msg| IoError::Validation {
        count: 1,
        details: format!("line 1: {msg}"),
    })
}

/// Parse every line of `text`, reporting all bad lines at once.
///
/// # Errors
///
/// Returns [`IoError::Validation`] listing each offending line.
pub fn parse_records(text: &str) -> Result<Vec<YearRecord>, IoError> {
    let mut records = Vec::new();
    let mut errors = LineErrors::new();
    for (i, line) in text.lines().enumerate() {
        match parse_fields(line) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(msg) => errors.push(i + 1, msg),
        }
    }
    errors.finish()?;
    Ok(records)
}

/// Read and parse a year-record file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Io`] if it cannot be read, and [`IoError::Validation`] for
/// unparseable lines.
pub fn read_records(path: &Path) -> Result<Vec<YearRecord>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&text)?;
    info!(path = %path.display(), n_records = records.len(), "records parsed");
    Ok(records)
}

fn parse_fields(line: &str) -> Result<Option<YearRecord>, String> {
    let mut tokens = line.split_whitespace();
    let Some(year) = tokens.next() else {
        return Ok(None);
    };

    let mut months = Vec::with_capacity(MONTHS_PER_YEAR);
    for (idx, token) in tokens.by_ref().take(MONTHS_PER_YEAR).enumerate() {
        let value = token
            .parse::<i32>()
            .map_err(|_| format!("month {}: invalid value {token:?}", idx + 1))?;
        months.push(value);
    }
    let extra = tokens.count();
    if extra > 0 {
        trace!(year, extra, "ignoring trailing tokens");
    }

    YearRecord::new(year, months)
        .map(Some)
        .map_err(|e| e.to_string())
}
