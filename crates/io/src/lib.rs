//! # rainstat-io
//!
//! Bridges text files and the rainstat pipeline: parses the
//! whitespace-separated year-per-line format into
//! [`YearRecord`](rainstat_record::YearRecord)s, converts comma-separated
//! input into that format, and renders a
//! [`StatisticsReport`](rainstat_report::StatisticsReport) as text or JSON.

mod error;
mod reader;
mod reformat;
mod validate;
mod writer;

pub use error::IoError;
pub use reader::{parse_line, parse_records, read_records};
pub use reformat::{reformat_csv, reformat_csv_file};
pub use writer::{OutputFormat, render_text, write_report};
