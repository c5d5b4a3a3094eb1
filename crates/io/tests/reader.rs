//! Integration tests: reading year records from disk.

use std::io::Write;
use std::path::Path;

use rainstat_io::{IoError, read_records};

#[test]
fn read_records_file_not_found() {
    let err = read_records(Path::new("/tmp/rainstat_test_missing_input.txt")).unwrap_err();
    assert!(
        matches!(err, IoError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}",
    );
}

#[test]
fn read_records_skips_blank_lines() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(file, "1990 1 2 3 4 5 6 7 8 9 10 11 12").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  1991   7 8  ").unwrap();
    writeln!(file, "1992").unwrap();

    let records = read_records(file.path()).expect("valid file");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].year(), "1990");
    assert_eq!(records[0].month_count(), 12);
    assert_eq!(records[1].months(), &[7, 8]);
    assert!(records[2].is_empty());
}

#[test]
fn read_records_reports_every_bad_line() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    writeln!(file, "1990 1 x").unwrap();
    writeln!(file, "1991 1 2").unwrap();
    writeln!(file, "1992 3.5").unwrap();

    match read_records(file.path()).unwrap_err() {
        IoError::Validation { count, details } => {
            assert_eq!(count, 2);
            assert!(details.contains("line 1"), "{details}");
            assert!(details.contains("line 3"), "{details}");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}
