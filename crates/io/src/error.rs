//! Error types for rainstat-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the rainstat-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an underlying filesystem or stream failure.
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Wraps an error originating from the CSV reader or writer.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when one or more lines fail to parse.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Wraps a report serialization failure.
    #[error(transparent)]
    Report(#[from] rainstat_report::ReportError),
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let e = IoError::FileNotFound {
            path: PathBuf::from("/tmp/rain.txt"),
        };
        assert_eq!(e.to_string(), "file not found: /tmp/rain.txt");
    }

    #[test]
    fn display_validation() {
        let e = IoError::Validation {
            count: 2,
            details: "line 1: bad; line 3: bad".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "2 validation error(s): line 1: bad; line 3: bad"
        );
    }

    #[test]
    fn display_io() {
        let e = IoError::Io {
            path: PathBuf::from("out.txt"),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(e.to_string(), "i/o error on out.txt: disk full");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<IoError>();
    }
}
