//! Per-line error accumulation.
//!
//! Parsing keeps going after a bad line so that one run reports every
//! problem in the file. [`LineErrors`] gathers the messages and turns them
//! into a single [`IoError::Validation`].

use crate::error::IoError;

/// Accumulates per-line problems.
pub(crate) struct LineErrors {
    errors: Vec<String>,
}

impl LineErrors {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record a problem on 1-based line `line_no`.
    pub(crate) fn push(&mut self, line_no: usize, msg: impl std::fmt::Display) {
        self.errors.push(format!("line {line_no}: {msg}"));
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(())` if nothing was recorded, otherwise one error joining all
    /// messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_finishes_ok() {
        assert!(LineErrors::new().finish().is_ok());
    }

    #[test]
    fn messages_are_prefixed_and_joined() {
        let mut e = LineErrors::new();
        e.push(2, "bad token");
        e.push(7, "missing year");
        assert_eq!(e.len(), 2);
        match e.finish().unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert_eq!(details, "line 2: bad token; line 7: missing year");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
