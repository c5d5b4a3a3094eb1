//! Malformed-record accounting shared across worker shards.
//!
//! Each shard owns an [`ErrorCollector`] that records the malformed records
//! it skipped. All collectors charge the same [`ErrorBudget`], so the run
//! fails as soon as the global count passes the configured limit, whichever
//! worker hits it.

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::warn;

use crate::error::{AggregateError, MalformedRecordError};

/// Run-wide malformed-record counter with an optional limit.
#[derive(Debug)]
pub struct ErrorBudget {
    limit: Option<usize>,
    seen: AtomicUsize,
}

impl ErrorBudget {
    /// Creates a budget. `None` never trips.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            seen: AtomicUsize::new(0),
        }
    }

    /// Counts one malformed record.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::ErrorBudgetExceeded`] once the count passes
    /// the limit.
    pub fn charge(&self) -> Result<(), AggregateError> {
        let seen = self.seen.fetch_add(1, Ordering::Relaxed) + 1;
        match self.limit {
            Some(limit) if seen > limit => Err(AggregateError::ErrorBudgetExceeded { limit, seen }),
            _ => Ok(()),
        }
    }

    /// Returns `true` if some worker already exhausted the budget.
    pub fn is_exhausted(&self) -> bool {
        self.limit
            .is_some_and(|limit| self.seen.load(Ordering::Relaxed) > limit)
    }

    /// Configured limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Number of malformed records charged so far.
    pub fn seen(&self) -> usize {
        self.seen.load(Ordering::Relaxed)
    }
}

/// Per-shard collector of skipped records.
#[derive(Debug)]
pub struct ErrorCollector<'a> {
    budget: &'a ErrorBudget,
    malformed: Vec<MalformedRecordError>,
}

impl<'a> ErrorCollector<'a> {
    /// Creates an empty collector charging `budget`.
    pub fn new(budget: &'a ErrorBudget) -> Self {
        Self {
            budget,
            malformed: Vec::new(),
        }
    }

    /// Records one skipped record.
    ///
    /// # Errors
    ///
    /// Propagates [`AggregateError::ErrorBudgetExceeded`] from the budget.
    pub fn record(&mut self, err: MalformedRecordError) -> Result<(), AggregateError> {
        warn!(index = err.index, year = %err.year, "skipping malformed record");
        self.budget.charge()?;
        self.malformed.push(err);
        Ok(())
    }

    /// Number of records collected by this shard.
    pub fn len(&self) -> usize {
        self.malformed.len()
    }

    /// Returns `true` if this shard skipped nothing.
    pub fn is_empty(&self) -> bool {
        self.malformed.is_empty()
    }

    /// Consumes the collector, returning the skipped records.
    pub fn into_records(self) -> Vec<MalformedRecordError> {
        self.malformed
    }
}
