//! Sum/count accumulator for one group key.

use serde::Serialize;

use crate::error::StatsError;
use crate::truncating_mean;

/// Merged sum and count of every contribution sharing a key.
///
/// Invariant: `count` equals the number of values added (directly or
/// through [`merge`](Self::merge)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    sum: i64,
    count: u64,
}

impl Aggregate {
    /// Creates an empty aggregate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an aggregate holding a single value.
    pub fn of(value: i64) -> Self {
        Self {
            sum: value,
            count: 1,
        }
    }

    /// Adds one value.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Overflow`] if the sum leaves `i64`; `key` names
    /// the group in the error. The aggregate is left unchanged on error.
    pub fn add(&mut self, value: i64, key: &str) -> Result<(), StatsError> {
        let sum = self.sum.checked_add(value).ok_or_else(|| overflow(key))?;
        let count = self.count.checked_add(1).ok_or_else(|| overflow(key))?;
        self.sum = sum;
        self.count = count;
        Ok(())
    }

    /// Folds another aggregate for the same key into this one.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Overflow`] if either field leaves its range.
    pub fn merge(&mut self, other: &Aggregate, key: &str) -> Result<(), StatsError> {
        let sum = self.sum.checked_add(other.sum).ok_or_else(|| overflow(key))?;
        let count = self
            .count
            .checked_add(other.count)
            .ok_or_else(|| overflow(key))?;
        self.sum = sum;
        self.count = count;
        Ok(())
    }

    /// Returns the accumulated sum.
    pub fn sum(&self) -> i64 {
        self.sum
    }

    /// Returns the number of merged values.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Truncating average `sum / count`, or `None` when empty.
    pub fn average(&self) -> Option<i64> {
        truncating_mean(self.sum, self.count)
    }

    /// Returns `true` if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

fn overflow(key: &str) -> StatsError {
    StatsError::Overflow {
        context: key.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_tracks_sum_and_count() {
        let mut a = Aggregate::new();
        for v in [3, 4, 5] {
            a.add(v, "k").unwrap();
        }
        assert_eq!(a.sum(), 12);
        assert_eq!(a.count(), 3);
        assert_eq!(a.average(), Some(4));
    }

    #[test]
    fn average_truncates() {
        let mut a = Aggregate::of(10);
        a.add(1, "k").unwrap();
        assert_eq!(a.average(), Some(5));
        let mut n = Aggregate::of(-10);
        n.add(-1, "k").unwrap();
        assert_eq!(n.average(), Some(-5));
    }

    #[test]
    fn empty_has_no_average() {
        let a = Aggregate::new();
        assert!(a.is_empty());
        assert_eq!(a.average(), None);
    }

    #[test]
    fn merge_is_additive() {
        let mut a = Aggregate::of(2);
        a.add(4, "k").unwrap();
        let mut b = Aggregate::of(6);
        b.add(8, "k").unwrap();
        a.merge(&b, "k").unwrap();
        assert_eq!(a.sum(), 20);
        assert_eq!(a.count(), 4);
    }

    #[test]
    fn overflow_leaves_state_untouched() {
        let mut a = Aggregate::of(i64::MAX);
        let err = a.add(1, "1990").unwrap_err();
        assert_eq!(
            err,
            StatsError::Overflow {
                context: "1990".to_string()
            }
        );
        assert_eq!(a.sum(), i64::MAX);
        assert_eq!(a.count(), 1);
    }

    #[test]
    fn merge_overflow() {
        let mut a = Aggregate::of(i64::MIN);
        assert!(a.merge(&Aggregate::of(-1), "k").is_err());
    }
}
