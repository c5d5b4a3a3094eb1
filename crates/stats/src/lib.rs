//! Integer accumulators for the rainstat pipeline.
//!
//! All arithmetic is done in `i64` with overflow checks; averages use
//! truncating integer division, so `-7 / 2 == -3`.

mod aggregate;
mod error;
mod extrema;

pub use aggregate::Aggregate;
pub use error::StatsError;
pub use extrema::{Extreme, ExtremaTracker};

/// Truncating integer mean. Returns `None` if `count` is zero.
pub fn truncating_mean(sum: i64, count: u64) -> Option<i64> {
    if count == 0 {
        return None;
    }
    // Counts beyond i64::MAX cannot arise from in-memory inputs; saturate
    // rather than wrap if they ever do.
    let divisor = i64::try_from(count).unwrap_or(i64::MAX);
    Some(sum / divisor)
}

/// Checked sum of a slice of values.
///
/// # Errors
///
/// Returns [`StatsError::Overflow`] if the running sum leaves `i64`.
pub fn checked_sum(values: &[i64], context: &str) -> Result<i64, StatsError> {
    values.iter().try_fold(0i64, |acc, &v| {
        acc.checked_add(v).ok_or_else(|| StatsError::Overflow {
            context: context.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncating_mean() {
        assert_eq!(truncating_mean(10, 4), Some(2));
        assert_eq!(truncating_mean(12, 4), Some(3));
    }

    #[test]
    fn test_truncating_mean_negative_truncates_toward_zero() {
        assert_eq!(truncating_mean(-7, 2), Some(-3));
    }

    #[test]
    fn test_truncating_mean_empty() {
        assert_eq!(truncating_mean(0, 0), None);
    }

    #[test]
    fn test_checked_sum() {
        assert_eq!(checked_sum(&[1, 2, 3], "t").unwrap(), 6);
        assert_eq!(checked_sum(&[], "t").unwrap(), 0);
    }

    #[test]
    fn test_checked_sum_overflow() {
        let err = checked_sum(&[i64::MAX, 1], "years").unwrap_err();
        assert_eq!(
            err,
            StatsError::Overflow {
                context: "years".to_string()
            }
        );
    }
}
