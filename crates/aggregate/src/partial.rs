//! Record-to-contribution transform.

use rainstat_record::{Contribution, YearRecord};

use crate::budget::ErrorCollector;
use crate::error::{AggregateError, MalformedRecordError};

/// Expands one record into its contributions.
///
/// Each present month yields three contributions, in this order: the global
/// monthly value located as `M/YYYY`, the `year-season` value, and the yearly
/// value. Missing trailing months contribute nothing, so the yearly group's
/// count is the number of months actually present.
///
/// # Errors
///
/// Returns [`MalformedRecordError`] if the record has no month values.
pub fn contributions(
    record_index: usize,
    record: &YearRecord,
) -> Result<Vec<Contribution>, MalformedRecordError> {
    if record.is_empty() {
        return Err(MalformedRecordError {
            index: record_index,
            year: record.year().to_string(),
        });
    }

    let year = record.year();
    let mut out = Vec::with_capacity(record.month_count() * 3);
    for (month_index, season, value) in record.seasonal_values() {
        let order = Contribution::order_of(record_index, month_index);
        out.push(Contribution::global(year, month_index, value, order));
        out.push(Contribution::seasonal(year, season, value, order));
        out.push(Contribution::yearly(year, value, order));
    }
    Ok(out)
}

/// Expands a run of records, skipping malformed ones.
///
/// `offset` is the input position of `records[0]`, so that order keys and
/// error indices refer to the whole input rather than to a shard. Skipped
/// records go to `errors`.
///
/// # Errors
///
/// Returns [`AggregateError::ErrorBudgetExceeded`] if the collector's budget
/// trips.
pub fn partial_aggregate(
    records: &[YearRecord],
    offset: usize,
    errors: &mut ErrorCollector<'_>,
) -> Result<Vec<Contribution>, AggregateError> {
    let mut out = Vec::with_capacity(records.len() * 36);
    for (i, record) in records.iter().enumerate() {
        match contributions(offset + i, record) {
            Ok(cs) => out.extend(cs),
            Err(e) => errors.record(e)?,
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::ErrorBudget;
    use rainstat_record::{GLOBAL_KEY, KeyKind};

    fn rec(year: &str, months: Vec<i32>) -> YearRecord {
        YearRecord::new(year, months).unwrap()
    }

    #[test]
    fn full_record_yields_three_per_month() {
        let cs = contributions(0, &rec("1990", (1..=12).collect())).unwrap();
        assert_eq!(cs.len(), 36);
        let globals = cs.iter().filter(|c| c.kind == KeyKind::Global).count();
        let seasonal = cs.iter().filter(|c| c.kind == KeyKind::YearSeason).count();
        let yearly = cs.iter().filter(|c| c.kind == KeyKind::Year).count();
        assert_eq!((globals, seasonal, yearly), (12, 12, 12));
    }

    #[test]
    fn global_locators_and_keys() {
        let cs = contributions(0, &rec("1990", vec![5, 6])).unwrap();
        let globals: Vec<_> = cs.iter().filter(|c| c.kind == KeyKind::Global).collect();
        assert_eq!(globals[0].key, GLOBAL_KEY);
        assert_eq!(globals[0].locator.as_deref(), Some("1/1990"));
        assert_eq!(globals[1].locator.as_deref(), Some("2/1990"));
    }

    #[test]
    fn seasonal_keys_follow_month_index() {
        let cs = contributions(0, &rec("1990", (1..=12).collect())).unwrap();
        let dec = cs
            .iter()
            .find(|c| c.kind == KeyKind::YearSeason && c.value == 12)
            .unwrap();
        assert_eq!(dec.key, "1990-winter");
        let jun = cs
            .iter()
            .find(|c| c.kind == KeyKind::YearSeason && c.value == 6)
            .unwrap();
        assert_eq!(jun.key, "1990-summer");
    }

    #[test]
    fn short_record_contributes_present_months_only() {
        let cs = contributions(0, &rec("1990", vec![1, 2, 3])).unwrap();
        assert_eq!(cs.len(), 9);
    }

    #[test]
    fn order_uses_record_index() {
        let cs = contributions(2, &rec("1992", vec![7])).unwrap();
        assert!(cs.iter().all(|c| c.order == 24));
    }

    #[test]
    fn empty_record_is_malformed() {
        let err = contributions(3, &rec("1993", Vec::new())).unwrap_err();
        assert_eq!(
            err,
            MalformedRecordError {
                index: 3,
                year: "1993".to_string()
            }
        );
    }

    #[test]
    fn partial_aggregate_skips_and_continues() {
        let records = vec![
            rec("1990", vec![1]),
            rec("1991", Vec::new()),
            rec("1992", vec![2]),
        ];
        let budget = ErrorBudget::new(None);
        let mut errors = ErrorCollector::new(&budget);
        let cs = partial_aggregate(&records, 10, &mut errors).unwrap();
        assert_eq!(cs.len(), 6);
        let skipped = errors.into_records();
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].index, 11);
    }

    #[test]
    fn partial_aggregate_stops_on_budget() {
        let records = vec![rec("1990", Vec::new()), rec("1991", Vec::new())];
        let budget = ErrorBudget::new(Some(1));
        let mut errors = ErrorCollector::new(&budget);
        let err = partial_aggregate(&records, 0, &mut errors).unwrap_err();
        assert!(matches!(err, AggregateError::ErrorBudgetExceeded { .. }));
    }
}
