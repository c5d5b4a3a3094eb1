//! Output type for grouped reduction.

use std::collections::BTreeMap;

use rainstat_record::GLOBAL_KEY;
use rainstat_stats::{Aggregate, ExtremaTracker};

use crate::error::MalformedRecordError;

/// Final reduced state of a run.
///
/// Maps are keyed by year label and by `year-season` key, iterated in
/// ascending lexicographic order. The yearly and seasonal extrema are
/// derived from the totals in that order, so equal totals resolve to the
/// smallest key.
#[derive(Debug, Clone)]
pub struct Reduced {
    yearly: BTreeMap<String, Aggregate>,
    seasonal: BTreeMap<String, Aggregate>,
    global: BTreeMap<String, Aggregate>,
    monthly_extrema: Option<ExtremaTracker>,
    yearly_extrema: Option<ExtremaTracker>,
    seasonal_extrema: Option<ExtremaTracker>,
    malformed: Vec<MalformedRecordError>,
    records: usize,
}

impl Reduced {
    pub(crate) fn new(
        yearly: BTreeMap<String, Aggregate>,
        seasonal: BTreeMap<String, Aggregate>,
        global: BTreeMap<String, Aggregate>,
        monthly_extrema: Option<ExtremaTracker>,
        malformed: Vec<MalformedRecordError>,
        records: usize,
    ) -> Self {
        let yearly_extrema = totals_extrema(&yearly);
        let seasonal_extrema = totals_extrema(&seasonal);
        Self {
            yearly,
            seasonal,
            global,
            monthly_extrema,
            yearly_extrema,
            seasonal_extrema,
            malformed,
            records,
        }
    }

    /// Per-year aggregates.
    pub fn yearly(&self) -> &BTreeMap<String, Aggregate> {
        &self.yearly
    }

    /// Per-`year-season` aggregates.
    pub fn seasonal(&self) -> &BTreeMap<String, Aggregate> {
        &self.seasonal
    }

    /// Aggregate over every monthly value, if any were seen.
    pub fn global(&self) -> Option<&Aggregate> {
        self.global.get(GLOBAL_KEY)
    }

    /// Year label to truncating average monthly rainfall.
    pub fn yearly_averages(&self) -> BTreeMap<String, i64> {
        self.yearly
            .iter()
            .filter_map(|(year, agg)| agg.average().map(|avg| (year.clone(), avg)))
            .collect()
    }

    /// Largest and smallest single monthly value, located as `M/YYYY`.
    pub fn monthly_extrema(&self) -> Option<&ExtremaTracker> {
        self.monthly_extrema.as_ref()
    }

    /// Largest and smallest yearly total, located by year label.
    pub fn yearly_extrema(&self) -> Option<&ExtremaTracker> {
        self.yearly_extrema.as_ref()
    }

    /// Largest and smallest seasonal total, located by `year-season` key.
    pub fn seasonal_extrema(&self) -> Option<&ExtremaTracker> {
        self.seasonal_extrema.as_ref()
    }

    /// Records skipped as malformed, in input order.
    pub fn malformed(&self) -> &[MalformedRecordError] {
        &self.malformed
    }

    /// Number of input records seen, malformed ones included.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Returns `true` if no record contributed anything.
    pub fn is_empty(&self) -> bool {
        self.yearly.is_empty()
    }
}

fn totals_extrema(groups: &BTreeMap<String, Aggregate>) -> Option<ExtremaTracker> {
    ExtremaTracker::from_values(groups.iter().map(|(key, agg)| (agg.sum(), key.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agg(values: &[i64]) -> Aggregate {
        let mut a = Aggregate::new();
        for &v in values {
            a.add(v, "t").unwrap();
        }
        a
    }

    fn reduced(yearly: &[(&str, &[i64])]) -> Reduced {
        let yearly = yearly
            .iter()
            .map(|(y, v)| (y.to_string(), agg(v)))
            .collect();
        Reduced::new(
            yearly,
            BTreeMap::new(),
            BTreeMap::new(),
            None,
            Vec::new(),
            0,
        )
    }

    #[test]
    fn yearly_averages_truncate() {
        let r = reduced(&[("1990", &[1, 2]), ("1991", &[10, 10, 11])]);
        let avgs = r.yearly_averages();
        assert_eq!(avgs["1990"], 1);
        assert_eq!(avgs["1991"], 10);
    }

    #[test]
    fn yearly_extrema_tie_resolves_to_smallest_key() {
        let r = reduced(&[("1992", &[5]), ("1990", &[5]), ("1991", &[1])]);
        let t = r.yearly_extrema().unwrap();
        assert_eq!(t.max().locator(), "1990");
        assert_eq!(t.max().value(), 5);
        assert_eq!(t.min().locator(), "1991");
    }

    #[test]
    fn empty_reduction() {
        let r = reduced(&[]);
        assert!(r.is_empty());
        assert!(r.yearly_extrema().is_none());
        assert!(r.global().is_none());
    }
}
