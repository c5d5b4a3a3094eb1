//! Grouped reduction of contributions into aggregates.

use std::collections::BTreeMap;

use rainstat_record::{Contribution, KeyKind};
use rainstat_stats::{Aggregate, ExtremaTracker};

use crate::error::{AggregateError, MalformedRecordError};
use crate::result::Reduced;

/// Reducer state for one shard, or for several merged shards.
///
/// Holds one [`Aggregate`] per `(kind, key)` group plus the running monthly
/// [`ExtremaTracker`] fed by the global stream. All state is owned; shards
/// are combined with [`merge`](Self::merge) and finalised with
/// [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct GroupedReducer {
    yearly: BTreeMap<String, Aggregate>,
    seasonal: BTreeMap<String, Aggregate>,
    global: BTreeMap<String, Aggregate>,
    monthly: Option<ExtremaTracker>,
    malformed: Vec<MalformedRecordError>,
    records: usize,
}

impl GroupedReducer {
    /// Creates an empty reducer.
    pub fn new() -> Self {
        Self::default()
    }

    fn groups_mut(&mut self, kind: KeyKind) -> &mut BTreeMap<String, Aggregate> {
        match kind {
            KeyKind::Year => &mut self.yearly,
            KeyKind::YearSeason => &mut self.seasonal,
            KeyKind::Global => &mut self.global,
        }
    }

    /// Merges one contribution into its group.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::Stats`] if the group sum overflows.
    pub fn accept(&mut self, contribution: Contribution) -> Result<(), AggregateError> {
        let Contribution {
            kind,
            key,
            value,
            locator,
            order,
        } = contribution;

        if kind == KeyKind::Global {
            let locator = locator.unwrap_or_default();
            match self.monthly.as_mut() {
                Some(tracker) => tracker.observe(value, locator, order),
                None => self.monthly = Some(ExtremaTracker::new(value, locator, order)),
            }
        }

        let groups = self.groups_mut(kind);
        match groups.get_mut(key.as_str()) {
            Some(agg) => agg.add(value, &key)?,
            None => {
                groups.insert(key, Aggregate::of(value));
            }
        }
        Ok(())
    }

    /// Merges every contribution from an iterator.
    ///
    /// # Errors
    ///
    /// Stops at the first overflow.
    pub fn accept_all<I>(&mut self, contributions: I) -> Result<(), AggregateError>
    where
        I: IntoIterator<Item = Contribution>,
    {
        for c in contributions {
            self.accept(c)?;
        }
        Ok(())
    }

    /// Notes that `n` input records were processed by this reducer.
    pub fn count_records(&mut self, n: usize) {
        self.records += n;
    }

    /// Attaches the malformed records skipped while feeding this reducer.
    pub fn absorb_malformed(&mut self, malformed: Vec<MalformedRecordError>) {
        self.malformed.extend(malformed);
    }

    /// Combines two reducers built over disjoint parts of the input.
    ///
    /// Sums and counts add up; monthly extrema merge with the input
    /// record order as tie-break, so the result does not depend on which
    /// shard finishes first.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateError::Stats`] if a merged sum overflows.
    pub fn merge(mut self, other: GroupedReducer) -> Result<GroupedReducer, AggregateError> {
        merge_groups(&mut self.yearly, other.yearly)?;
        merge_groups(&mut self.seasonal, other.seasonal)?;
        merge_groups(&mut self.global, other.global)?;
        self.monthly = ExtremaTracker::merge_opt(self.monthly, other.monthly);
        self.malformed.extend(other.malformed);
        self.records += other.records;
        Ok(self)
    }

    /// Number of distinct groups of the given kind.
    pub fn group_count(&self, kind: KeyKind) -> usize {
        match kind {
            KeyKind::Year => self.yearly.len(),
            KeyKind::YearSeason => self.seasonal.len(),
            KeyKind::Global => self.global.len(),
        }
    }

    /// Finalises the reduction.
    pub fn finish(mut self) -> Reduced {
        self.malformed.sort_by_key(|m| m.index);
        Reduced::new(
            self.yearly,
            self.seasonal,
            self.global,
            self.monthly,
            self.malformed,
            self.records,
        )
    }
}

fn merge_groups(
    into: &mut BTreeMap<String, Aggregate>,
    from: BTreeMap<String, Aggregate>,
) -> Result<(), AggregateError> {
    for (key, agg) in from {
        match into.get_mut(key.as_str()) {
            Some(existing) => existing.merge(&agg, &key)?,
            None => {
                into.insert(key, agg);
            }
        }
    }
    Ok(())
}
