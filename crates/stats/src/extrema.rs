//! Running maximum/minimum with first-seen tie-break.

use serde::Serialize;

/// One extreme value together with where it came from.
///
/// `order` is the sequence key of the observation in the input.
/// It is not serialized; it only decides ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extreme {
    value: i64,
    locator: String,
    #[serde(skip)]
    order: u64,
}

impl Extreme {
    fn new(value: i64, locator: impl Into<String>, order: u64) -> Self {
        Self {
            value,
            locator: locator.into(),
            order,
        }
    }

    /// The extreme value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Human-readable reference to the source of the value.
    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Sequence key of the observation that produced the value.
    pub fn order(&self) -> u64 {
        self.order
    }
}

/// Running maximum and minimum over a non-empty stream.
///
/// An extreme is replaced only by a strictly better value, or by an equal
/// value with a smaller order key. Observing in input order therefore keeps
/// the first occurrence, and [`merge`](Self::merge) gives the same answer
/// regardless of the order in which partial trackers are combined.
///
/// There is no empty state: use `Option<ExtremaTracker>` for streams that
/// may have no values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtremaTracker {
    max: Extreme,
    min: Extreme,
}

impl ExtremaTracker {
    /// Starts tracking from a first observation.
    pub fn new(value: i64, locator: impl Into<String>, order: u64) -> Self {
        let first = Extreme::new(value, locator, order);
        Self {
            max: first.clone(),
            min: first,
        }
    }

    /// Builds a tracker from `(value, locator)` pairs, using each pair's
    /// position as its order key. Returns `None` for an empty iterator.
    pub fn from_values<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        let mut iter = values.into_iter().enumerate();
        let (_, (value, locator)) = iter.next()?;
        let mut tracker = Self::new(value, locator, 0);
        for (pos, (value, locator)) in iter {
            tracker.observe(value, locator, pos as u64);
        }
        Some(tracker)
    }

    /// Folds one observation into the tracker.
    pub fn observe(&mut self, value: i64, locator: impl Into<String>, order: u64) {
        let beats_max = wins(value, order, self.max.value, self.max.order, true);
        let beats_min = wins(value, order, self.min.value, self.min.order, false);
        match (beats_max, beats_min) {
            (false, false) => {}
            (true, false) => self.max = Extreme::new(value, locator, order),
            (false, true) => self.min = Extreme::new(value, locator, order),
            (true, true) => {
                let extreme = Extreme::new(value, locator, order);
                self.max = extreme.clone();
                self.min = extreme;
            }
        }
    }

    /// Combines a tracker built over a disjoint part of the same stream.
    pub fn merge(&mut self, other: ExtremaTracker) {
        if wins(
            other.max.value,
            other.max.order,
            self.max.value,
            self.max.order,
            true,
        ) {
            self.max = other.max;
        }
        if wins(
            other.min.value,
            other.min.order,
            self.min.value,
            self.min.order,
            false,
        ) {
            self.min = other.min;
        }
    }

    /// Merges two optional trackers.
    pub fn merge_opt(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        match (a, b) {
            (Some(mut a), Some(b)) => {
                a.merge(b);
                Some(a)
            }
            (a, None) => a,
            (None, b) => b,
        }
    }

    /// The largest value seen.
    pub fn max(&self) -> &Extreme {
        &self.max
    }

    /// The smallest value seen.
    pub fn min(&self) -> &Extreme {
        &self.min
    }
}

/// `true` if the candidate should replace the incumbent extreme.
fn wins(value: i64, order: u64, best: i64, best_order: u64, maximize: bool) -> bool {
    let strictly_better = if maximize { value > best } else { value < best };
    strictly_better || (value == best && order < best_order)
}
