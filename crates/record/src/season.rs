//! Season classification of month indices.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RecordError;

/// Meteorological season of the northern hemisphere.
///
/// Winter spans December, January and February; the remaining seasons take
/// three consecutive months each starting in March.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// All seasons in calendar order.
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    /// Season of each 0-based month index, January first.
    pub const BY_MONTH_INDEX: [Season; 12] = [
        Season::Winter,
        Season::Winter,
        Season::Spring,
        Season::Spring,
        Season::Spring,
        Season::Summer,
        Season::Summer,
        Season::Summer,
        Season::Fall,
        Season::Fall,
        Season::Fall,
        Season::Winter,
    ];

    /// Classifies a 0-based month index (0 = January).
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::InvalidMonthIndex`] if `index` is 12 or more.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(Season::from_month_index(0).unwrap(), Season::Winter);  // Jan
    /// assert_eq!(Season::from_month_index(11).unwrap(), Season::Winter); // Dec
    /// assert_eq!(Season::from_month_index(2).unwrap(), Season::Spring);  // Mar
    /// ```
    pub fn from_month_index(index: usize) -> Result<Self, RecordError> {
        Self::BY_MONTH_INDEX
            .get(index)
            .copied()
            .ok_or(RecordError::InvalidMonthIndex { index })
    }

    /// Calendar months (1-based) belonging to this season.
    pub fn months(self) -> [u8; 3] {
        match self {
            Season::Winter => [12, 1, 2],
            Season::Spring => [3, 4, 5],
            Season::Summer => [6, 7, 8],
            Season::Fall => [9, 10, 11],
        }
    }

    /// Lowercase name, as used in season keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" => Ok(Season::Fall),
            other => Err(RecordError::UnknownSeason {
                name: other.to_string(),
            }),
        }
    }
}
