//! Sort criteria for query results.

use std::cmp::Ordering;
use std::fmt;

use crate::domain::TrainRecord;

/// Error returned when a criteria string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported criteria: {0:?}")]
pub struct UnsupportedCriteria(pub String);

/// The field query results are ordered by. Always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCriteria {
    /// Cheapest first.
    Price,
    /// Earliest arrival first.
    ArrivalTime,
    /// Earliest departure first.
    DepartureTime,
}

impl SortCriteria {
    /// All criteria, in the order they are offered to users.
    pub const ALL: [SortCriteria; 3] = [
        SortCriteria::Price,
        SortCriteria::ArrivalTime,
        SortCriteria::DepartureTime,
    ];

    /// Parse a criteria name.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_finder::finder::SortCriteria;
    ///
    /// assert_eq!(SortCriteria::parse("price").unwrap(), SortCriteria::Price);
    /// assert_eq!(
    ///     SortCriteria::parse("arrival-time").unwrap(),
    ///     SortCriteria::ArrivalTime
    /// );
    /// assert!(SortCriteria::parse("Price").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, UnsupportedCriteria> {
        match s {
            "price" => Ok(SortCriteria::Price),
            "arrival-time" => Ok(SortCriteria::ArrivalTime),
            "departure-time" => Ok(SortCriteria::DepartureTime),
            other => Err(UnsupportedCriteria(other.to_string())),
        }
    }

    /// Returns the name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriteria::Price => "price",
            SortCriteria::ArrivalTime => "arrival-time",
            SortCriteria::DepartureTime => "departure-time",
        }
    }

    /// Compare two records on this criteria's field.
    pub fn compare(&self, a: &TrainRecord, b: &TrainRecord) -> Ordering {
        match self {
            // -0.0 and 0.0 are the same price and must tie
            SortCriteria::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
            SortCriteria::ArrivalTime => a.arrival_time.cmp(&b.arrival_time),
            SortCriteria::DepartureTime => a.departure_time.cmp(&b.departure_time),
        }
    }

    /// Sort records ascending on this criteria's field.
    ///
    /// The sort is stable: records with equal keys keep their relative order.
    pub fn sort(&self, records: &mut [&TrainRecord]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
