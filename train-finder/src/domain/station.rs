//! Station identifier type.

use std::fmt;
use std::str::FromStr;

/// Error returned when a station identifier is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {input:?}")]
pub struct InvalidStationId {
    input: String,
}

/// A numeric station identifier.
///
/// Station ids are not checked against any registry: any string that parses
/// as a base-10 integer is accepted.
///
/// # Examples
///
/// ```
/// use train_finder::domain::StationId;
///
/// let id = StationId::parse("42").unwrap();
/// assert_eq!(id.get(), 42);
///
/// assert!(StationId::parse("").is_err());
/// assert!(StationId::parse("4 2").is_err());
/// assert!(StationId::parse("Kyiv").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StationId(i64);

impl StationId {
    /// Wrap a raw integer id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse a station id from user input.
    ///
    /// Accepts an optional sign followed by ASCII digits. Surrounding
    /// whitespace is not trimmed here; that is the caller's job.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        s.parse::<i64>().map(Self).map_err(|_| InvalidStationId {
            input: s.to_string(),
        })
    }

    /// Returns the raw integer id.
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl FromStr for StationId {
    type Err = InvalidStationId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert_eq!(StationId::parse("0").unwrap().get(), 0);
        assert_eq!(StationId::parse("1902").unwrap().get(), 1902);
        assert_eq!(StationId::parse("+7").unwrap().get(), 7);
        assert_eq!(StationId::parse("007").unwrap().get(), 7);
    }

    #[test]
    fn negative_ids_parse() {
        // No registry check: negative numbers are still integers.
        assert_eq!(StationId::parse("-3").unwrap().get(), -3);
    }

    #[test]
    fn reject_non_integers() {
        assert!(StationId::parse("").is_err());
        assert!(StationId::parse(" 1").is_err());
        assert!(StationId::parse("1 ").is_err());
        assert!(StationId::parse("1.5").is_err());
        assert!(StationId::parse("one").is_err());
        assert!(StationId::parse("99999999999999999999").is_err());
    }

    #[test]
    fn from_str_matches_parse() {
        let id: StationId = "12".parse().unwrap();
        assert_eq!(id, StationId::new(12));
    }

    #[test]
    fn display() {
        assert_eq!(StationId::new(5).to_string(), "5");
        assert_eq!(format!("{:?}", StationId::new(5)), "StationId(5)");
    }

    #[test]
    fn error_display() {
        let err = StationId::parse("abc").unwrap_err();
        assert_eq!(err.to_string(), "invalid station id: \"abc\"");
    }
}
