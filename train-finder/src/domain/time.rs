//! Time-of-day handling for dataset timestamps.
//!
//! The dataset stores departure and arrival times as "HH:MM:SS" strings with
//! the seconds always written as "00". There is no date component: times are
//! only ever compared against other times from the same dataset.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// Returns the reason the string was rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// A time of day with no date attached.
///
/// The default value is midnight, which is also what a record gets when
/// its time field is absent from the dataset.
///
/// # Examples
///
/// ```
/// use train_finder::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse_hhmmss("09:45:00").unwrap();
/// assert_eq!(t.to_string(), "09:45:00");
/// assert!(t < TimeOfDay::parse_hhmmss("10:00:00").unwrap());
/// assert_eq!(TimeOfDay::default().to_string(), "00:00:00");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Midnight, the zero time of day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(NaiveTime::MIN);

    /// Build a time from hour and minute, with zero seconds.
    ///
    /// Returns `None` if the hour or minute is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parse a time from the dataset's "HH:MM:SS" format.
    ///
    /// Hours are 24-hour and always two digits. Seconds must be "00".
    ///
    /// # Examples
    ///
    /// ```
    /// use train_finder::domain::TimeOfDay;
    ///
    /// assert!(TimeOfDay::parse_hhmmss("00:00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmmss("23:59:00").is_ok());
    ///
    /// assert!(TimeOfDay::parse_hhmmss("12:00").is_err());
    /// assert!(TimeOfDay::parse_hhmmss("24:00:00").is_err());
    /// assert!(TimeOfDay::parse_hhmmss("12:00:30").is_err());
    /// ```
    pub fn parse_hhmmss(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 8 characters: HH:MM:SS
        if s.len() != 8 {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' || bytes[5] != b':' {
            return Err(TimeError::new("expected colons at positions 2 and 5"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        if &bytes[6..8] != b"00" {
            return Err(TimeError::new("seconds must be 00"));
        }

        Self::from_hm(hour, minute).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({})", self)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.0.second()
        )
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
