//! Times of day and hour arithmetic relative to a displayed day.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// A wall-clock time of day with minute precision.
///
/// Serialized as an `"HH:MM"` string.
///
/// # Examples
///
/// ```
/// use tvgrid_protocol::TimeOfDay;
///
/// let time = TimeOfDay::parse("20:15").unwrap();
/// assert_eq!(time.hour(), 20);
/// assert_eq!(time.minute(), 15);
/// assert_eq!(time.to_string(), "20:15");
///
/// assert!(TimeOfDay::parse("24:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a time of day, or `None` if it is out of range.
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Parses an `"HH:MM"` (or `"H:MM"`) string.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidTimeOfDay`] if the string is not a
    /// valid time.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || ProtocolError::InvalidTimeOfDay(value.to_string());
        let (hour, minute) = value.trim().split_once(':').ok_or_else(invalid)?;
        if minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).ok_or_else(invalid)
    }

    /// Returns the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns this time on the given day.
    #[must_use]
    pub fn on(&self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(self.as_time())
    }

    /// Returns this time as a [`NaiveTime`].
    #[must_use]
    pub fn as_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ProtocolError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// Returns the whole hours from midnight of `day` to `time`.
///
/// The result is floored, so it is negative for any time before midnight:
/// 23:30 on the previous day is hour -1.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tvgrid_protocol::hours_since;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let next = day.succ_opt().unwrap();
///
/// assert_eq!(hours_since(day, day.and_hms_opt(20, 45, 0).unwrap()), 20);
/// assert_eq!(hours_since(day, next.and_hms_opt(1, 30, 0).unwrap()), 25);
/// assert_eq!(hours_since(next, day.and_hms_opt(22, 0, 0).unwrap()), -2);
/// assert_eq!(hours_since(next, day.and_hms_opt(23, 30, 0).unwrap()), -1);
/// ```
#[must_use]
pub fn hours_since(day: NaiveDate, time: NaiveDateTime) -> i32 {
    let hours = (time - day.and_time(NaiveTime::MIN))
        .num_minutes()
        .div_euclid(60);
    hours.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Drops seconds and sub-second precision from a timestamp.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tvgrid_protocol::truncate_to_minute;
///
/// let t = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_milli_opt(20, 15, 42, 500).unwrap();
/// assert_eq!(truncate_to_minute(t).to_string(), "2024-03-01 20:15:00");
/// ```
#[must_use]
pub fn truncate_to_minute(time: NaiveDateTime) -> NaiveDateTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_before_midnight_round_down() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let before = day.pred_opt().unwrap();

        assert_eq!(hours_since(day, before.and_hms_opt(23, 30, 0).unwrap()), -1);
        assert_eq!(hours_since(day, before.and_hms_opt(23, 0, 0).unwrap()), -1);
        assert_eq!(hours_since(day, before.and_hms_opt(22, 59, 0).unwrap()), -2);
        assert_eq!(hours_since(day, day.and_hms_opt(0, 59, 0).unwrap()), 0);
    }

    #[test]
    fn parse_accepts_single_digit_hour() {
        assert_eq!(TimeOfDay::parse("6:00").unwrap(), TimeOfDay::new(6, 0).unwrap());
    }

    #[test]
    fn parse_rejects_malformed_values() {
        for value in ["", "20", "20:5", "20:60", "aa:bb", "-1:00", "20:15:00"] {
            assert!(TimeOfDay::parse(value).is_err(), "{value} should not parse");
        }
    }

    #[test]
    fn serde_uses_string_form() {
        let time = TimeOfDay::new(23, 5).unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"23:05\"");

        let parsed: TimeOfDay = serde_json::from_str("\"06:30\"").unwrap();
        assert_eq!(parsed, TimeOfDay::new(6, 30).unwrap());
        assert!(serde_json::from_str::<TimeOfDay>("\"99:00\"").is_err());
    }

    #[test]
    fn times_order_chronologically() {
        let early = TimeOfDay::parse("06:00").unwrap();
        let late = TimeOfDay::parse("20:15").unwrap();
        assert!(early < late);
    }
}
