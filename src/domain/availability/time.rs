//! Wall-clock time of day with minute granularity.
//!
//! Stored as minute-of-day so ordering never depends on string padding:
//! `"9:00"` and `"09:00"` parse to the same value and always render as `"09:00"`.

use chrono::format::ParseErrorKind;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// A time of day in the range 00:00..=23:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Start of a default slot.
    pub const DEFAULT_START: TimeOfDay = TimeOfDay(9 * MINUTES_PER_HOUR);

    /// End of a default slot.
    pub const DEFAULT_END: TimeOfDay = TimeOfDay(17 * MINUTES_PER_HOUR);

    /// Creates a time from hour and minute.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if hour > 23 or minute > 59
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::out_of_range("hour", 0, 23, hour as i32));
        }
        if minute > 59 {
            return Err(ValidationError::out_of_range("minute", 0, 59, minute as i32));
        }
        Ok(Self(hour as u16 * MINUTES_PER_HOUR + minute as u16))
    }

    /// Creates a time from minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Result<Self, ValidationError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ValidationError::out_of_range(
                "minute_of_day",
                0,
                (MINUTES_PER_DAY - 1) as i32,
                minutes as i32,
            ));
        }
        Ok(Self(minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u8 {
        (self.0 / MINUTES_PER_HOUR) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.0 % MINUTES_PER_HOUR) as u8
    }

    /// Converts to a chrono time (seconds are always zero).
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(self.0 as u32 * 60, 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Truncates seconds.
    fn from(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    /// Parses `H:MM` or `HH:MM` (24h).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::empty_field("time"));
        }

        // chrono accepts a single minute digit ("9:0"); form input must not.
        if s.rsplit_once(':').map(|(_, minute)| minute.len()) != Some(2) {
            return Err(ValidationError::invalid_format("time", "expected HH:MM"));
        }

        NaiveTime::parse_from_str(s, "%H:%M")
            .map(Self::from)
            .map_err(|e| match e.kind() {
                ParseErrorKind::OutOfRange => out_of_range_component(s),
                _ => ValidationError::invalid_format("time", format!("expected HH:MM ({})", e)),
            })
    }
}

/// Names the offending component of text chrono rejected as out of range.
fn out_of_range_component(s: &str) -> ValidationError {
    let components = s
        .split_once(':')
        .and_then(|(hour, minute)| Some((hour.parse::<u8>().ok()?, minute.parse::<u8>().ok()?)));
    match components.map(|(hour, minute)| TimeOfDay::new(hour, minute)) {
        Some(Err(err)) => err,
        _ => ValidationError::invalid_format("time", "time of day out of range"),
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}
