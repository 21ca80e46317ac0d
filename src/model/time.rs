//! Clock times, weekday ranges and preference windows.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in a day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Last valid weekday index (0 = Monday, 6 = Sunday).
pub const LAST_DAY: u8 = 6;

/// Error returned when an `HH:MM` string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid clock time '{input}': {reason}")]
pub struct ParseTimeError {
    pub input: String,
    pub reason: &'static str,
}

/// A wall-clock time stored as minutes since midnight.
///
/// Accepts `00:00` through `23:59`, plus `24:00` as end of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Midnight at the start of the day.
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Midnight at the end of the day (`24:00`).
    pub const END_OF_DAY: ClockTime = ClockTime(MINUTES_PER_DAY);

    /// Builds a time from hours and minutes, rejecting out-of-range values.
    pub fn from_hm(hours: u16, minutes: u16) -> Result<Self, ParseTimeError> {
        let input = || format!("{hours:02}:{minutes:02}");
        if minutes > 59 {
            return Err(ParseTimeError {
                input: input(),
                reason: "minutes must be in 0..=59",
            });
        }
        if hours > 24 || (hours == 24 && minutes != 0) {
            return Err(ParseTimeError {
                input: input(),
                reason: "time must be between 00:00 and 24:00",
            });
        }
        Ok(ClockTime(hours * 60 + minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| ParseTimeError {
            input: s.to_string(),
            reason,
        };
        let (h, m) = s.trim().split_once(':').ok_or_else(|| err("expected HH:MM"))?;
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if h.is_empty() || h.len() > 2 || m.len() != 2 || !digits(h) || !digits(m) {
            return Err(err("expected HH:MM"));
        }
        let hours: u16 = h.parse().map_err(|_| err("hours are not a number"))?;
        let minutes: u16 = m.parse().map_err(|_| err("minutes are not a number"))?;
        ClockTime::from_hm(hours, minutes).map_err(|e| err(e.reason))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Inclusive weekday range, 0 = Monday through 6 = Sunday. Does not wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayRange {
    pub start: u8,
    pub end: u8,
}

impl DayRange {
    pub const WHOLE_WEEK: DayRange = DayRange {
        start: 0,
        end: LAST_DAY,
    };

    pub fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, day: u8) -> bool {
        self.start <= day && day <= self.end
    }

    /// `start <= end` and both inside the week.
    pub fn is_valid(&self) -> bool {
        self.start <= self.end && self.end <= LAST_DAY
    }
}

impl Default for DayRange {
    fn default() -> Self {
        Self::WHOLE_WEEK
    }
}

/// Inclusive clock-time window. Overnight windows are not represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeWindow {
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Whether `[start, end]` lies inside this window.
    ///
    /// Plain minute comparison: an overnight interval whose end precedes
    /// its start is compared as written.
    pub fn covers(&self, start: ClockTime, end: ClockTime) -> bool {
        start >= self.start && end <= self.end
    }

    pub fn is_valid(&self) -> bool {
        self.start <= self.end
    }
}

impl Default for TimeWindow {
    /// `00:00` to `23:59`.
    fn default() -> Self {
        Self {
            start: ClockTime::MIDNIGHT,
            end: ClockTime(MINUTES_PER_DAY - 1),
        }
    }
}

/// Hours between two clock times, wrapping past midnight when `end < start`.
pub fn duration_hours(start: ClockTime, end: ClockTime) -> f64 {
    let (s, e) = (start.minutes(), end.minutes());
    let minutes = if e < s {
        e + MINUTES_PER_DAY - s
    } else {
        e - s
    };
    f64::from(minutes) / 60.0
}
