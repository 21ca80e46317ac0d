//! Shift demand records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::time::{duration_hours, ClockTime};

/// A recurring work window at one store with per-position headcount demand.
///
/// An `end_time` earlier than `start_time` marks an overnight shift.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shift {
    /// Weekday, 0 = Monday through 6 = Sunday.
    pub day: u8,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    /// Required headcount per position, in insertion order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_positions: Vec<(String, u32)>,
    pub store: String,
}

impl Shift {
    /// Creates a shift with no staffing requirements.
    pub fn new(day: u8, start_time: ClockTime, end_time: ClockTime, store: impl Into<String>) -> Self {
        Self {
            day,
            start_time,
            end_time,
            required_positions: Vec::new(),
            store: store.into(),
        }
    }

    /// Adds a headcount requirement for a position.
    pub fn with_requirement(mut self, position: impl Into<String>, count: u32) -> Self {
        self.required_positions.push((position.into(), count));
        self
    }

    /// Required headcount for `position`, 0 when not required.
    pub fn required(&self, position: &str) -> u32 {
        self.required_positions
            .iter()
            .find(|(p, _)| p == position)
            .map_or(0, |&(_, c)| c)
    }

    /// Length of the shift in hours. See [`shift_duration_hours`].
    pub fn duration_hours(&self) -> f64 {
        shift_duration_hours(self)
    }

    pub fn is_overnight(&self) -> bool {
        self.end_time < self.start_time
    }
}

/// Length of a shift in hours, wrapping past midnight for overnight shifts.
///
/// Every hours-based calculation goes through this function.
pub fn shift_duration_hours(shift: &Shift) -> f64 {
    duration_hours(shift.start_time, shift.end_time)
}
