//! Employee records.
//!
//! An employee holds exactly one position at one store, together with
//! their availability preferences and working-hour limits.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::time::{DayRange, TimeWindow};

/// A member of staff who can be placed on shifts.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Employee {
    /// Unique name.
    pub name: String,
    /// Job role (e.g. "Cashier", "Store Manager").
    pub position: String,
    /// Store the employee works at.
    pub store: String,
    /// Preferred weekdays, inclusive.
    #[cfg_attr(feature = "serde", serde(default))]
    pub workday_pref: DayRange,
    /// Preferred clock-time window, inclusive.
    #[cfg_attr(feature = "serde", serde(default))]
    pub time_pref: TimeWindow,
    /// Hours allowed on any single day.
    #[cfg_attr(feature = "serde", serde(default = "default_daily_hours"))]
    pub max_daily_hours: f64,
    /// Hours allowed across the whole week.
    #[cfg_attr(feature = "serde", serde(default = "default_weekly_hours"))]
    pub max_weekly_hours: f64,
}

/// Default daily limit: no limit in practice.
pub const DEFAULT_MAX_DAILY_HOURS: f64 = 24.0;

/// Default weekly limit: every hour of the week.
pub const DEFAULT_MAX_WEEKLY_HOURS: f64 = 168.0;

#[cfg(feature = "serde")]
fn default_daily_hours() -> f64 {
    DEFAULT_MAX_DAILY_HOURS
}

#[cfg(feature = "serde")]
fn default_weekly_hours() -> f64 {
    DEFAULT_MAX_WEEKLY_HOURS
}

impl Employee {
    /// Creates an employee available all week, all day, without effective hour limits.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        store: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            store: store.into(),
            workday_pref: DayRange::default(),
            time_pref: TimeWindow::default(),
            max_daily_hours: DEFAULT_MAX_DAILY_HOURS,
            max_weekly_hours: DEFAULT_MAX_WEEKLY_HOURS,
        }
    }

    /// Sets the preferred weekdays (0 = Monday).
    pub fn with_workdays(mut self, start: u8, end: u8) -> Self {
        self.workday_pref = DayRange::new(start, end);
        self
    }

    /// Sets the preferred time window.
    pub fn with_time_pref(mut self, window: TimeWindow) -> Self {
        self.time_pref = window;
        self
    }

    pub fn with_max_daily_hours(mut self, hours: f64) -> Self {
        self.max_daily_hours = hours;
        self
    }

    pub fn with_max_weekly_hours(mut self, hours: f64) -> Self {
        self.max_weekly_hours = hours;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClockTime;

    #[test]
    fn test_defaults() {
        let e = Employee::new("Ann", "Cashier", "North");
        assert_eq!(e.workday_pref, DayRange::new(0, 6));
        assert_eq!(e.time_pref.start, ClockTime::MIDNIGHT);
        assert_eq!(e.time_pref.end.to_string(), "23:59");
        assert_eq!(e.max_daily_hours, 24.0);
        assert_eq!(e.max_weekly_hours, 168.0);
    }

    #[test]
    fn test_builders() {
        let window = TimeWindow::new("09:00".parse().unwrap(), "18:00".parse().unwrap());
        let e = Employee::new("Bo", "Manager", "South")
            .with_workdays(0, 4)
            .with_time_pref(window)
            .with_max_daily_hours(10.0)
            .with_max_weekly_hours(45.0);
        assert_eq!(e.workday_pref, DayRange::new(0, 4));
        assert_eq!(e.time_pref, window);
        assert_eq!(e.max_daily_hours, 10.0);
        assert_eq!(e.max_weekly_hours, 45.0);
    }
}
