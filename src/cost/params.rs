//! Violation weights.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Penalty weights for the five violation classes.
///
/// # Examples
///
/// ```
/// use u_roster::cost::CostParams;
///
/// let params = CostParams::default()
///     .with_understaff_penalty(500)
///     .with_weekly_hours_violation(80);
/// assert_eq!(params.workday_violation, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct CostParams {
    /// Per missing head on a (shift, position).
    pub understaff_penalty: u32,
    /// Per assignment on a day outside the employee's preferred weekdays.
    pub workday_violation: u32,
    /// Per assignment not contained in the employee's preferred window.
    pub time_pref_violation: u32,
    /// Once per employee per day over the daily limit.
    pub daily_hours_violation: u32,
    /// Once per employee over the weekly limit.
    pub weekly_hours_violation: u32,
}

impl Default for CostParams {
    fn default() -> Self {
        Self {
            understaff_penalty: 100,
            workday_violation: 10,
            time_pref_violation: 5,
            daily_hours_violation: 20,
            weekly_hours_violation: 50,
        }
    }
}

impl CostParams {
    pub fn with_understaff_penalty(mut self, penalty: u32) -> Self {
        self.understaff_penalty = penalty;
        self
    }

    pub fn with_workday_violation(mut self, penalty: u32) -> Self {
        self.workday_violation = penalty;
        self
    }

    pub fn with_time_pref_violation(mut self, penalty: u32) -> Self {
        self.time_pref_violation = penalty;
        self
    }

    pub fn with_daily_hours_violation(mut self, penalty: u32) -> Self {
        self.daily_hours_violation = penalty;
        self
    }

    pub fn with_weekly_hours_violation(mut self, penalty: u32) -> Self {
        self.weekly_hours_violation = penalty;
        self
    }
}
