//! Structured violation records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::{EmployeeId, PositionId, ShiftId};

/// The five violation classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ViolationKind {
    Understaffing,
    WorkdayPreference,
    TimePreference,
    DailyHours,
    WeeklyHours,
}

impl ViolationKind {
    pub const ALL: [ViolationKind; 5] = [
        ViolationKind::Understaffing,
        ViolationKind::WorkdayPreference,
        ViolationKind::TimePreference,
        ViolationKind::DailyHours,
        ViolationKind::WeeklyHours,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViolationKind::Understaffing => "understaffing",
            ViolationKind::WorkdayPreference => "workday_preference",
            ViolationKind::TimePreference => "time_preference",
            ViolationKind::DailyHours => "daily_hours",
            ViolationKind::WeeklyHours => "weekly_hours",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scored constraint breach.
///
/// `magnitude` is the missing headcount for understaffing, 1 for a
/// preference breach, and the excess hours for the hour limits.
/// `penalty` is what the breach added to the cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Violation {
    pub kind: ViolationKind,
    pub employee: Option<EmployeeId>,
    pub shift: Option<ShiftId>,
    pub position: Option<PositionId>,
    pub day: Option<u8>,
    pub magnitude: f64,
    pub penalty: f64,
}

impl Violation {
    pub(crate) fn understaffing(shift: ShiftId, position: PositionId, missing: u32, penalty: f64) -> Self {
        Self {
            kind: ViolationKind::Understaffing,
            employee: None,
            shift: Some(shift),
            position: Some(position),
            day: None,
            magnitude: f64::from(missing),
            penalty,
        }
    }

    pub(crate) fn preference(
        kind: ViolationKind,
        employee: EmployeeId,
        shift: ShiftId,
        position: PositionId,
        day: u8,
        penalty: f64,
    ) -> Self {
        Self {
            kind,
            employee: Some(employee),
            shift: Some(shift),
            position: Some(position),
            day: Some(day),
            magnitude: 1.0,
            penalty,
        }
    }

    pub(crate) fn hours(kind: ViolationKind, employee: EmployeeId, day: Option<u8>, excess: f64, penalty: f64) -> Self {
        Self {
            kind,
            employee: Some(employee),
            shift: None,
            position: None,
            day,
            magnitude: excess,
            penalty,
        }
    }
}

/// Violation counts per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViolationSummary {
    pub understaffing: usize,
    pub workday_preference: usize,
    pub time_preference: usize,
    pub daily_hours: usize,
    pub weekly_hours: usize,
}

impl ViolationSummary {
    pub fn from_violations(violations: &[Violation]) -> Self {
        let mut summary = Self::default();
        for v in violations {
            *summary.slot_mut(v.kind) += 1;
        }
        summary
    }

    fn slot_mut(&mut self, kind: ViolationKind) -> &mut usize {
        match kind {
            ViolationKind::Understaffing => &mut self.understaffing,
            ViolationKind::WorkdayPreference => &mut self.workday_preference,
            ViolationKind::TimePreference => &mut self.time_preference,
            ViolationKind::DailyHours => &mut self.daily_hours,
            ViolationKind::WeeklyHours => &mut self.weekly_hours,
        }
    }

    pub fn count(&self, kind: ViolationKind) -> usize {
        match kind {
            ViolationKind::Understaffing => self.understaffing,
            ViolationKind::WorkdayPreference => self.workday_preference,
            ViolationKind::TimePreference => self.time_preference,
            ViolationKind::DailyHours => self.daily_hours,
            ViolationKind::WeeklyHours => self.weekly_hours,
        }
    }

    pub fn total(&self) -> usize {
        ViolationKind::ALL.iter().map(|&k| self.count(k)).sum()
    }
}
