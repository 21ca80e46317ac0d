//! Rostering domain model.
//!
//! - [`Employee`], [`Shift`]: immutable input facts
//! - [`Roster`]: the validated, indexed problem instance
//! - [`Schedule`]: the mutable search state, a flat slot-by-employee matrix
//! - [`ShiftAssignment`]: named view of a schedule for collaborators

mod employee;
mod roster;
mod schedule;
mod shift;
pub mod time;

pub use employee::{Employee, DEFAULT_MAX_DAILY_HOURS, DEFAULT_MAX_WEEKLY_HOURS};
pub use roster::{PositionAssignment, PositionId, Roster, ShiftAssignment, ShiftId, Slot, StoreId};
pub use schedule::{EmployeeId, Members, Schedule, SlotId};
pub use shift::{shift_duration_hours, Shift};
pub use time::{duration_hours, ClockTime, DayRange, TimeWindow};
