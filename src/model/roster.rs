//! Indexed problem instance.
//!
//! [`Roster`] validates the input records once, interns positions and
//! stores into integer ids, and lays out the slot table shared by every
//! [`Schedule`] of the run.

use std::collections::HashMap;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::schedule::{EmployeeId, Schedule, SlotId};
use super::shift::shift_duration_hours;
use super::time::ClockTime;
use super::{Employee, Shift};
use crate::error::{Result, RosterError};
use crate::validation::{validate_input, ValidationError, ValidationErrorKind};

/// Index of a shift in the roster.
pub type ShiftId = usize;

/// Interned position name.
pub type PositionId = usize;

/// Interned store name.
pub type StoreId = usize;

/// One required position of one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub shift: ShiftId,
    pub position: PositionId,
    pub required: u32,
}

/// Validated employees and shifts with precomputed lookup tables.
#[derive(Debug, Clone)]
pub struct Roster {
    employees: Vec<Employee>,
    shifts: Vec<Shift>,
    positions: Vec<String>,
    stores: Vec<String>,
    employee_position: Vec<PositionId>,
    employee_store: Vec<StoreId>,
    shift_store: Vec<StoreId>,
    shift_hours: Vec<f64>,
    slots: Vec<Slot>,
    shift_slots: Vec<Range<SlotId>>,
    pools: HashMap<(StoreId, PositionId), Vec<EmployeeId>>,
}

#[derive(Default)]
struct Interner {
    names: Vec<String>,
    ids: HashMap<String, usize>,
}

impl Interner {
    fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }
}

impl Roster {
    /// Validates the records and builds the lookup tables.
    ///
    /// # Errors
    /// [`RosterError::Validation`] listing every malformed record.
    pub fn new(employees: Vec<Employee>, shifts: Vec<Shift>) -> Result<Self> {
        validate_input(&employees, &shifts).map_err(RosterError::Validation)?;

        let mut positions = Interner::default();
        let mut stores = Interner::default();

        let employee_position: Vec<PositionId> = employees
            .iter()
            .map(|e| positions.intern(&e.position))
            .collect();
        let employee_store: Vec<StoreId> =
            employees.iter().map(|e| stores.intern(&e.store)).collect();

        let mut slots = Vec::new();
        let mut shift_slots = Vec::with_capacity(shifts.len());
        let mut shift_store = Vec::with_capacity(shifts.len());
        let mut shift_hours = Vec::with_capacity(shifts.len());
        for (id, shift) in shifts.iter().enumerate() {
            let first = slots.len();
            for (position, required) in &shift.required_positions {
                slots.push(Slot {
                    shift: id,
                    position: positions.intern(position),
                    required: *required,
                });
            }
            shift_slots.push(first..slots.len());
            shift_store.push(stores.intern(&shift.store));
            shift_hours.push(shift_duration_hours(shift));
        }

        let mut pools: HashMap<(StoreId, PositionId), Vec<EmployeeId>> = HashMap::new();
        for (e, (&store, &position)) in employee_store.iter().zip(&employee_position).enumerate() {
            pools.entry((store, position)).or_default().push(e);
        }

        Ok(Self {
            employees,
            shifts,
            positions: positions.names,
            stores: stores.names,
            employee_position,
            employee_store,
            shift_store,
            shift_hours,
            slots,
            shift_slots,
            pools,
        })
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn employee(&self, id: EmployeeId) -> &Employee {
        &self.employees[id]
    }

    pub fn shift(&self, id: ShiftId) -> &Shift {
        &self.shifts[id]
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn shift_count(&self) -> usize {
        self.shifts.len()
    }

    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    pub fn position_name(&self, id: PositionId) -> &str {
        &self.positions[id]
    }

    pub fn store_name(&self, id: StoreId) -> &str {
        &self.stores[id]
    }

    pub fn employee_position(&self, id: EmployeeId) -> PositionId {
        self.employee_position[id]
    }

    pub fn employee_store(&self, id: EmployeeId) -> StoreId {
        self.employee_store[id]
    }

    pub fn shift_store(&self, id: ShiftId) -> StoreId {
        self.shift_store[id]
    }

    /// Shift length in hours, precomputed with [`shift_duration_hours`].
    pub fn shift_hours(&self, id: ShiftId) -> f64 {
        self.shift_hours[id]
    }

    /// All slots, grouped by shift in input order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id]
    }

    /// The contiguous slot ids of one shift.
    pub fn slots_of(&self, shift: ShiftId) -> Range<SlotId> {
        self.shift_slots[shift].clone()
    }

    /// Slot of `position` within `shift`, if the shift requires it.
    pub fn slot_for(&self, shift: ShiftId, position: PositionId) -> Option<SlotId> {
        self.slots_of(shift)
            .find(|&slot| self.slots[slot].position == position)
    }

    /// Employees of `position` working at `store`, in input order.
    pub fn candidates(&self, store: StoreId, position: PositionId) -> &[EmployeeId] {
        self.pools
            .get(&(store, position))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Candidates eligible for `slot`: same store as its shift, same position.
    pub fn slot_candidates(&self, slot: SlotId) -> &[EmployeeId] {
        let s = &self.slots[slot];
        self.candidates(self.shift_store[s.shift], s.position)
    }

    pub fn find_employee(&self, name: &str) -> Option<EmployeeId> {
        self.employees.iter().position(|e| e.name == name)
    }

    /// A schedule of the right dimensions with nobody assigned.
    pub fn empty_schedule(&self) -> Schedule {
        Schedule::new(self.slots.len(), self.employees.len())
    }

    /// Renders a schedule with names for export and reporting.
    pub fn assignments(&self, schedule: &Schedule) -> Vec<ShiftAssignment> {
        self.shifts
            .iter()
            .enumerate()
            .map(|(id, shift)| ShiftAssignment {
                shift: id,
                day: shift.day,
                start_time: shift.start_time,
                end_time: shift.end_time,
                store: shift.store.clone(),
                positions: self
                    .slots_of(id)
                    .map(|slot| PositionAssignment {
                        position: self.positions[self.slots[slot].position].clone(),
                        required: self.slots[slot].required,
                        employees: schedule
                            .members(slot)
                            .map(|e| self.employees[e].name.clone())
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Rebuilds a schedule from its named form.
    ///
    /// Lets collaborators score a schedule produced elsewhere.
    ///
    /// # Errors
    /// [`RosterError::Validation`] for unknown shifts, positions or employees,
    /// or for employees placed under a position they do not hold.
    pub fn schedule_from_assignments(&self, assignments: &[ShiftAssignment]) -> Result<Schedule> {
        let mut schedule = self.empty_schedule();
        let mut errors = Vec::new();
        let unknown = |message: String| ValidationError::new(ValidationErrorKind::UnknownReference, message);

        for sa in assignments {
            if sa.shift >= self.shifts.len() {
                errors.push(unknown(format!("shift #{} does not exist", sa.shift)));
                continue;
            }
            for pa in &sa.positions {
                let slot = self
                    .slots_of(sa.shift)
                    .find(|&slot| self.positions[self.slots[slot].position] == pa.position);
                let Some(slot) = slot else {
                    errors.push(unknown(format!(
                        "shift #{} does not require position '{}'",
                        sa.shift, pa.position
                    )));
                    continue;
                };
                for name in &pa.employees {
                    match self.find_employee(name) {
                        Some(e) if self.employee_position[e] == self.slots[slot].position => {
                            schedule.insert(slot, e);
                        }
                        Some(_) => errors.push(unknown(format!(
                            "employee '{name}' does not hold position '{}'",
                            pa.position
                        ))),
                        None => errors.push(unknown(format!("employee '{name}' does not exist"))),
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(schedule)
        } else {
            Err(RosterError::Validation(errors))
        }
    }
}

/// Named view of one shift's staffing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftAssignment {
    /// Index of the shift in the input list.
    pub shift: ShiftId,
    pub day: u8,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub store: String,
    pub positions: Vec<PositionAssignment>,
}

/// Employees placed under one required position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionAssignment {
    pub position: String,
    pub required: u32,
    pub employees: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn sample() -> Roster {
        let employees = vec![
            Employee::new("Ann", "Cashier", "North"),
            Employee::new("Bo", "Manager", "North"),
            Employee::new("Cy", "Cashier", "South"),
            Employee::new("Di", "Cashier", "North"),
        ];
        let shifts = vec![
            Shift::new(0, t("08:00"), t("12:00"), "North")
                .with_requirement("Manager", 1)
                .with_requirement("Cashier", 2),
            Shift::new(4, t("22:00"), t("06:00"), "South").with_requirement("Cashier", 1),
            Shift::new(6, t("10:00"), t("10:00"), "East"),
        ];
        Roster::new(employees, shifts).unwrap()
    }

    #[test]
    fn test_slot_layout() {
        let r = sample();
        assert_eq!(r.slots().len(), 3);
        assert_eq!(r.slots_of(0), 0..2);
        assert_eq!(r.slots_of(1), 2..3);
        assert_eq!(r.slots_of(2), 3..3);
        assert_eq!(r.position_name(r.slot(1).position), "Cashier");
        assert_eq!(r.slot(1).required, 2);
    }

    #[test]
    fn test_candidate_pools() {
        let r = sample();
        assert_eq!(r.slot_candidates(1), &[0, 3]);
        assert_eq!(r.slot_candidates(0), &[1]);
        assert_eq!(r.slot_candidates(2), &[2]);
        assert_eq!(r.store_name(r.shift_store(2)), "East");
    }

    #[test]
    fn test_shift_hours_wrap() {
        let r = sample();
        assert!((r.shift_hours(0) - 4.0).abs() < 1e-12);
        assert!((r.shift_hours(1) - 8.0).abs() < 1e-12);
        assert_eq!(r.shift_hours(2), 0.0);
    }

    #[test]
    fn test_rejects_invalid_input() {
        let err = Roster::new(vec![], vec![]).unwrap_err();
        assert!(matches!(err, RosterError::Validation(ref v) if v.len() == 1));
    }

    #[test]
    fn test_named_round_trip() {
        let r = sample();
        let mut s = r.empty_schedule();
        s.insert(0, 1);
        s.insert(1, 3);
        s.insert(2, 2);
        let named = r.assignments(&s);
        assert_eq!(named[0].positions[1].employees, vec!["Di".to_string()]);
        assert_eq!(named[1].positions[0].employees, vec!["Cy".to_string()]);
        assert!(named[2].positions.is_empty());
        assert_eq!(r.schedule_from_assignments(&named).unwrap(), s);
    }

    #[test]
    fn test_named_rejects_unknown() {
        let r = sample();
        let mut named = r.assignments(&r.empty_schedule());
        named[0].positions[0].employees.push("Zed".into());
        named[0].positions[1].employees.push("Bo".into());
        let err = r.schedule_from_assignments(&named).unwrap_err();
        assert!(matches!(err, RosterError::Validation(ref v) if v.len() == 1));
    }
}
