//! The three local moves.
//!
//! Each move edits a schedule in place and reports whether its
//! preconditions held. A move that returns `false` has not touched the
//! schedule, so the caller can fall back to [`replace`] on the same copy.

use rand::Rng;

use crate::model::{Roster, Schedule, ShiftId, SlotId};

/// Removes one random worker from a random slot and adds a random eligible
/// same-store, same-position employee not yet on that shift.
///
/// Either half may be a no-op: an empty slot loses nobody, and a slot with
/// no eligible candidate stays one short.
pub fn replace<R: Rng>(roster: &Roster, schedule: &mut Schedule, rng: &mut R) {
    if roster.shift_count() == 0 {
        return;
    }
    let shift = rng.random_range(0..roster.shift_count());
    let slots = roster.slots_of(shift);
    if slots.is_empty() {
        return;
    }
    let slot = rng.random_range(slots.clone());

    let assigned = schedule.count(slot);
    if assigned > 0 {
        let k = rng.random_range(0..assigned);
        if let Some(e) = schedule.nth_member(slot, k) {
            schedule.remove(slot, e);
        }
    }

    let eligible: Vec<_> = roster
        .slot_candidates(slot)
        .iter()
        .copied()
        .filter(|&e| !schedule.contains_any(slots.clone(), e))
        .collect();
    if !eligible.is_empty() {
        let e = eligible[rng.random_range(0..eligible.len())];
        schedule.insert(slot, e);
    }
}

/// Exchanges one worker between two shifts that share a required position.
///
/// Refused when either side is empty, when a worker's store differs from
/// the other shift's store, or when the exchange would put an employee
/// into a slot they already occupy.
pub fn swap<R: Rng>(roster: &Roster, schedule: &mut Schedule, rng: &mut R) -> bool {
    let Some((a, b)) = two_shifts(roster, rng) else {
        return false;
    };

    let common: Vec<(SlotId, SlotId)> = roster
        .slots_of(a)
        .filter_map(|sa| roster.slot_for(b, roster.slot(sa).position).map(|sb| (sa, sb)))
        .collect();
    if common.is_empty() {
        return false;
    }
    let (sa, sb) = common[rng.random_range(0..common.len())];

    let (count_a, count_b) = (schedule.count(sa), schedule.count(sb));
    if count_a == 0 || count_b == 0 {
        return false;
    }
    let picked_a = schedule.nth_member(sa, rng.random_range(0..count_a));
    let picked_b = schedule.nth_member(sb, rng.random_range(0..count_b));
    let (Some(wa), Some(wb)) = (picked_a, picked_b) else {
        return false;
    };

    if roster.employee_store(wa) != roster.shift_store(b)
        || roster.employee_store(wb) != roster.shift_store(a)
    {
        return false;
    }
    if wa == wb {
        return true;
    }
    if schedule.contains(sa, wb) || schedule.contains(sb, wa) {
        return false;
    }

    schedule.remove(sa, wa);
    schedule.remove(sb, wb);
    schedule.insert(sa, wb);
    schedule.insert(sb, wa);
    true
}

/// Moves one worker from a random slot of one shift to the same position
/// of another shift.
///
/// Refused when the source slot is empty, the target shift does not
/// require the position, the worker belongs to another store, or the
/// worker is already on the target shift.
pub fn relocate<R: Rng>(roster: &Roster, schedule: &mut Schedule, rng: &mut R) -> bool {
    let Some((a, b)) = two_shifts(roster, rng) else {
        return false;
    };

    let slots = roster.slots_of(a);
    if slots.is_empty() {
        return false;
    }
    let from = rng.random_range(slots);
    let assigned = schedule.count(from);
    if assigned == 0 {
        return false;
    }
    let Some(worker) = schedule.nth_member(from, rng.random_range(0..assigned)) else {
        return false;
    };

    let Some(to) = roster.slot_for(b, roster.slot(from).position) else {
        return false;
    };
    if roster.employee_store(worker) != roster.shift_store(b)
        || schedule.contains_any(roster.slots_of(b), worker)
    {
        return false;
    }

    schedule.remove(from, worker);
    schedule.insert(to, worker);
    true
}

/// Two distinct random shifts, or `None` with fewer than two.
fn two_shifts<R: Rng>(roster: &Roster, rng: &mut R) -> Option<(ShiftId, ShiftId)> {
    let n = roster.shift_count();
    if n < 2 {
        return None;
    }
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    Some((a, b))
}
