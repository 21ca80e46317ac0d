//! Scarcity-ranked greedy construction.

use tracing::{debug, trace};

use crate::model::time::LAST_DAY;
use crate::model::{EmployeeId, Roster, Schedule, ShiftId, SlotId};

const DAYS: usize = LAST_DAY as usize + 1;

/// Total required headcount per position across all shifts.
pub fn position_demand(roster: &Roster) -> Vec<u64> {
    let mut demand = vec![0u64; roster.position_count()];
    for slot in roster.slots() {
        demand[slot.position] += u64::from(slot.required);
    }
    demand
}

/// Number of employees holding each position, across all stores.
pub fn position_supply(roster: &Roster) -> Vec<usize> {
    let mut supply = vec![0usize; roster.position_count()];
    for e in 0..roster.employee_count() {
        supply[roster.employee_position(e)] += 1;
    }
    supply
}

/// `supply / demand` per position. Lower is scarcer.
///
/// Demanded positions nobody holds score 0; positions with no demand score
/// `+inf`.
pub fn position_scarcity(roster: &Roster) -> Vec<f64> {
    position_demand(roster)
        .into_iter()
        .zip(position_supply(roster))
        .map(|(demand, supply)| {
            if demand == 0 {
                f64::INFINITY
            } else {
                supply as f64 / demand as f64
            }
        })
        .collect()
}

/// Desirability of placing a candidate on a shift. Higher is better.
///
/// `3*workday_match + 2*time_match + 1/(1+hours) - 5*already_working_that_day`
pub fn candidate_score(
    workday_match: bool,
    time_match: bool,
    hours_assigned: f64,
    works_that_day: bool,
) -> f64 {
    let flag = |b: bool| f64::from(u8::from(b));
    3.0 * flag(workday_match) + 2.0 * flag(time_match) + 1.0 / (1.0 + hours_assigned)
        - 5.0 * flag(works_that_day)
}

/// Builds a starting schedule by filling the scarcest demand first.
///
/// Shifts are visited by the scarcity of their scarcest required position,
/// and within a shift positions are filled scarcest first. Each slot takes
/// the best-scoring same-store, same-position candidates given the load
/// already placed; ties keep input order. Slots with too few candidates are
/// left short for the evaluator to penalize.
pub fn build_initial_solution(roster: &Roster) -> Schedule {
    let scarcity = position_scarcity(roster);
    let slot_scarcity = |slot: SlotId| scarcity[roster.slot(slot).position];

    let shift_keys: Vec<f64> = (0..roster.shift_count())
        .map(|shift| {
            roster
                .slots_of(shift)
                .map(slot_scarcity)
                .fold(f64::INFINITY, f64::min)
        })
        .collect();
    let mut order: Vec<ShiftId> = (0..roster.shift_count()).collect();
    order.sort_by(|&a, &b| shift_keys[a].total_cmp(&shift_keys[b]));

    let mut schedule = roster.empty_schedule();
    let mut hours = vec![0.0f64; roster.employee_count()];
    let mut worked = vec![[false; DAYS]; roster.employee_count()];

    for shift_id in order {
        let shift = roster.shift(shift_id);
        let day = usize::from(shift.day);
        let duration = roster.shift_hours(shift_id);

        let mut slots: Vec<SlotId> = roster.slots_of(shift_id).collect();
        slots.sort_by(|&a, &b| slot_scarcity(a).total_cmp(&slot_scarcity(b)));

        for slot in slots {
            let required = roster.slot(slot).required as usize;
            if required == 0 {
                continue;
            }

            let mut ranked: Vec<(f64, EmployeeId)> = roster
                .slot_candidates(slot)
                .iter()
                .map(|&e| {
                    let employee = roster.employee(e);
                    let score = candidate_score(
                        employee.workday_pref.contains(shift.day),
                        employee.time_pref.covers(shift.start_time, shift.end_time),
                        hours[e],
                        worked[e][day],
                    );
                    (score, e)
                })
                .collect();
            ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

            for &(score, e) in ranked.iter().take(required) {
                schedule.insert(slot, e);
                hours[e] += duration;
                worked[e][day] = true;
                trace!(event = "place", shift = shift_id, slot, employee = e, score);
            }

            if ranked.len() < required {
                debug!(
                    event = "short_slot",
                    shift = shift_id,
                    position = roster.position_name(roster.slot(slot).position),
                    required,
                    available = ranked.len(),
                );
            }
        }
    }

    debug!(
        event = "initial_solution",
        strategy = "scarcity",
        shifts = roster.shift_count(),
        assignments = schedule.total_assignments(),
    );
    schedule
}
