//! Uniform random construction.

use rand::seq::index::sample;
use rand::Rng;
use tracing::debug;

use crate::model::{Roster, Schedule};

/// Builds a starting schedule by sampling, for every slot, up to its
/// required count of distinct same-store, same-position employees.
///
/// Converges slower than [`build_initial_solution`](super::build_initial_solution)
/// but makes no assumptions about which demand is hard to cover.
pub fn build_random_solution<R: Rng>(roster: &Roster, rng: &mut R) -> Schedule {
    let mut schedule = roster.empty_schedule();
    for slot in 0..roster.slots().len() {
        let candidates = roster.slot_candidates(slot);
        let amount = (roster.slot(slot).required as usize).min(candidates.len());
        for i in sample(rng, candidates.len(), amount) {
            schedule.insert(slot, candidates[i]);
        }
    }
    debug!(
        event = "initial_solution",
        strategy = "random",
        shifts = roster.shift_count(),
        assignments = schedule.total_assignments(),
    );
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClockTime, Employee, Shift};
    use crate::random::create_rng;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn roster() -> Roster {
        let mut employees: Vec<Employee> = (0..6)
            .map(|i| Employee::new(format!("N{i}"), "Cashier", "North"))
            .collect();
        employees.push(Employee::new("S0", "Cashier", "South"));
        Roster::new(
            employees,
            vec![
                Shift::new(0, t("08:00"), t("12:00"), "North").with_requirement("Cashier", 3),
                Shift::new(1, t("08:00"), t("12:00"), "South").with_requirement("Cashier", 2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_counts_capped_by_candidates() {
        let r = roster();
        let s = build_random_solution(&r, &mut create_rng(3));
        assert_eq!(s.count(0), 3);
        assert_eq!(s.count(1), 1);
        assert!(s.contains(1, 6));
    }

    #[test]
    fn test_stays_in_store() {
        let r = roster();
        for seed in 0..20 {
            let s = build_random_solution(&r, &mut create_rng(seed));
            assert!(s.members(0).all(|e| r.employee(e).store == "North"));
        }
    }

    #[test]
    fn test_seed_reproducible() {
        let r = roster();
        let a = build_random_solution(&r, &mut create_rng(11));
        let b = build_random_solution(&r, &mut create_rng(11));
        assert_eq!(a, b);
    }
}
