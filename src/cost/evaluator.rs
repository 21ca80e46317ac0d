//! Schedule scoring.
//!
//! One pass over the slots scores understaffing and the two preference
//! classes while accumulating per-employee hours; one pass over the hour
//! tables then scores the daily and weekly limits. Cost is linear in the
//! number of assignments plus a 7-entry row per employee.

use tracing::trace;

use super::params::CostParams;
use super::violation::{Violation, ViolationKind};
use crate::model::time::LAST_DAY;
use crate::model::{Roster, Schedule};

const DAYS: usize = LAST_DAY as usize + 1;

/// Cost of a schedule together with the breaches behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Weighted violation total. Never negative.
    pub cost: f64,
    pub violations: Vec<Violation>,
}

/// Scores `schedule` and lists every violation.
///
/// Pure and deterministic. The penalties of the returned violations sum
/// to `cost`.
///
/// `schedule` must be laid out for `roster`, i.e. come from
/// [`Roster::empty_schedule`] or a builder run on the same roster.
/// A schedule of other dimensions panics.
pub fn evaluate(roster: &Roster, schedule: &Schedule, params: &CostParams) -> Evaluation {
    let mut violations = Vec::new();
    let cost = score(roster, schedule, params, Some(&mut violations));
    trace!(
        event = "evaluate",
        cost,
        violations = violations.len(),
    );
    Evaluation { cost, violations }
}

/// Scores `schedule` without collecting violations. Always equal to
/// `evaluate(..).cost`. Same layout requirement as [`evaluate`].
pub fn evaluate_cost(roster: &Roster, schedule: &Schedule, params: &CostParams) -> f64 {
    score(roster, schedule, params, None)
}

fn score(
    roster: &Roster,
    schedule: &Schedule,
    params: &CostParams,
    mut sink: Option<&mut Vec<Violation>>,
) -> f64 {
    debug_assert_eq!(schedule.slot_count(), roster.slots().len());
    debug_assert_eq!(schedule.employee_count(), roster.employee_count());

    let understaff = f64::from(params.understaff_penalty);
    let workday = f64::from(params.workday_violation);
    let time_pref = f64::from(params.time_pref_violation);
    let daily = f64::from(params.daily_hours_violation);
    let weekly = f64::from(params.weekly_hours_violation);

    let n = roster.employee_count();
    let mut weekly_hours = vec![0.0f64; n];
    let mut daily_hours = vec![[0.0f64; DAYS]; n];
    let mut cost = 0.0;

    let mut record = |v: Violation, cost: &mut f64| {
        *cost += v.penalty;
        if let Some(list) = sink.as_deref_mut() {
            list.push(v);
        }
    };

    for (slot_id, slot) in roster.slots().iter().enumerate() {
        let shift = roster.shift(slot.shift);
        let hours = roster.shift_hours(slot.shift);
        let day = usize::from(shift.day);

        let assigned = schedule.count(slot_id);
        let missing = (slot.required as usize).saturating_sub(assigned) as u32;
        if missing > 0 {
            record(
                Violation::understaffing(slot.shift, slot.position, missing, understaff * f64::from(missing)),
                &mut cost,
            );
        }

        for e in schedule.members(slot_id) {
            let employee = roster.employee(e);
            if !employee.workday_pref.contains(shift.day) {
                record(
                    Violation::preference(
                        ViolationKind::WorkdayPreference,
                        e,
                        slot.shift,
                        slot.position,
                        shift.day,
                        workday,
                    ),
                    &mut cost,
                );
            }
            if !employee.time_pref.covers(shift.start_time, shift.end_time) {
                record(
                    Violation::preference(
                        ViolationKind::TimePreference,
                        e,
                        slot.shift,
                        slot.position,
                        shift.day,
                        time_pref,
                    ),
                    &mut cost,
                );
            }
            weekly_hours[e] += hours;
            daily_hours[e][day] += hours;
        }
    }

    for (e, employee) in roster.employees().iter().enumerate() {
        for (day, &hours) in daily_hours[e].iter().enumerate() {
            if hours > employee.max_daily_hours {
                record(
                    Violation::hours(
                        ViolationKind::DailyHours,
                        e,
                        Some(day as u8),
                        hours - employee.max_daily_hours,
                        daily,
                    ),
                    &mut cost,
                );
            }
        }
        if weekly_hours[e] > employee.max_weekly_hours {
            record(
                Violation::hours(
                    ViolationKind::WeeklyHours,
                    e,
                    None,
                    weekly_hours[e] - employee.max_weekly_hours,
                    weekly,
                ),
                &mut cost,
            );
        }
    }

    cost
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::ViolationSummary;
    use crate::model::{ClockTime, Employee, Shift, TimeWindow};

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn roster(employees: Vec<Employee>, shifts: Vec<Shift>) -> Roster {
        Roster::new(employees, shifts).unwrap()
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_foreign_schedule_layout_panics() {
        let r = roster(
            vec![Employee::new("Ann", "Cashier", "North")],
            vec![Shift::new(0, t("09:00"), t("17:00"), "North").with_requirement("Cashier", 1)],
        );
        evaluate(&r, &Schedule::new(3, 1), &CostParams::default());
    }

    #[test]
    fn test_no_employees_all_understaffed() {
        let r = roster(
            vec![],
            vec![Shift::new(0, t("09:00"), t("17:00"), "North")
                .with_requirement("Cashier", 2)
                .with_requirement("Lead", 1)],
        );
        let e = evaluate(&r, &r.empty_schedule(), &CostParams::default());
        assert_eq!(e.cost, 300.0);
        assert_eq!(e.violations.len(), 2);
    }

    #[test]
    fn test_understaffing_exact() {
        let r = roster(
            vec![Employee::new("Ann", "Cashier", "North")],
            vec![Shift::new(0, t("09:00"), t("17:00"), "North").with_requirement("Cashier", 3)],
        );
        let mut s = r.empty_schedule();
        s.insert(0, 0);
        let params = CostParams::default().with_understaff_penalty(100);
        let eval = evaluate(&r, &s, &params);
        assert_eq!(eval.cost, 200.0);
        assert_eq!(eval.violations.len(), 1);
        assert_eq!(eval.violations[0].kind, ViolationKind::Understaffing);
        assert_eq!(eval.violations[0].magnitude, 2.0);
    }

    #[test]
    fn test_workday_violation_once_per_assignment() {
        let r = roster(
            vec![Employee::new("Ann", "Cashier", "North").with_workdays(0, 3)],
            vec![
                Shift::new(5, t("09:00"), t("12:00"), "North").with_requirement("Cashier", 1),
                Shift::new(5, t("13:00"), t("16:00"), "North").with_requirement("Cashier", 1),
                Shift::new(2, t("09:00"), t("12:00"), "North").with_requirement("Cashier", 1),
            ],
        );
        let mut s = r.empty_schedule();
        s.insert(0, 0);
        s.insert(1, 0);
        s.insert(2, 0);
        let eval = evaluate(&r, &s, &CostParams::default());
        let summary = ViolationSummary::from_violations(&eval.violations);
        assert_eq!(summary.workday_preference, 2);
        assert_eq!(summary.total(), 2);
        assert_eq!(eval.cost, 20.0);
    }

    #[test]
    fn test_time_preference_containment() {
        let r = roster(
            vec![Employee::new("Ann", "Cashier", "North")
                .with_time_pref(TimeWindow::new(t("08:00"), t("17:00")))],
            vec![
                Shift::new(0, t("08:00"), t("17:00"), "North").with_requirement("Cashier", 1),
                Shift::new(1, t("07:00"), t("12:00"), "North").with_requirement("Cashier", 1),
                Shift::new(2, t("12:00"), t("18:00"), "North").with_requirement("Cashier", 1),
            ],
        );
        let mut s = r.empty_schedule();
        for slot in 0..3 {
            s.insert(slot, 0);
        }
        let eval = evaluate(&r, &s, &CostParams::default());
        let shifts: Vec<_> = eval.violations.iter().map(|v| v.shift).collect();
        assert_eq!(shifts, vec![Some(1), Some(2)]);
        assert_eq!(eval.cost, 10.0);
    }

    #[test]
    fn test_daily_hours_once_per_day() {
        let r = roster(
            vec![Employee::new("Ann", "Cashier", "North").with_max_daily_hours(8.0)],
            vec![
                Shift::new(0, t("06:00"), t("12:00"), "North").with_requirement("Cashier", 1),
                Shift::new(0, t("12:00"), t("18:00"), "North").with_requirement("Cashier", 1),
                Shift::new(0, t("18:00"), t("23:00"), "North").with_requirement("Cashier", 1),
                Shift::new(1, t("08:00"), t("12:00"), "North").with_requirement("Cashier", 1),
            ],
        );
        let mut s = r.empty_schedule();
        for slot in 0..4 {
            s.insert(slot, 0);
        }
        let eval = evaluate(&r, &s, &CostParams::default());
        assert_eq!(eval.violations.len(), 1);
        let v = &eval.violations[0];
        assert_eq!(v.kind, ViolationKind::DailyHours);
        assert_eq!(v.day, Some(0));
        assert!((v.magnitude - 9.0).abs() < 1e-9);
        assert_eq!(eval.cost, 20.0);
    }

    #[test]
    fn test_weekly_hours_once() {
        let shifts = (0..5)
            .map(|d| Shift::new(d, t("08:00"), t("18:00"), "North").with_requirement("Cashier", 1))
            .collect();
        let r = roster(
            vec![Employee::new("Ann", "Cashier", "North").with_max_weekly_hours(40.0)],
            shifts,
        );
        let mut s = r.empty_schedule();
        for slot in 0..5 {
            s.insert(slot, 0);
        }
        let eval = evaluate(&r, &s, &CostParams::default());
        assert_eq!(eval.violations.len(), 1);
        assert_eq!(eval.violations[0].kind, ViolationKind::WeeklyHours);
        assert!((eval.violations[0].magnitude - 10.0).abs() < 1e-9);
        assert_eq!(eval.cost, 50.0);
    }

    #[test]
    fn test_overnight_hours_use_wrap() {
        let r = roster(
            vec![Employee::new("Ann", "Stock", "South").with_max_daily_hours(7.0)],
            vec![Shift::new(4, t("22:00"), t("06:00"), "South").with_requirement("Stock", 1)],
        );
        let mut s = r.empty_schedule();
        s.insert(0, 0);
        let eval = evaluate(&r, &s, &CostParams::default());
        let daily: Vec<_> = eval
            .violations
            .iter()
            .filter(|v| v.kind == ViolationKind::DailyHours)
            .collect();
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].day, Some(4));
        assert!((daily[0].magnitude - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_length_and_zero_requirement_cost_nothing() {
        let r = roster(
            vec![Employee::new("Ann", "Cashier", "North")],
            vec![
                Shift::new(0, t("10:00"), t("10:00"), "North").with_requirement("Cashier", 0),
                Shift::new(1, t("10:00"), t("12:00"), "North"),
            ],
        );
        let eval = evaluate(&r, &r.empty_schedule(), &CostParams::default());
        assert_eq!(eval.cost, 0.0);
        assert!(eval.violations.is_empty());
    }

    #[test]
    fn test_deterministic_and_consistent() {
        let r = roster(
            vec![
                Employee::new("Ann", "Cashier", "North").with_workdays(0, 2),
                Employee::new("Bo", "Cashier", "North").with_max_weekly_hours(4.0),
            ],
            vec![
                Shift::new(4, t("09:00"), t("17:00"), "North").with_requirement("Cashier", 3),
                Shift::new(0, t("22:00"), t("06:00"), "North").with_requirement("Cashier", 1),
            ],
        );
        let mut s = r.empty_schedule();
        s.insert(0, 0);
        s.insert(0, 1);
        s.insert(1, 1);
        let params = CostParams::default();
        let a = evaluate(&r, &s, &params);
        let b = evaluate(&r, &s, &params);
        assert_eq!(a, b);
        assert_eq!(evaluate_cost(&r, &s, &params), a.cost);
        let penalties: f64 = a.violations.iter().map(|v| v.penalty).sum();
        assert!((penalties - a.cost).abs() < 1e-9);
    }
}
