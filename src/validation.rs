//! Input validation for rostering problems.
//!
//! Runs before any search state exists. Detects:
//! - Empty employee or shift lists
//! - Empty or duplicate employee names, empty positions and stores
//! - Weekdays outside 0..=6 and inverted weekday ranges
//! - Inverted preference windows
//! - Non-positive or non-finite hour limits
//! - Positions listed twice in one shift
//!
//! All problems are collected so a caller sees every defect at once.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::time::LAST_DAY;
use crate::model::{Employee, Shift};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No employees or no shifts were supplied.
    EmptyInput,
    /// An employee has an empty name.
    EmptyName,
    /// Two employees share a name.
    DuplicateName,
    /// A position name is empty.
    EmptyPosition,
    /// A store name is empty.
    EmptyStore,
    /// A weekday lies outside 0..=6.
    DayOutOfRange,
    /// A weekday preference ends before it starts.
    InvalidDayRange,
    /// A clock time is malformed or a window ends before it starts.
    InvalidTime,
    /// An hour limit is zero, negative or not finite.
    InvalidHourLimit,
    /// A shift lists the same position twice.
    DuplicateRequirement,
    /// A named schedule refers to an unknown shift, position or employee.
    UnknownReference,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates employee and shift records.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(employees: &[Employee], shifts: &[Shift]) -> ValidationResult {
    let mut errors = Vec::new();

    if shifts.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "no shifts supplied",
        ));
    }

    let mut names = HashSet::new();
    for (i, e) in employees.iter().enumerate() {
        check_employee(i, e, &mut errors);
        if !e.name.is_empty() && !names.insert(e.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("duplicate employee name: {}", e.name),
            ));
        }
    }

    for (i, s) in shifts.iter().enumerate() {
        check_shift(i, s, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_employee(index: usize, e: &Employee, errors: &mut Vec<ValidationError>) {
    let label = if e.name.is_empty() {
        format!("employee #{index}")
    } else {
        format!("employee '{}'", e.name)
    };

    if e.name.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyName,
            format!("{label} has an empty name"),
        ));
    }
    if e.position.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyPosition,
            format!("{label} has an empty position"),
        ));
    }
    if e.store.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyStore,
            format!("{label} has an empty store"),
        ));
    }

    let days = e.workday_pref;
    if days.start > LAST_DAY || days.end > LAST_DAY {
        errors.push(ValidationError::new(
            ValidationErrorKind::DayOutOfRange,
            format!("{label} workday preference {}-{} is outside 0..=6", days.start, days.end),
        ));
    } else if days.start > days.end {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDayRange,
            format!("{label} workday preference starts on {} after ending on {}", days.start, days.end),
        ));
    }

    if !e.time_pref.is_valid() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTime,
            format!(
                "{label} time preference {}-{} ends before it starts",
                e.time_pref.start, e.time_pref.end
            ),
        ));
    }

    for (what, hours) in [
        ("max_daily_hours", e.max_daily_hours),
        ("max_weekly_hours", e.max_weekly_hours),
    ] {
        if !hours.is_finite() || hours <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHourLimit,
                format!("{label} {what} must be positive, got {hours}"),
            ));
        }
    }
}

fn check_shift(index: usize, s: &Shift, errors: &mut Vec<ValidationError>) {
    if s.day > LAST_DAY {
        errors.push(ValidationError::new(
            ValidationErrorKind::DayOutOfRange,
            format!("shift #{index} day {} is not in 0..=6", s.day),
        ));
    }
    if s.store.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyStore,
            format!("shift #{index} has an empty store"),
        ));
    }

    let mut seen = HashSet::new();
    for (position, _) in &s.required_positions {
        if position.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyPosition,
                format!("shift #{index} requires an unnamed position"),
            ));
        } else if !seen.insert(position.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateRequirement,
                format!("shift #{index} lists position '{position}' more than once"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClockTime, TimeWindow};

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn cashier(name: &str) -> Employee {
        Employee::new(name, "Cashier", "North")
    }

    fn morning() -> Shift {
        Shift::new(0, t("08:00"), t("12:00"), "North").with_requirement("Cashier", 1)
    }

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&[cashier("Ann"), cashier("Bo")], &[morning()]).is_ok());
    }

    #[test]
    fn test_empty_lists() {
        let k = kinds(validate_input(&[], &[]));
        assert_eq!(k, vec![ValidationErrorKind::EmptyInput]);
    }

    #[test]
    fn test_no_employees_is_valid() {
        assert!(validate_input(&[], &[morning()]).is_ok());
    }

    #[test]
    fn test_duplicate_name() {
        let k = kinds(validate_input(&[cashier("Ann"), cashier("Ann")], &[morning()]));
        assert_eq!(k, vec![ValidationErrorKind::DuplicateName]);
    }

    #[test]
    fn test_bad_employee_fields_all_reported() {
        let bad = Employee::new("", "", "")
            .with_workdays(5, 2)
            .with_time_pref(TimeWindow::new(t("18:00"), t("09:00")))
            .with_max_daily_hours(0.0)
            .with_max_weekly_hours(f64::NAN);
        let k = kinds(validate_input(&[bad], &[morning()]));
        assert!(k.contains(&ValidationErrorKind::EmptyName));
        assert!(k.contains(&ValidationErrorKind::EmptyPosition));
        assert!(k.contains(&ValidationErrorKind::EmptyStore));
        assert!(k.contains(&ValidationErrorKind::InvalidDayRange));
        assert!(k.contains(&ValidationErrorKind::InvalidTime));
        assert_eq!(
            k.iter()
                .filter(|&&x| x == ValidationErrorKind::InvalidHourLimit)
                .count(),
            2
        );
    }

    #[test]
    fn test_workday_out_of_range() {
        let k = kinds(validate_input(&[cashier("Ann").with_workdays(0, 7)], &[morning()]));
        assert_eq!(k, vec![ValidationErrorKind::DayOutOfRange]);
    }

    #[test]
    fn test_bad_shift() {
        let shift = Shift::new(9, t("08:00"), t("12:00"), " ")
            .with_requirement("Cashier", 1)
            .with_requirement("Cashier", 2)
            .with_requirement("", 1);
        let k = kinds(validate_input(&[cashier("Ann")], &[shift]));
        assert!(k.contains(&ValidationErrorKind::DayOutOfRange));
        assert!(k.contains(&ValidationErrorKind::EmptyStore));
        assert!(k.contains(&ValidationErrorKind::DuplicateRequirement));
        assert!(k.contains(&ValidationErrorKind::EmptyPosition));
    }

    #[test]
    fn test_zero_requirement_is_valid() {
        let shift = Shift::new(0, t("08:00"), t("08:00"), "North").with_requirement("Cashier", 0);
        assert!(validate_input(&[cashier("Ann")], &[shift]).is_ok());
    }
}
