//! Cost evaluation.
//!
//! A schedule is scored as a weighted count of five violation classes:
//!
//! 1. **Understaffing**: missing heads per (shift, position)
//! 2. **Workday preference**: assignment on a non-preferred weekday
//! 3. **Time preference**: shift not inside the preferred window
//! 4. **Daily hours**: day total above the employee's daily limit
//! 5. **Weekly hours**: week total above the employee's weekly limit
//!
//! Lower is better; a cost of zero means every requirement is met without
//! breaching any preference or limit.

mod evaluator;
mod params;
mod violation;

pub use evaluator::{evaluate, evaluate_cost, Evaluation};
pub use params::CostParams;
pub use violation::{Violation, ViolationKind, ViolationSummary};
