//! Multi-store employee shift rostering.
//!
//! Assigns employees to the staffed positions of weekly shifts across
//! several stores, minimizing a weighted sum of constraint violations:
//!
//! - **Understaffing**: a shift's required headcount for a position is not met
//! - **Workday preference**: an employee works outside their preferred weekdays
//! - **Time preference**: a shift falls outside the employee's preferred window
//! - **Daily / weekly hours**: an employee exceeds their hour limits
//!
//! Employees only ever work shifts of their own store in their own
//! position. The search starts from a scarcity-ranked greedy schedule
//! ([`construct`]) and improves it with Simulated Annealing ([`sa`]) over
//! replace, swap and move perturbations ([`neighborhood`]).
//!
//! # Example
//!
//! ```
//! use u_roster::cost::CostParams;
//! use u_roster::model::{Employee, Shift};
//! use u_roster::sa::SaConfig;
//! use u_roster::solver::run_annealing;
//!
//! let employees = vec![
//!     Employee::new("Ana", "Cashier", "North").with_workdays(0, 4),
//!     Employee::new("Ben", "Cashier", "North"),
//! ];
//! let shifts = vec![
//!     Shift::new(0, "09:00".parse()?, "17:00".parse()?, "North").with_requirement("Cashier", 1),
//!     Shift::new(5, "09:00".parse()?, "17:00".parse()?, "North").with_requirement("Cashier", 1),
//! ];
//!
//! let config = SaConfig::default().with_seed(42).with_min_temp(1.0);
//! let outcome = run_annealing(employees, shifts, &config, &CostParams::default())?;
//! assert_eq!(outcome.best_cost, 0.0);
//! # Ok::<(), u_roster::error::RosterError>(())
//! ```
//!
//! # Features
//!
//! - `serde`: serialization of inputs and outputs, TOML run configuration
//! - `parallel`: independent seeded restarts on rayon

pub mod construct;
pub mod cost;
pub mod error;
pub mod model;
pub mod neighborhood;
pub mod random;
pub mod sa;
pub mod solver;
pub mod validation;

pub use construct::build_initial_solution;
pub use cost::{evaluate, CostParams, Violation, ViolationKind};
pub use error::{Result, RosterError};
pub use model::{Employee, Roster, Schedule, Shift, ShiftAssignment};
pub use neighborhood::perturb;
pub use sa::{ConvergenceTrace, SaConfig};
pub use solver::{run_annealing, AnnealingOutcome, RosterConfig};
