//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases as the temperature cools geometrically, allowing the search
//! to escape local optima.
//!
//! The runner is generic over [`SaProblem`]; the rostering binding lives
//! in [`crate::solver`].
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;
mod types;

pub use config::SaConfig;
pub use runner::{ConvergenceTrace, SaResult, SaRunner};
pub use types::SaProblem;
