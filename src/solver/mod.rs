//! Rostering runs.
//!
//! [`run_annealing`] validates raw employee and shift records, builds the
//! indexed [`Roster`], and anneals from the configured starting schedule.
//! [`anneal`] does the same for an already built roster. With the
//! `parallel` feature, [`run_restarts`] runs several seeded annealings on
//! rayon and keeps the best.

mod config;
mod problem;

pub use config::RosterConfig;
pub use problem::RosterProblem;

use tracing::info;

use crate::cost::{evaluate, CostParams, Violation, ViolationSummary};
use crate::error::Result;
use crate::model::{Employee, Roster, Schedule, Shift, ShiftAssignment};
use crate::random::rng_from_seed;
use crate::sa::{ConvergenceTrace, SaConfig, SaRunner};

/// Everything a collaborator needs from a finished run.
#[derive(Debug, Clone)]
pub struct AnnealingOutcome {
    /// Lowest-cost schedule seen.
    pub schedule: Schedule,
    pub best_cost: f64,
    /// Breaches of the best schedule; their penalties sum to `best_cost`.
    pub violations: Vec<Violation>,
    /// Named view of `schedule`.
    pub assignments: Vec<ShiftAssignment>,
    pub trace: ConvergenceTrace,
    pub initial_cost: f64,
    pub iterations: usize,
    pub accepted_moves: usize,
    pub improving_moves: usize,
    /// Seed the run used, if one was configured.
    pub seed: Option<u64>,
}

impl AnnealingOutcome {
    /// Violation counts per class.
    pub fn summary(&self) -> ViolationSummary {
        ViolationSummary::from_violations(&self.violations)
    }
}

/// Validates the input, then anneals.
///
/// # Errors
///
/// [`RosterError::Validation`](crate::error::RosterError::Validation) for
/// malformed records, [`RosterError::Config`](crate::error::RosterError::Config)
/// for an out-of-range `sa_config`.
pub fn run_annealing(
    employees: Vec<Employee>,
    shifts: Vec<Shift>,
    sa_config: &SaConfig,
    cost_params: &CostParams,
) -> Result<AnnealingOutcome> {
    let roster = Roster::new(employees, shifts)?;
    anneal(&roster, sa_config, cost_params)
}

/// Anneals over a validated roster.
pub fn anneal(
    roster: &Roster,
    sa_config: &SaConfig,
    cost_params: &CostParams,
) -> Result<AnnealingOutcome> {
    sa_config.validate()?;
    info!(
        event = "anneal",
        employees = roster.employee_count(),
        shifts = roster.shift_count(),
        slots = roster.slots().len(),
        seed = sa_config.seed,
    );

    let problem =
        RosterProblem::new(roster, *cost_params).with_initial_solution(sa_config.initial_solution);
    let mut rng = rng_from_seed(sa_config.seed);
    let result = SaRunner::run_with_rng(&problem, sa_config, &mut rng)?;

    let evaluation = evaluate(roster, &result.best, cost_params);
    let assignments = roster.assignments(&result.best);

    Ok(AnnealingOutcome {
        schedule: result.best,
        best_cost: result.best_cost,
        violations: evaluation.violations,
        assignments,
        trace: result.trace,
        initial_cost: result.initial_cost,
        iterations: result.iterations,
        accepted_moves: result.accepted_moves,
        improving_moves: result.improving_moves,
        seed: sa_config.seed,
    })
}

/// Runs one independent annealing per seed in parallel and keeps the
/// lowest-cost outcome. Ties go to the earliest seed in `seeds`.
#[cfg(feature = "parallel")]
pub fn run_restarts(
    roster: &Roster,
    sa_config: &SaConfig,
    cost_params: &CostParams,
    seeds: &[u64],
) -> Result<AnnealingOutcome> {
    use rayon::prelude::*;

    use crate::error::RosterError;

    sa_config.validate()?;
    if seeds.is_empty() {
        return Err(RosterError::Config("run_restarts needs at least one seed".into()));
    }

    let outcomes = seeds
        .par_iter()
        .map(|&seed| anneal(roster, &sa_config.clone().with_seed(seed), cost_params))
        .collect::<Result<Vec<_>>>()?;

    let mut best: Option<AnnealingOutcome> = None;
    for outcome in outcomes {
        if best.as_ref().is_none_or(|b| outcome.best_cost < b.best_cost) {
            best = Some(outcome);
        }
    }
    let best = best.ok_or_else(|| RosterError::Config("no restart produced an outcome".into()))?;

    info!(
        event = "restarts_done",
        restarts = seeds.len(),
        best_cost = best.best_cost,
        seed = best.seed,
    );
    Ok(best)
}
