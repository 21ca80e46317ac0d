//! SA execution loop.

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::Result;
use crate::random::rng_from_seed;

/// Per-level record of the run, one entry per temperature level.
///
/// Entry `k` holds the temperature level `k` ran at and the current and
/// best cost once its moves were done.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceTrace {
    pub temperatures: Vec<f64>,
    pub current_costs: Vec<f64>,
    pub best_costs: Vec<f64>,
}

impl ConvergenceTrace {
    fn with_capacity(levels: usize) -> Self {
        Self {
            temperatures: Vec::with_capacity(levels),
            current_costs: Vec::with_capacity(levels),
            best_costs: Vec::with_capacity(levels),
        }
    }

    fn push(&mut self, temperature: f64, current_cost: f64, best_cost: f64) {
        self.temperatures.push(temperature);
        self.current_costs.push(current_cost);
        self.best_costs.push(best_cost);
    }

    /// Number of temperature levels recorded.
    pub fn levels(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }
}

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: f64,

    /// Cost of the starting solution.
    pub initial_cost: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    pub trace: ConvergenceTrace,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA with a generator seeded from `config.seed`.
    pub fn run<P: SaProblem>(problem: &P, config: &SaConfig) -> Result<SaResult<P::Solution>> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs SA drawing every random choice from `rng`.
    ///
    /// The draw order is fixed (construction, then per iteration the move
    /// and at most one acceptance draw), so a seeded generator reproduces
    /// the run exactly. `config.seed` is ignored.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult<P::Solution>> {
        config.validate()?;

        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;
        let initial_cost = current_cost;

        info!(
            event = "sa_start",
            initial_cost,
            initial_temp = config.initial_temp,
            min_temp = config.min_temp,
            cooling_rate = config.cooling_rate,
            iterations_per_temperature = config.iterations_per_temperature,
        );

        let mut trace = ConvergenceTrace::with_capacity(config.temperature_levels());
        let mut temperature = config.initial_temp;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while temperature > config.min_temp {
            for _ in 0..config.iterations_per_temperature {
                let neighbor = problem.neighbor(&current, rng);
                let neighbor_cost = problem.cost(&neighbor);
                let delta = neighbor_cost - current_cost;

                // Metropolis; a zero delta gives exp(0) = 1 and always passes
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    rng.random_range(0.0..1.0) < (-delta / temperature).exp()
                };

                if accept {
                    current = neighbor;
                    current_cost = neighbor_cost;
                    accepted_moves += 1;

                    if current_cost < best_cost {
                        best = current.clone();
                        best_cost = current_cost;
                        trace!(event = "new_best", best_cost, temperature);
                    }
                }

                total_iterations += 1;
            }

            trace.push(temperature, current_cost, best_cost);
            debug!(
                event = "level",
                level = trace.levels(),
                temperature,
                current_cost,
                best_cost,
            );

            temperature *= config.cooling_rate;
        }

        info!(
            event = "sa_done",
            best_cost,
            initial_cost,
            iterations = total_iterations,
            accepted_moves,
            improving_moves,
            levels = trace.levels(),
        );

        Ok(SaResult {
            best,
            best_cost,
            initial_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            trace,
        })
    }
}
