//! Binds a roster to the generic annealing runner.

use rand::Rng;

use crate::construct::InitialSolution;
use crate::cost::{evaluate_cost, CostParams};
use crate::model::{Roster, Schedule};
use crate::neighborhood::perturb;
use crate::sa::SaProblem;

/// A roster plus the weights it is scored with.
#[derive(Debug, Clone)]
pub struct RosterProblem<'a> {
    roster: &'a Roster,
    cost_params: CostParams,
    initial: InitialSolution,
}

impl<'a> RosterProblem<'a> {
    pub fn new(roster: &'a Roster, cost_params: CostParams) -> Self {
        Self {
            roster,
            cost_params,
            initial: InitialSolution::default(),
        }
    }

    pub fn with_initial_solution(mut self, initial: InitialSolution) -> Self {
        self.initial = initial;
        self
    }

    pub fn roster(&self) -> &'a Roster {
        self.roster
    }

    pub fn cost_params(&self) -> &CostParams {
        &self.cost_params
    }
}

impl SaProblem for RosterProblem<'_> {
    type Solution = Schedule;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Schedule {
        self.initial.build(self.roster, rng)
    }

    fn cost(&self, schedule: &Schedule) -> f64 {
        evaluate_cost(self.roster, schedule, &self.cost_params)
    }

    fn neighbor<R: Rng>(&self, schedule: &Schedule, rng: &mut R) -> Schedule {
        perturb(self.roster, schedule, rng)
    }
}
