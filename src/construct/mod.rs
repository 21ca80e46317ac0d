//! Initial solution construction.
//!
//! The search starts from a schedule that already covers most demand:
//!
//! - [`build_initial_solution`]: scarcity-ranked greedy (default)
//! - [`build_random_solution`]: uniform random sampling per slot
//!
//! Both only ever place employees on shifts of their own store and
//! position, and both cover every input shift exactly once.

mod random;
mod scarcity;

pub use random::build_random_solution;
pub use scarcity::{
    build_initial_solution, candidate_score, position_demand, position_scarcity, position_supply,
};

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::{Roster, Schedule};

/// Which constructor seeds the search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "snake_case"))]
pub enum InitialSolution {
    /// Scarcest demand first, preference-aware candidate ranking.
    #[default]
    Scarcity,
    /// Random same-store, same-position sampling.
    Random,
}

impl InitialSolution {
    /// Builds the starting schedule. Only [`InitialSolution::Random`] draws from `rng`.
    pub fn build<R: Rng>(self, roster: &Roster, rng: &mut R) -> Schedule {
        match self {
            InitialSolution::Scarcity => build_initial_solution(roster),
            InitialSolution::Random => build_random_solution(roster, rng),
        }
    }
}
