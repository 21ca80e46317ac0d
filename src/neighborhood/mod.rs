//! Neighborhood generation.
//!
//! [`perturb`] picks one of three moves uniformly at random and applies it
//! to a fresh copy of the schedule:
//!
//! - **Replace**: drop a random worker from a random slot and add an
//!   eligible replacement
//! - **Swap**: exchange workers of the same position between two shifts
//! - **Move**: shift a worker to the same position of another shift
//!
//! Swap and Move fall back to Replace when their preconditions fail. Every
//! move keeps employees within their own store and position.

mod moves;

pub use moves::{relocate, replace, swap};

use std::fmt;

use rand::Rng;
use tracing::trace;

use crate::model::{Roster, Schedule};

/// The kind of local change applied to a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Swap,
    Replace,
    Move,
}

impl MoveKind {
    pub const ALL: [MoveKind; 3] = [MoveKind::Swap, MoveKind::Replace, MoveKind::Move];

    /// Uniformly random move kind.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MoveKind::Swap => "swap",
            MoveKind::Replace => "replace",
            MoveKind::Move => "move",
        })
    }
}

/// Returns a perturbed copy of `schedule`. The input is never modified.
pub fn perturb<R: Rng>(roster: &Roster, schedule: &Schedule, rng: &mut R) -> Schedule {
    let kind = MoveKind::random(rng);
    apply_move(roster, schedule, kind, rng).0
}

/// Applies `kind` to a copy of `schedule`, falling back to Replace when
/// its preconditions fail.
///
/// Returns the new schedule and the move actually applied.
pub fn apply_move<R: Rng>(
    roster: &Roster,
    schedule: &Schedule,
    kind: MoveKind,
    rng: &mut R,
) -> (Schedule, MoveKind) {
    let mut next = schedule.clone();
    let applied = match kind {
        MoveKind::Swap if swap(roster, &mut next, rng) => MoveKind::Swap,
        MoveKind::Move if relocate(roster, &mut next, rng) => MoveKind::Move,
        _ => {
            replace(roster, &mut next, rng);
            MoveKind::Replace
        }
    };
    trace!(event = "move", requested = %kind, applied = %applied);
    (next, applied)
}
