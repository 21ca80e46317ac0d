//! Seeded random streams.
//!
//! Every random draw in a run (construction, move selection, acceptance)
//! comes from one generator created here, so a fixed seed replays the
//! whole run.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The generator type threaded through construction, moves and acceptance.
pub type RosterRng = ChaCha8Rng;

/// Creates a reproducible generator from a seed.
pub fn create_rng(seed: u64) -> RosterRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from fresh entropy when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> RosterRng {
    create_rng(seed.unwrap_or_else(rand::random))
}
