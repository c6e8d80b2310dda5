//! Move sources and notification routing.
//!
//! Which seat a player's move comes from is a pure table lookup on the mode
//! ([`Mode::seat`]); this module adds the fan-out list for each mode and the
//! scripted computer opponent.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Mode, Seat};

/// Every seat that receives turn notices and board updates under `mode`:
/// the local display first, then each remote transport in seat order.
pub fn notification_targets(mode: Mode) -> ArrayVec<Seat, 3> {
    let mut targets = ArrayVec::new();
    targets.push(Seat::Console);
    for index in 0..mode.remote_count() {
        targets.push(Seat::Remote(index));
    }
    targets
}

/// Scripted opponent choosing columns uniformly at random.
///
/// The pick is not checked against full columns; it is validated like any
/// other move and simply retried on rejection.
#[derive(Debug, Clone)]
pub struct ComputerOpponent {
    rng: StdRng,
}

impl ComputerOpponent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic opponent for reproducible games
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a 1-based column in `[1, columns]`
    pub fn pick(&mut self, columns: usize) -> i64 {
        self.rng.random_range(1..=columns as i64)
    }
}

impl Default for ComputerOpponent {
    fn default() -> Self {
        Self::new()
    }
}
