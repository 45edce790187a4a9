//! RNG module - seeded randomness for tile spawning
//!
//! Spawning needs two random choices: which empty cell, and whether the new
//! tile is a 2 or a 4. Both come from one seeded `StdRng`, so the same seed
//! replays the same game for the same sequence of swipes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{TileValue, SPAWN_HIGH, SPAWN_HIGH_PER_TEN, SPAWN_LOW};

/// Seeded random source for the game controller.
#[derive(Debug, Clone)]
pub struct TileRng {
    rng: StdRng,
    seed: u64,
}

impl TileRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.rng.gen_range(0..len)
    }

    /// Value of a newly spawned tile: 2 nine times in ten, otherwise 4.
    pub fn spawn_value(&mut self) -> TileValue {
        if self.rng.gen_range(0..10) < SPAWN_HIGH_PER_TEN {
            SPAWN_HIGH
        } else {
            SPAWN_LOW
        }
    }

    /// The seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for TileRng {
    fn default() -> Self {
        Self::new(1)
    }
}
