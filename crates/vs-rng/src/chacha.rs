//! ChaCha8-backed value source.
//!
//! Unlike [`GlibcRand`](crate::GlibcRand) this covers the full signed range,
//! negative values included.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::ValueSource;

/// Seeded ChaCha8 stream of `i32` values.
#[derive(Debug, Clone)]
pub struct ChaChaSource {
    rng: ChaCha8Rng,
    seed: u32,
    calls: u64,
}

impl ChaChaSource {
    /// Create a new source with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(u64::from(seed)),
            seed,
            calls: 0,
        }
    }

    /// Get the seed used to create this source
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl ValueSource for ChaChaSource {
    fn next_value(&mut self) -> i32 {
        self.calls += 1;
        self.rng.next_u32() as i32
    }

    fn calls(&self) -> u64 {
        self.calls
    }
}
