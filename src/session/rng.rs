//! Injectable randomness for word picks and power-up rolls
//!
//! Every random decision in a session (word selection, reveal letter,
//! fifty-fifty elimination) goes through `RandomSource` so tests and the
//! simulate command can supply deterministic sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random indices
pub trait RandomSource {
    /// Uniform random index in `0..len`
    ///
    /// # Panics
    /// May panic if `len` is zero; callers guarantee a non-empty range.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Shuffle a slice in place (Fisher-Yates)
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.pick_index(i + 1);
            items.swap(i, j);
        }
    }
}

/// Thread-local RNG, the default for live play
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Seeded RNG for reproducible sessions
///
/// Used by tests and by `simulate --seed`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
