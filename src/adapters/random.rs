use crate::domain::ports::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// OS-seeded randomness for normal runs.
///
/// Delegates to the thread-local generator on every draw; `ThreadRng` itself
/// is not `Send`, so holding one here would poison the engine's spawn bounds.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        rand::rng().random_range(min..=max)
    }
}

/// Seeded generator for reproducible runs. The same seed replays the same
/// draw stream.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_in_range(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }
}
