use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed integers.
///
/// Both bounds are inclusive. Implementations must be total: when
/// `high < low` the draw returns `low`.
pub trait RandomSource {
    /// Draw an integer from `low..=high`.
    fn uniform_int(&mut self, low: u32, high: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        (**self).uniform_int(low, high)
    }
}

/// [`RandomSource`] backed by a standard RNG.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Deterministic source: the same seed yields the same draws.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..=high)
    }
}

/// [`RandomSource`] that replays a fixed list of draws.
///
/// Each scripted value is clamped into the requested range. Once the script
/// runs out every draw returns the range's lower bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<u32>,
}

impl ScriptedRandom {
    /// Create a source that returns `draws` in order.
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Append more draws to the end of the script.
    pub fn push(&mut self, draw: u32) {
        self.draws.push_back(draw);
    }

    /// Number of scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        let high = high.max(low);
        self.draws
            .pop_front()
            .map_or(low, |draw| draw.clamp(low, high))
    }
}
