//! Target word selection

use crate::core::CandidateList;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses the target word for each round
pub trait WordPicker {
    /// Pick one word from a non-empty candidate list
    fn pick<'a>(&mut self, candidates: &'a CandidateList) -> &'a str;
}

/// Uniform random selection backed by any `Rng`
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    /// Deterministic picker for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Picker seeded from OS entropy
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> WordPicker for RandomPicker<R> {
    fn pick<'a>(&mut self, candidates: &'a CandidateList) -> &'a str {
        let words = candidates.as_slice();
        &words[self.rng.random_range(0..words.len())]
    }
}
