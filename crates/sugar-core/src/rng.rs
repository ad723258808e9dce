//! Simulation-level RNG wrapper.
//!
//! Runs are unseeded by default: [`SimRng::from_entropy`] draws its seed from
//! the operating system, so two runs with the same configuration diverge.
//! [`SimRng::new`] fixes the seed, which tests and reproducible demos use.
//!
//! The engine is single-threaded, so one `SimRng` is threaded through every
//! phase by `&mut` borrow; there is no per-agent RNG state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The engine's single source of randomness.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Deterministic RNG seeded from `seed`.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// RNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, entropy-seeded otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `1 / n`.  `n <= 1` is always `true`.
    #[inline]
    pub fn one_in(&mut self, n: u32) -> bool {
        n <= 1 || self.0.gen_range(0..n) == 0
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
