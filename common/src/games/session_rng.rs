use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Randomness consumed by the non-exhaustive bot strategies.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn random_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn random_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        ((self.random_unit() * len as f64) as usize).min(len - 1)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.random_unit() < probability
    }
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn random_unit(&mut self) -> f64 {
        self.rng.random()
    }

    fn random_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
