use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Selector picks an index in 0..len; len is never zero when the catalog calls it.
pub trait Selector {
    fn select(&mut self, len: usize) -> usize;
}

#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Selector for RandomSelector {
    fn select(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

impl<F: FnMut(usize) -> usize> Selector for F {
    fn select(&mut self, len: usize) -> usize {
        self(len)
    }
}
