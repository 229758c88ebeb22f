use rand::seq::SliceRandom;

/// Source of uniformly random permutations for the selection lottery.
pub trait Shuffler: Send + Sync {
    /// Returns a permutation of `0..len`.
    fn permutation(&self, len: usize) -> Vec<usize>;
}

/// Shuffles with the thread-local RNG, seeded from the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngShuffler;

impl Shuffler for ThreadRngShuffler {
    fn permutation(&self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(&mut rand::rng());
        order
    }
}
