//! Deterministic random number generation for playouts.
//!
//! Same seed, same sequence of picks, so a random playout can be replayed
//! exactly from its seed.
//!
//! ```
//! use peg_solitaire::core::GameRng;
//!
//! let moves = ["a", "b", "c", "d"];
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.choose(&moves), b.choose(&moves));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 RNG.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick a uniformly random element, or `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picks(seed: u64, n: usize) -> Vec<usize> {
        let options: Vec<usize> = (0..32).collect();
        let mut rng = GameRng::new(seed);
        (0..n).filter_map(|_| rng.choose(&options).copied()).collect()
    }

    #[test]
    fn test_same_seed_same_picks() {
        assert_eq!(picks(42, 50), picks(42, 50));
    }

    #[test]
    fn test_seeds_diverge() {
        assert_ne!(picks(1, 50), picks(2, 50));
    }

    #[test]
    fn test_choose_empty_slice() {
        let mut rng = GameRng::new(0);
        let none: [u8; 0] = [];
        assert_eq!(rng.choose(&none), None);
        assert_eq!(rng.choose(&[9]), Some(&9));
    }
}
