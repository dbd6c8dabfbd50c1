//! Deterministic random number generation for word selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same sequence of picks
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use rule_games::core::GameRng;
//!
//! let words = ["ЦИКЛ", "МАССИВ", "СТРОКА"];
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//!
//! // Same seed, same picks
//! assert_eq!(rng.choose(&words), replay.choose(&words));
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing the hangman word picker.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture is O(1) regardless of how
/// many picks were made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picks(rng: &mut GameRng, pool: &[usize], n: usize) -> Vec<usize> {
        (0..n).filter_map(|_| rng.choose(pool).copied()).collect()
    }

    #[test]
    fn test_determinism() {
        let pool: Vec<usize> = (0..1000).collect();
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(picks(&mut rng1, &pool, 100), picks(&mut rng2, &pool, 100));
    }

    #[test]
    fn test_different_seeds() {
        let pool: Vec<usize> = (0..1000).collect();
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(picks(&mut rng1, &pool, 10), picks(&mut rng2, &pool, 10));
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_roundtrip_continues_sequence() {
        let pool: Vec<usize> = (0..15).collect();
        let mut rng = GameRng::new(7);
        picks(&mut rng, &pool, 50);

        let state = rng.state();
        let expected = picks(&mut rng, &pool, 10);

        let mut restored = GameRng::from_state(&state);
        let actual = picks(&mut restored, &pool, 10);

        assert_eq!(expected, actual);
        assert_eq!(restored.state().seed, 7);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
