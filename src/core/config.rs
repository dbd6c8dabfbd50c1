//! Session configuration.
//!
//! Hosts configure each engine at startup:
//! - `AlchemyConfig`: which elements a new alchemy session starts with
//! - `HangmanConfig`: attempt budget, letter alphabet, word picker seed
//!
//! Both are plain builders and also deserialize from JSON with every field
//! optional, falling back to the classic game's values. Validation happens
//! when a session or engine is built from the config.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use crate::alchemy::{EntityId, SEED_ELEMENTS};
use crate::hangman::Alphabet;

/// Default number of wrong guesses before a hangman session is lost.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;

/// Configuration for a new alchemy session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlchemyConfig {
    /// Elements discovered at the start of every session, in display order.
    pub seed_elements: Vec<EntityId>,
}

impl Default for AlchemyConfig {
    fn default() -> Self {
        Self {
            seed_elements: SEED_ELEMENTS.iter().map(|&s| EntityId::new(s)).collect(),
        }
    }
}

impl AlchemyConfig {
    /// Create a configuration with the four classic base elements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the seed elements.
    #[must_use]
    pub fn with_seed_elements<I, S>(mut self, seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EntityId>,
    {
        self.seed_elements = seeds.into_iter().map(Into::into).collect();
        self
    }
}

/// Configuration for the hangman engine and its sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HangmanConfig {
    /// Wrong guesses allowed before the session is lost.
    pub max_attempts: u32,

    /// Letters a guess may use. Words must be spelled from the same set.
    pub alphabet: Alphabet,

    /// Seed for the word picker.
    pub rng_seed: u64,
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            alphabet: Alphabet::russian(),
            rng_seed: 0,
        }
    }
}

impl HangmanConfig {
    /// Create the classic configuration: 6 attempts, Russian alphabet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attempt budget.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the word picker seed.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Check that a session can be built from this configuration.
    pub fn validate(&self) -> EngineResult<()> {
        if self.max_attempts == 0 {
            return Err(EngineError::InvalidConfig("max_attempts must be at least 1"));
        }
        if self.alphabet.is_empty() {
            return Err(EngineError::InvalidConfig("alphabet must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alchemy_defaults() {
        let config = AlchemyConfig::new();
        let seeds: Vec<_> = config.seed_elements.iter().map(EntityId::as_str).collect();
        assert_eq!(seeds, vec!["earth", "fire", "water", "air"]);
    }

    #[test]
    fn test_alchemy_builder() {
        let config = AlchemyConfig::new().with_seed_elements(["fire", "water"]);
        assert_eq!(config.seed_elements.len(), 2);
        assert_eq!(config.seed_elements[1], EntityId::new("water"));
    }

    #[test]
    fn test_hangman_defaults() {
        let config = HangmanConfig::new();
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.alphabet.len(), 33);
        assert_eq!(config.rng_seed, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_hangman_builder() {
        let config = HangmanConfig::new()
            .with_max_attempts(10)
            .with_alphabet(Alphabet::new("ABC"))
            .with_rng_seed(99);

        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.alphabet.len(), 3);
        assert_eq!(config.rng_seed, 99);
    }

    #[test]
    fn test_hangman_validate() {
        let zero = HangmanConfig::new().with_max_attempts(0);
        assert!(matches!(zero.validate(), Err(EngineError::InvalidConfig(_))));

        let empty = HangmanConfig::new().with_alphabet(Alphabet::new(""));
        assert!(matches!(empty.validate(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: HangmanConfig = serde_json::from_str(r#"{"max_attempts": 8}"#).unwrap();
        assert_eq!(config.max_attempts, 8);
        assert_eq!(config.alphabet, Alphabet::russian());

        let config: AlchemyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AlchemyConfig::default());
    }

    #[test]
    fn test_alphabet_json_is_a_string() {
        let config: HangmanConfig =
            serde_json::from_str(r#"{"alphabet": "abc", "rng_seed": 3}"#).unwrap();
        assert_eq!(config.alphabet, Alphabet::new("ABC"));
        assert_eq!(config.rng_seed, 3);
    }
}
