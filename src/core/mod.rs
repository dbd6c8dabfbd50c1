//! Shared engine infrastructure: errors, configuration, deterministic RNG.
//!
//! The RNG is game-agnostic. The error type and the two config types
//! (`AlchemyConfig`, `HangmanConfig`) cover both games and refer to their
//! vocabulary types (`EntityId`, `Alphabet`).

pub mod config;
pub mod error;
pub mod rng;

pub use config::{AlchemyConfig, HangmanConfig};
pub use error::{EngineError, EngineResult};
pub use rng::{GameRng, GameRngState};
