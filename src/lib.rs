//! # rule-games
//!
//! Two small rule-table game engines with no I/O of their own.
//!
//! ## Design Principles
//!
//! 1. **Immutable rules, owned sessions**: each game splits into a rule
//!    table that never changes (`Catalog`, `WordList`) and a session value
//!    the caller owns. There is no global game state.
//!
//! 2. **Atomic transitions**: an operation either fully applies or returns
//!    an `EngineError` and leaves the session untouched.
//!
//! 3. **Presentation-agnostic**: rendering, drag and drop, and input
//!    handling live outside. Sessions expose snapshots (`Serialize`, cheap
//!    `Clone` via `im`) for a renderer to consume.
//!
//! ## Modules
//!
//! - `core`: errors, configuration, deterministic RNG
//! - `alchemy`: entity catalog, unordered-pair rules, combination sessions
//! - `hangman`: word list, guess sessions, reveal pattern, gallows hints

pub mod alchemy;
pub mod core;
pub mod hangman;

// Re-export commonly used types
pub use crate::core::{
    AlchemyConfig, EngineError, EngineResult, GameRng, GameRngState, HangmanConfig,
};

pub use crate::alchemy::{
    AlchemySession, Catalog, CombineOutcome, Entity, EntityId, PairKey, Slot,
};

pub use crate::hangman::{
    Alphabet, BodyPart, GallowsStyle, GameStatus, GuessKind, GuessReport, GuessSession, Hangman,
    LetterState, RevealCell, RevealPattern, WordEntry, WordList,
};
