//! Engine error type.
//!
//! Every failure is local and recoverable: the operation that returns an
//! `EngineError` leaves its session untouched.

use thiserror::Error;

use crate::alchemy::EntityId;

/// Errors produced by the catalog, the sessions, and their configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Staging an entity that has not been discovered yet.
    #[error("entity `{0}` has not been discovered")]
    InvalidEntity(EntityId),

    /// Guessing after the session reached a win or a loss.
    #[error("game is already over")]
    GameAlreadyOver,

    /// Slot index other than 0 or 1.
    #[error("slot index {0} is out of range (expected 0 or 1)")]
    InvalidSlot(usize),

    /// A rule or seed element references an entity missing from the catalog.
    #[error("entity `{0}` is not in the catalog")]
    UnknownEntity(EntityId),

    #[error("entity `{0}` is already registered")]
    DuplicateEntity(EntityId),

    #[error("a rule for `{0}` + `{1}` already exists")]
    DuplicateRule(EntityId, EntityId),

    #[error("rule for `{0}` + `{1}` has no results")]
    EmptyRule(EntityId, EntityId),

    /// Guess outside the configured alphabet.
    #[error("letter `{0}` is not in the alphabet")]
    InvalidLetter(char),

    /// Word entry that is empty or uses letters outside the alphabet.
    #[error("word `{0}` is empty or contains letters outside the alphabet")]
    InvalidWord(String),

    #[error("word list is empty")]
    EmptyWordList,

    /// Configuration value that no session can be built from.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// Saved session whose fields contradict each other.
    #[error("corrupt session: {0}")]
    CorruptSession(&'static str),
}

/// Result alias used throughout the crate.
pub type EngineResult<T> = Result<T, EngineError>;
