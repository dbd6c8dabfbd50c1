//! Guess engine: a target word, guessed and missed letters, and a fixed
//! budget of wrong guesses.
//!
//! - `alphabet`: letter sets and input normalization
//! - `words`: word entries and the classic list
//! - `reveal`: the lazily computed reveal pattern
//! - `session`: `GuessSession` and `guess_letter`
//! - `engine`: `Hangman`, which picks words and starts sessions
//! - `gallows`: rendering hints (style toggle, visible body parts)

pub mod alphabet;
pub mod engine;
pub mod gallows;
pub mod reveal;
pub mod session;
pub mod words;

pub use alphabet::Alphabet;
pub use engine::Hangman;
pub use gallows::{BodyPart, GallowsStyle};
pub use reveal::{RevealCell, RevealPattern, MASK};
pub use session::{GameStatus, GuessKind, GuessReport, GuessSession, LetterState};
pub use words::{WordEntry, WordList};
