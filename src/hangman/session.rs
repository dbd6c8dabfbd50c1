//! Guess session: one target word, guessed and missed letters, win/loss.
//!
//! ## Invariants
//!
//! - `guessed` and `missed` never share a letter
//! - `attempts == missed.len()`
//! - the status leaves `InProgress` exactly when the word is fully revealed
//!   (won) or `attempts` reaches the budget (lost), and never goes back
//!
//! ```
//! use rule_games::core::HangmanConfig;
//! use rule_games::hangman::{GameStatus, GuessSession, WordEntry};
//!
//! let entry = WordEntry::new("ЦИКЛ", "Конструкция для многократного выполнения блока кода");
//! let mut session = GuessSession::new_game(entry, &HangmanConfig::default()).unwrap();
//!
//! for letter in ['И', 'К', 'Ц', 'Л'] {
//!     session.guess_letter(letter).unwrap();
//! }
//! assert_eq!(session.status(), GameStatus::Won);
//! assert_eq!(session.reveal_pattern().to_string(), "Ц И К Л");
//! ```

use im::OrdSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::alphabet::Alphabet;
use super::reveal::{RevealCell, RevealPattern};
use super::words::WordEntry;
use crate::core::{EngineError, EngineResult, HangmanConfig};

/// Where a session stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Check if the session reached a terminal state.
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// How a single guess was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessKind {
    /// Letter occurs in the word.
    Hit,
    /// Letter does not occur; one attempt spent.
    Miss,
    /// Letter was already tried. Nothing changed.
    Repeat,
}

/// Keyboard state of one alphabet letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterState {
    Unused,
    Correct,
    Incorrect,
}

/// Everything a renderer needs after a guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessReport {
    pub letter: char,
    pub kind: GuessKind,
    pub status: GameStatus,
    pub pattern: Vec<RevealCell>,
}

/// Mutable state of one hangman game.
///
/// A saved session is checked against the invariants above when it is
/// loaded; one that breaks any of them fails to deserialize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGuessSession")]
pub struct GuessSession {
    word: String,
    hint: String,
    alphabet: Alphabet,
    guessed: OrdSet<char>,
    missed: OrdSet<char>,
    attempts: u32,
    max_attempts: u32,
    status: GameStatus,
}

/// Unchecked wire form of `GuessSession`.
#[derive(Deserialize)]
struct RawGuessSession {
    word: String,
    hint: String,
    alphabet: Alphabet,
    guessed: OrdSet<char>,
    missed: OrdSet<char>,
    attempts: u32,
    max_attempts: u32,
    status: GameStatus,
}

impl TryFrom<RawGuessSession> for GuessSession {
    type Error = EngineError;

    fn try_from(data: RawGuessSession) -> EngineResult<Self> {
        let RawGuessSession {
            word,
            hint,
            alphabet,
            guessed,
            missed,
            attempts,
            max_attempts,
            status,
        } = data;

        HangmanConfig::new()
            .with_max_attempts(max_attempts)
            .with_alphabet(alphabet.clone())
            .validate()?;
        let entry = WordEntry { word, hint };
        entry.validate(&alphabet)?;

        let outside = guessed
            .iter()
            .chain(missed.iter())
            .find(|&&c| !alphabet.contains(c));
        if let Some(&letter) = outside {
            return Err(EngineError::InvalidLetter(letter));
        }
        if guessed.iter().any(|&c| !entry.word.contains(c)) {
            return Err(EngineError::CorruptSession("guessed letter is not in the word"));
        }
        if missed.iter().any(|&c| entry.word.contains(c)) {
            return Err(EngineError::CorruptSession("missed letter is in the word"));
        }
        if attempts as usize != missed.len() {
            return Err(EngineError::CorruptSession("attempts do not match missed letters"));
        }
        if attempts > max_attempts {
            return Err(EngineError::CorruptSession("attempts exceed the budget"));
        }

        let session = Self {
            word: entry.word,
            hint: entry.hint,
            alphabet,
            guessed,
            missed,
            attempts,
            max_attempts,
            status,
        };
        if session.computed_status() != status {
            return Err(EngineError::CorruptSession("status does not match the guesses"));
        }
        Ok(session)
    }
}

impl GuessSession {
    /// Start a game on `entry`.
    ///
    /// Fails if the configuration is unusable or the word is not spelled
    /// from the configured alphabet.
    pub fn new_game(entry: WordEntry, config: &HangmanConfig) -> EngineResult<Self> {
        config.validate()?;
        entry.validate(&config.alphabet)?;

        debug!(
            letters = entry.word.chars().count(),
            max_attempts = config.max_attempts,
            "guess session started"
        );

        Ok(Self {
            word: entry.word,
            hint: entry.hint,
            alphabet: config.alphabet.clone(),
            guessed: OrdSet::new(),
            missed: OrdSet::new(),
            attempts: 0,
            max_attempts: config.max_attempts,
            status: GameStatus::InProgress,
        })
    }

    /// Submit a letter.
    ///
    /// Lowercase input is accepted. A letter already tried is a no-op
    /// reported as `GuessKind::Repeat`. Fails with `GameAlreadyOver` once the
    /// session is won or lost, and with `InvalidLetter` for anything outside
    /// the alphabet; neither failure changes the session.
    pub fn guess_letter(&mut self, letter: char) -> EngineResult<GuessReport> {
        if self.status.is_over() {
            return Err(EngineError::GameAlreadyOver);
        }
        let letter = self.alphabet.normalize(letter)?;

        let kind = if self.guessed.contains(&letter) || self.missed.contains(&letter) {
            GuessKind::Repeat
        } else if self.word.contains(letter) {
            self.guessed.insert(letter);
            GuessKind::Hit
        } else {
            self.missed.insert(letter);
            self.attempts += 1;
            GuessKind::Miss
        };
        trace!(%letter, ?kind, attempts = self.attempts, "guess");

        self.update_status();

        Ok(GuessReport {
            letter,
            kind,
            status: self.status,
            pattern: self.reveal_pattern().collect(),
        })
    }

    fn computed_status(&self) -> GameStatus {
        if self.reveal_pattern().is_fully_revealed() {
            GameStatus::Won
        } else if self.attempts >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    fn update_status(&mut self) {
        let status = self.computed_status();
        if status.is_over() {
            debug!(?status, attempts = self.attempts, "guess session over");
        }
        self.status = status;
    }

    /// The word with unguessed positions masked. Fresh on every call.
    #[must_use]
    pub fn reveal_pattern(&self) -> RevealPattern<'_> {
        RevealPattern::new(&self.word, &self.guessed)
    }

    /// Every alphabet letter with whether it was tried and how it went.
    pub fn keyboard(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.alphabet.letters().map(move |c| {
            let state = if self.guessed.contains(&c) {
                LetterState::Correct
            } else if self.missed.contains(&c) {
                LetterState::Incorrect
            } else {
                LetterState::Unused
            };
            (c, state)
        })
    }

    /// Outcome message for a finished game.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won => Some("Поздравляем! Вы выиграли!".to_string()),
            GameStatus::Lost => Some(format!("Игра окончена! Загаданное слово: {}", self.word)),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Correctly guessed letters, sorted.
    #[must_use]
    pub fn guessed(&self) -> &OrdSet<char> {
        &self.guessed
    }

    /// Wrong letters, sorted.
    #[must_use]
    pub fn missed(&self) -> &OrdSet<char> {
        &self.missed
    }

    /// Wrong guesses so far.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
}
