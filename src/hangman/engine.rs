//! Hangman engine: word list, word picker, and gallows style.
//!
//! The engine owns what outlives a single game. Each `new_game` hands back
//! an independent `GuessSession`; the engine keeps no reference to it.

use tracing::debug;

use super::gallows::GallowsStyle;
use super::session::GuessSession;
use super::words::WordList;
use crate::core::{EngineResult, GameRng, GameRngState, HangmanConfig};

/// Starts guess sessions from a word list.
///
/// ```
/// use rule_games::hangman::{GameStatus, Hangman};
///
/// let mut hangman = Hangman::classic(7);
/// let session = hangman.new_game().unwrap();
/// assert_eq!(session.status(), GameStatus::InProgress);
/// assert_eq!(session.max_attempts(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct Hangman {
    words: WordList,
    config: HangmanConfig,
    rng: GameRng,
    style: GallowsStyle,
}

impl Hangman {
    /// Create an engine. Every word must be spelled from the configured
    /// alphabet.
    pub fn new(words: WordList, config: HangmanConfig) -> EngineResult<Self> {
        config.validate()?;
        words.validate(&config.alphabet)?;

        Ok(Self {
            rng: GameRng::new(config.rng_seed),
            words,
            config,
            style: GallowsStyle::default(),
        })
    }

    /// The classic word list and rules with the given picker seed.
    #[must_use]
    pub fn classic(seed: u64) -> Self {
        Self {
            words: WordList::classic(),
            config: HangmanConfig::new().with_rng_seed(seed),
            rng: GameRng::new(seed),
            style: GallowsStyle::default(),
        }
    }

    /// Pick a word and start a session on it.
    ///
    /// Words are drawn independently each time, so the same word can come up
    /// twice in a row.
    pub fn new_game(&mut self) -> EngineResult<GuessSession> {
        let entry = self.words.choose(&mut self.rng)?.clone();
        debug!(hint = %entry.hint, "new hangman game");
        GuessSession::new_game(entry, &self.config)
    }

    /// Switch between the two gallows drawings. Returns the new style.
    pub fn toggle_style(&mut self) -> GallowsStyle {
        self.style = self.style.toggled();
        self.style
    }

    #[must_use]
    pub fn style(&self) -> GallowsStyle {
        self.style
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub fn config(&self) -> &HangmanConfig {
        &self.config
    }

    /// Picker state, for resuming the same word sequence later.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue picking from a saved state.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }
}
