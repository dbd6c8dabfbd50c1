//! Per-position view of the target word.
//!
//! A guessed letter can uncover several positions at once, so the pattern
//! is recomputed from the word and the guessed set on every call instead of
//! patching a cached string.

use std::fmt;
use std::str::Chars;

use im::OrdSet;
use serde::{Deserialize, Serialize};

/// Placeholder shown for a letter that has not been guessed.
pub const MASK: char = '_';

/// One position of the reveal pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealCell {
    Revealed(char),
    Masked,
}

impl RevealCell {
    #[must_use]
    pub fn is_masked(self) -> bool {
        matches!(self, RevealCell::Masked)
    }

    /// The character a renderer shows for this cell.
    #[must_use]
    pub fn display_char(self) -> char {
        match self {
            RevealCell::Revealed(c) => c,
            RevealCell::Masked => MASK,
        }
    }
}

/// Lazy iterator over the cells of a word.
///
/// Finite (one cell per character) and holds no cursor of its own beyond
/// the borrowed word; ask the session for a new one to start over.
#[derive(Clone, Debug)]
pub struct RevealPattern<'a> {
    chars: Chars<'a>,
    guessed: &'a OrdSet<char>,
}

impl<'a> RevealPattern<'a> {
    pub(crate) fn new(word: &'a str, guessed: &'a OrdSet<char>) -> Self {
        Self {
            chars: word.chars(),
            guessed,
        }
    }

    /// Check that no cell is masked. Consumes the iterator.
    pub fn is_fully_revealed(mut self) -> bool {
        self.all(|cell| !cell.is_masked())
    }
}

impl Iterator for RevealPattern<'_> {
    type Item = RevealCell;

    fn next(&mut self) -> Option<RevealCell> {
        let c = self.chars.next()?;
        Some(if self.guessed.contains(&c) {
            RevealCell::Revealed(c)
        } else {
            RevealCell::Masked
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

/// Letters and masks separated by spaces, e.g. `Ц _ К _`.
impl fmt::Display for RevealPattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.clone().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cell.display_char())?;
        }
        Ok(())
    }
}
