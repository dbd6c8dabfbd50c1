//! Letter sets that guesses and words are validated against.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult};

const RUSSIAN: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

/// Ordered set of uppercase letters.
///
/// Order matters only for display (the on-screen keyboard). Serialized as a
/// plain string.
///
/// ```
/// use rule_games::hangman::Alphabet;
///
/// let alphabet = Alphabet::russian();
/// assert_eq!(alphabet.len(), 33);
/// assert_eq!(alphabet.normalize('ж'), Ok('Ж'));
/// assert!(alphabet.normalize('Q').is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from a string of letters.
    ///
    /// Letters are uppercased; repeats are dropped.
    pub fn new(letters: &str) -> Self {
        let mut out: Vec<char> = Vec::new();
        for c in letters.chars().filter(|c| !c.is_whitespace()) {
            let upper = to_upper(c);
            if !out.contains(&upper) {
                out.push(upper);
            }
        }
        Self { letters: out }
    }

    /// The 33-letter Russian alphabet, Ё included.
    #[must_use]
    pub fn russian() -> Self {
        Self::new(RUSSIAN)
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Uppercase `letter` and check it belongs to the alphabet.
    pub fn normalize(&self, letter: char) -> EngineResult<char> {
        let upper = to_upper(letter);
        if self.contains(upper) {
            Ok(upper)
        } else {
            Err(EngineError::InvalidLetter(letter))
        }
    }

    /// Letters in display order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::russian()
    }
}

impl From<String> for Alphabet {
    fn from(letters: String) -> Self {
        Self::new(&letters)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.letters.into_iter().collect()
    }
}

// Single-char uppercase; letters whose uppercase expands (ß) stay as-is.
fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_russian_order() {
        let alphabet = Alphabet::russian();
        let letters: String = alphabet.letters().collect();
        assert_eq!(letters, RUSSIAN);
        assert!(alphabet.contains('Ё'));
    }

    #[test]
    fn test_new_uppercases_and_dedupes() {
        let alphabet = Alphabet::new("abcA b");
        let letters: String = alphabet.letters().collect();
        assert_eq!(letters, "ABC");
    }

    #[test]
    fn test_normalize() {
        let alphabet = Alphabet::russian();
        assert_eq!(alphabet.normalize('ц'), Ok('Ц'));
        assert_eq!(alphabet.normalize('ё'), Ok('Ё'));
        assert_eq!(alphabet.normalize('Ц'), Ok('Ц'));
        assert_eq!(alphabet.normalize('1'), Err(EngineError::InvalidLetter('1')));
        assert_eq!(alphabet.normalize('z'), Err(EngineError::InvalidLetter('z')));
    }

    #[test]
    fn test_to_upper_keeps_multi_char_expansions() {
        assert_eq!(to_upper('ß'), 'ß');
        assert_eq!(to_upper('a'), 'A');
    }

    #[test]
    fn test_serde_as_string() {
        let alphabet = Alphabet::new("XYZ");
        let json = serde_json::to_string(&alphabet).unwrap();
        assert_eq!(json, "\"XYZ\"");

        let restored: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, alphabet);
    }
}
