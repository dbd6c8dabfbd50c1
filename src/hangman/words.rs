//! Word entries and the word list a new game picks from.

use serde::{Deserialize, Serialize};

use super::alphabet::Alphabet;
use crate::core::{EngineError, EngineResult, GameRng};

const CLASSIC: &[(&str, &str)] = &[
    ("ПРОГРАММИРОВАНИЕ", "Процесс создания компьютерных программ"),
    ("КОМПЬЮТЕР", "Электронное устройство для обработки данных"),
    ("АЛГОРИТМ", "Последовательность действий для решения задачи"),
    ("ФУНКЦИЯ", "Блок кода, выполняющий определенную задачу"),
    ("ПЕРЕМЕННАЯ", "Именованная область памяти для хранения данных"),
    ("МАССИВ", "Структура данных для хранения набора элементов"),
    ("ОБЪЕКТ", "Экземпляр класса в объектно-ориентированном программировании"),
    ("ЦИКЛ", "Конструкция для многократного выполнения блока кода"),
    ("УСЛОВИЕ", "Конструкция для выполнения кода при определенных условиях"),
    ("СТРОКА", "Тип данных, представляющий текст"),
    ("ЖИРАФ", "Самое высокое сухопутное животное"),
    ("СОЛНЦЕ", "Центральная звезда нашей солнечной системы"),
    ("БИБЛИОТЕКА", "Место, где хранятся книги"),
    ("ПУТЕШЕСТВИЕ", "Посещение разных мест и стран"),
    ("МУЗЫКА", "Искусство звуков"),
];

/// A target word and the hint shown next to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub hint: String,
}

impl WordEntry {
    /// Create an entry. The word is uppercased.
    pub fn new(word: impl AsRef<str>, hint: impl Into<String>) -> Self {
        Self {
            word: word.as_ref().to_uppercase(),
            hint: hint.into(),
        }
    }

    /// Check the word is non-empty and spelled from `alphabet`.
    pub fn validate(&self, alphabet: &Alphabet) -> EngineResult<()> {
        if self.word.is_empty() || !self.word.chars().all(|c| alphabet.contains(c)) {
            return Err(EngineError::InvalidWord(self.word.clone()));
        }
        Ok(())
    }
}

/// Words a hangman engine picks from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Build a list, validating every entry against `alphabet`.
    pub fn new(entries: Vec<WordEntry>, alphabet: &Alphabet) -> EngineResult<Self> {
        let list = Self { entries };
        list.validate(alphabet)?;
        Ok(list)
    }

    /// The fifteen classic words with their hints.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            entries: CLASSIC
                .iter()
                .map(|&(word, hint)| WordEntry::new(word, hint))
                .collect(),
        }
    }

    /// Check the list is non-empty and every word is spelled from `alphabet`.
    pub fn validate(&self, alphabet: &Alphabet) -> EngineResult<()> {
        if self.entries.is_empty() {
            return Err(EngineError::EmptyWordList);
        }
        self.entries.iter().try_for_each(|e| e.validate(alphabet))
    }

    /// Pick an entry at random. Repeats across calls are possible.
    pub fn choose(&self, rng: &mut GameRng) -> EngineResult<&WordEntry> {
        rng.choose(&self.entries).ok_or(EngineError::EmptyWordList)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_list_is_valid() {
        let list = WordList::classic();
        assert_eq!(list.len(), 15);
        assert!(list.validate(&Alphabet::russian()).is_ok());
    }

    #[test]
    fn test_entry_uppercases() {
        let entry = WordEntry::new("цикл", "loop");
        assert_eq!(entry.word, "ЦИКЛ");
    }

    #[test]
    fn test_invalid_words_rejected() {
        let alphabet = Alphabet::russian();
        assert_eq!(
            WordEntry::new("", "nothing").validate(&alphabet),
            Err(EngineError::InvalidWord(String::new()))
        );
        assert_eq!(
            WordEntry::new("RUST", "latin").validate(&alphabet),
            Err(EngineError::InvalidWord("RUST".to_string()))
        );
        assert_eq!(
            WordEntry::new("ПОЛУ-ФАБРИКАТ", "hyphen").validate(&alphabet),
            Err(EngineError::InvalidWord("ПОЛУ-ФАБРИКАТ".to_string()))
        );
    }

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(
            WordList::new(Vec::new(), &Alphabet::russian()),
            Err(EngineError::EmptyWordList)
        );
    }

    #[test]
    fn test_choose_is_deterministic() {
        let list = WordList::classic();
        let mut rng1 = GameRng::new(5);
        let mut rng2 = GameRng::new(5);

        for _ in 0..20 {
            assert_eq!(list.choose(&mut rng1).unwrap(), list.choose(&mut rng2).unwrap());
        }
    }

    #[test]
    fn test_serde_is_a_plain_array() {
        let list = WordList::new(vec![WordEntry::new("ЦИКЛ", "loop")], &Alphabet::russian()).unwrap();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"word":"ЦИКЛ","hint":"loop"}]"#);
    }
}
