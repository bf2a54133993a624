use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("Word cannot be empty")]
    Empty,
    #[error("Invalid letter {letter:?} at position {position}")]
    InvalidLetter { letter: char, position: usize },
}

/// Returns true for letters of the puzzle alphabet (`A`-`Z`).
pub fn is_puzzle_letter(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// A non-empty sequence of uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Parses user or storage input, trimming whitespace and uppercasing.
    pub fn parse(input: &str) -> Result<Self, WordError> {
        let word = input.trim().to_ascii_uppercase();
        if word.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some((position, letter)) = word.chars().enumerate().find(|(_, c)| !is_puzzle_letter(*c)) {
            return Err(WordError::InvalidLetter { letter, position });
        }
        Ok(Self(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Letters as bytes; every byte is an ASCII uppercase letter.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn letter_at(&self, index: usize) -> Option<char> {
        self.0.as_bytes().get(index).map(|b| *b as char)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::parse(s)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Word::parse(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
