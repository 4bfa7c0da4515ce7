use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest number of options a question can carry (`A` through `Z`).
pub const MAX_OPTIONS: usize = 26;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LetterError {
    #[error("option letter must be a single character A-Z, got {0:?}")]
    Invalid(String),

    #[error("option index {0} has no letter code")]
    IndexOutOfRange(usize),
}

/// Letter code of an option: `A` is the first option, `B` the second, and so on.
///
/// Answers are compared by letter, never by option text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OptionLetter(u8);

impl OptionLetter {
    /// Letter for the option at `index`.
    ///
    /// # Errors
    ///
    /// Returns `LetterError::IndexOutOfRange` past the 26th option.
    pub fn from_index(index: usize) -> Result<Self, LetterError> {
        u8::try_from(index)
            .ok()
            .filter(|idx| usize::from(*idx) < MAX_OPTIONS)
            .map(Self)
            .ok_or(LetterError::IndexOutOfRange(index))
    }

    /// Parses an upper- or lower-case letter.
    ///
    /// # Errors
    ///
    /// Returns `LetterError::Invalid` for anything other than one ASCII letter.
    pub fn from_char(ch: char) -> Result<Self, LetterError> {
        if ch.is_ascii_alphabetic() {
            let upper = ch.to_ascii_uppercase() as u8;
            Ok(Self(upper - b'A'))
        } else {
            Err(LetterError::Invalid(ch.to_string()))
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    #[must_use]
    pub fn as_char(self) -> char {
        char::from(b'A' + self.0)
    }
}

impl fmt::Debug for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionLetter({})", self.as_char())
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for OptionLetter {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch),
            _ => Err(LetterError::Invalid(trimmed.to_string())),
        }
    }
}

impl TryFrom<String> for OptionLetter {
    type Error = LetterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OptionLetter> for String {
    fn from(letter: OptionLetter) -> Self {
        letter.to_string()
    }
}
