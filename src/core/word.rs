//! Valordle word representation
//!
//! A Word stores a validated five-letter lowercase word as text and bytes.

use super::WORD_LENGTH;
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A five-letter lowercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is normalized to lowercase before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use valordle::core::Word;
    ///
    /// let word = Word::new("Spray").unwrap();
    /// assert_eq!(word.text(), "spray");
    ///
    /// assert!(Word::new("clutch").is_err());
    /// assert!(Word::new("sp4y!").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Count of each letter in the word
    ///
    /// This is the letter multiset the evaluator consumes from.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("spike").unwrap();
        assert_eq!(word.text(), "spike");
        assert_eq!(word.chars(), b"spike");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("VIPER").unwrap().text(), "viper");
        assert_eq!(Word::new("ViPeR").unwrap().text(), "viper");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("clutch"), Err(WordError::InvalidLength(6)));
        assert_eq!(Word::new("ace"), Err(WordError::InvalidLength(3)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("val0r"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("val r"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("valo!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("valé"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_char_counts_duplicates() {
        let counts = Word::new("boost").unwrap().char_counts();
        assert_eq!(counts.get(&b'o'), Some(&2));
        assert_eq!(counts.get(&b'b'), Some(&1));
        assert_eq!(counts.get(&b's'), Some(&1));
        assert_eq!(counts.get(&b't'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Ghost".parse().unwrap();
        assert_eq!(format!("{word}"), "ghost");
    }

    #[test]
    fn word_equality_case_insensitive() {
        assert_eq!(Word::new("judge").unwrap(), Word::new("JUDGE").unwrap());
        assert_ne!(Word::new("judge").unwrap(), Word::new("pearl").unwrap());
    }
}
