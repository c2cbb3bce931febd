//! Word lists for Valordle
//!
//! Provides the embedded candidate list and the validated [`WordList`] the
//! game draws its solutions from.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::{Word, WordError};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list is empty")]
    Empty,

    #[error("entry {line} ('{entry}') is not a valid word: {source}")]
    InvalidEntry {
        line: usize,
        entry: String,
        source: WordError,
    },

    #[error("could not read word list {}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },
}

/// A non-empty list of candidate solution words
///
/// Duplicates are allowed and simply weight the random draw.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a word list, checking that it is non-empty
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// Validate every entry of a string slice
    ///
    /// Any bad entry is an error: the list is a startup invariant of the game.
    ///
    /// # Errors
    /// Returns `WordListError::InvalidEntry` for the first entry that is not
    /// a five-letter word, or `WordListError::Empty` for an empty slice.
    ///
    /// # Examples
    /// ```
    /// use valordle::wordlists::WordList;
    ///
    /// let list = WordList::from_strs(&["ghost", "viper"]).unwrap();
    /// assert_eq!(list.len(), 2);
    ///
    /// assert!(WordList::from_strs(&["ghost", "clutch"]).is_err());
    /// ```
    pub fn from_strs<S: AsRef<str>>(entries: &[S]) -> Result<Self, WordListError> {
        let words = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Word::new(entry.as_ref()).map_err(|source| WordListError::InvalidEntry {
                    line: i + 1,
                    entry: entry.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(words)
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded data is invalid, which the build script
    /// already rejects.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::from_strs(WORDS)
    }

    /// Pick a word uniformly at random
    #[must_use]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Non-empty by construction
        self.words.choose(rng).unwrap_or(&self.words[0])
    }

    /// Check whether the list contains a word
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}
