//! Runtime configuration shared by the front ends

use crate::wordlists::{WordList, WordListError, loader::load_from_file};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Default destination for shared results
pub const DEFAULT_SHARE_FILE: &str = "valordle-share.txt";

/// Where candidate solutions come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    Embedded,
    File(PathBuf),
}

impl WordListSource {
    /// Parse the `-w` flag: "default" selects the embedded list, anything else is a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "default" | "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Options for one session
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub wordlist: WordListSource,
    /// Fixed seed for reproducible solutions
    pub seed: Option<u64>,
    pub share_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wordlist: WordListSource::Embedded,
            seed: None,
            share_path: PathBuf::from(DEFAULT_SHARE_FILE),
        }
    }
}

impl GameConfig {
    /// Load and validate the configured word list
    ///
    /// # Errors
    /// Returns `WordListError` if the list is empty, unreadable, or has an
    /// entry that is not a five-letter word.
    pub fn load_words(&self) -> Result<WordList, WordListError> {
        match &self.wordlist {
            WordListSource::Embedded => WordList::embedded(),
            WordListSource::File(path) => load_from_file(path),
        }
    }

    /// Random source for solution selection
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                log::debug!("using fixed seed {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        }
    }
}
