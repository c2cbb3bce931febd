//! Word list loading utilities
//!
//! Loads strict word lists from plain-text files.

use super::{WordList, WordListError};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load a strict word list from a file
///
/// One word per line; blank lines are skipped and entries are lowercased.
/// Every remaining line must be a valid five-letter word.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read,
/// `WordListError::InvalidEntry` with the file line of the first bad entry,
/// or `WordListError::Empty` if the file has no entries.
///
/// # Examples
/// ```no_run
/// use valordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, entry)| !entry.is_empty())
        .map(|(line, entry)| {
            Word::new(entry).map_err(|source| WordListError::InvalidEntry {
                line,
                entry: entry.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("read {} entries from {}", words.len(), path.display());
    WordList::new(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "valordle-{name}-{}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_from_file_skips_blank_lines_and_normalizes() {
        let path = temp_file("ok", "GHOST\n\n  viper \nsmoke\n");
        let list = load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        let texts: Vec<&str> = list.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["ghost", "viper", "smoke"]);
    }

    #[test]
    fn load_from_file_rejects_bad_entry() {
        let path = temp_file("bad", "ghost\nclutch\n");
        let result = load_from_file(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(
            result,
            Err(WordListError::InvalidEntry { line: 2, .. })
        ));
    }

    #[test]
    fn bad_entry_reports_file_line_past_blank_lines() {
        let path = temp_file("blank-gap", "ghost\n\n\nclutch\n");
        let result = load_from_file(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(WordListError::InvalidEntry { line, entry, .. }) => {
                assert_eq!(line, 4);
                assert_eq!(entry, "clutch");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn load_from_missing_file() {
        let result = load_from_file("/nonexistent/valordle/words.txt");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    #[test]
    fn load_from_empty_file() {
        let path = temp_file("empty", "\n\n");
        let result = load_from_file(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(WordListError::Empty)));
    }
}
