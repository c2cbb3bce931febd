//! One-shot evaluation command
//!
//! Classifies a single guess against a given solution without starting a game.

use crate::core::{Feedback, Word, WordError, classify};

/// Result of checking a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub guess: Word,
    pub solution: Word,
    pub feedback: Feedback,
}

/// Classify `guess` against `solution`
///
/// Neither word has to be in the word list.
///
/// # Errors
///
/// Returns an error if either word is not exactly five ASCII letters.
pub fn check_word(guess: &str, solution: &str) -> Result<CheckResult, WordError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    let feedback = classify(&guess, &solution);

    Ok(CheckResult {
        guess,
        solution,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;

    #[test]
    fn check_valid_words() {
        let result = check_word("PLANT", "spray").unwrap();

        assert_eq!(result.guess.text(), "plant");
        assert_eq!(result.solution.text(), "spray");
        assert_eq!(result.feedback.count(Tile::Present), 2);
        assert_eq!(result.feedback.count(Tile::Correct), 0);
    }

    #[test]
    fn check_exact_match() {
        let result = check_word("reyna", "reyna").unwrap();
        assert!(result.feedback.is_perfect());
    }

    #[test]
    fn check_invalid_guess() {
        assert_eq!(check_word("clutch", "spray"), Err(WordError::InvalidLength(6)));
        assert!(check_word("spray", "sp4ay").is_err());
    }
}
