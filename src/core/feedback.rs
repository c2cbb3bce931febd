//! Guess evaluation and per-tile feedback
//!
//! Each tile of a submitted guess is classified as one of:
//! - `Correct` (right letter, right position)
//! - `Present` (letter in the solution, wrong position)
//! - `Absent` (no unmatched instance of the letter left in the solution)

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of a single tile
///
/// Ordered by strength: `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tile {
    Absent,
    Present,
    Correct,
}

impl Tile {
    /// Emoji used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback for one submitted guess, aligned position by position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Tile; WORD_LENGTH]);

impl Feedback {
    /// All tiles correct
    pub const PERFECT: Self = Self([Tile::Correct; WORD_LENGTH]);

    /// Build feedback from explicit tiles
    #[inline]
    #[must_use]
    pub const fn new(tiles: [Tile; WORD_LENGTH]) -> Self {
        Self(tiles)
    }

    /// Calculate the feedback when `guess` is played against `solution`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches correct and consume those letters
    ///    from the solution's letter pool
    /// 2. Second pass: for the remaining positions, consume one matching
    ///    letter from the pool if any is left (present), otherwise absent
    ///
    /// Consuming from the pool keeps duplicate guess letters from being
    /// credited more often than they occur in the solution.
    ///
    /// # Examples
    /// ```
    /// use valordle::core::{Feedback, Tile, Word};
    ///
    /// let guess = Word::new("pearl").unwrap();
    /// let solution = Word::new("spray").unwrap();
    /// let feedback = Feedback::calculate(&guess, &solution);
    ///
    /// assert_eq!(
    ///     feedback.tiles(),
    ///     &[Tile::Present, Tile::Absent, Tile::Present, Tile::Present, Tile::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let mut result = [Tile::Absent; WORD_LENGTH];
        let mut available = solution.char_counts();

        // Allow: Index needed to compare guess[i] with solution[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.chars()[i];
            if letter == solution.chars()[i] {
                result[i] = Tile::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i] == Tile::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                result[i] = Tile::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// The tiles in guess order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.0
    }

    /// Check if every tile is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Number of tiles with the given classification
    #[must_use]
    pub fn count(self, tile: Tile) -> usize {
        self.0.iter().filter(|&&t| t == tile).count()
    }

    /// Render as a row of share emoji, e.g. "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|t| t.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse a compact form like "GY-GY" or "🟩🟨⬛🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid feedback string: {s}"));
        }

        let mut tiles = [Tile::Absent; WORD_LENGTH];
        for (tile, ch) in tiles.iter_mut().zip(chars) {
            *tile = match ch {
                'G' | 'g' | '🟩' => Tile::Correct,
                'Y' | 'y' | '🟨' => Tile::Present,
                '-' | '_' | '⬛' => Tile::Absent,
                _ => return Err(format!("Invalid feedback string: {s}")),
            };
        }

        Ok(Self(tiles))
    }
}

/// Classify `guess` against `solution`
///
/// Convenience wrapper around [`Feedback::calculate`].
#[must_use]
pub fn classify(guess: &Word, solution: &Word) -> Feedback {
    Feedback::calculate(guess, solution)
}
