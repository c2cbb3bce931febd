//! Formatting utilities for terminal output

use crate::core::{Feedback, Tile, WORD_LENGTH};
use crate::game::{Row, RowKind};
use colored::{ColoredString, Colorize};

/// Plain-text name of a tile classification
#[must_use]
pub const fn tile_label(tile: Tile) -> &'static str {
    match tile {
        Tile::Correct => "correct",
        Tile::Present => "present",
        Tile::Absent => "absent",
    }
}

/// Celebration line for a win on the given turn
#[must_use]
pub const fn win_message(turns: usize) -> &'static str {
    match turns {
        1 => "🎯 First try! Headshot! 🌟",
        2 => "🔥 Two guesses! Ace! 🔥",
        3 => "✨ Three guesses! Clutch! ✨",
        4 => "👏 Four guesses! Nice! 👏",
        5 => "🎉 Five guesses! 🎉",
        _ => "😅 Phew! Got it in six! 😅",
    }
}

/// Comma-separated labels, e.g. "present, absent, present, absent, absent"
#[must_use]
pub fn feedback_labels(feedback: Feedback) -> String {
    feedback
        .tiles()
        .iter()
        .map(|&t| tile_label(t))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A single board tile: uppercase letter on a classification-coloured background
#[must_use]
pub fn paint_tile(letter: char, tile: Option<Tile>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match tile {
        Some(Tile::Correct) => text.black().on_green().bold(),
        Some(Tile::Present) => text.black().on_yellow().bold(),
        Some(Tile::Absent) => text.white().on_bright_black(),
        None => text.bright_white().bold(),
    }
}

/// One board row; missing letters are drawn as placeholders
#[must_use]
pub fn format_row(row: &Row) -> String {
    let letters: Vec<char> = row.letters.chars().collect();

    (0..WORD_LENGTH)
        .map(|i| match (letters.get(i), row.feedback) {
            (Some(&c), Some(feedback)) => paint_tile(c, Some(feedback.tiles()[i])).to_string(),
            (Some(&c), None) => paint_tile(c, None).to_string(),
            (None, _) if row.kind == RowKind::Current => " _ ".bright_white().to_string(),
            (None, _) => " · ".bright_black().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn labels_for_pearl() {
        let feedback: Feedback = "Y-YY-".parse().unwrap();
        assert_eq!(
            feedback_labels(feedback),
            "present, absent, present, present, absent"
        );
    }

    #[test]
    fn tile_uppercases_letter() {
        plain();
        assert_eq!(paint_tile('v', Some(Tile::Correct)).to_string(), " V ");
        assert_eq!(paint_tile('v', None).to_string(), " V ");
    }

    #[test]
    fn current_row_shows_placeholders() {
        plain();
        let row = Row {
            kind: RowKind::Current,
            letters: "sp".to_string(),
            feedback: None,
        };
        assert_eq!(format_row(&row), " S   P   _   _   _ ");
    }

    #[test]
    fn empty_row_uses_dots() {
        plain();
        let row = Row {
            kind: RowKind::Empty,
            letters: String::new(),
            feedback: None,
        };
        assert_eq!(format_row(&row), [" · "; 5].join(" "));
    }

    #[test]
    fn win_message_by_turn() {
        assert!(win_message(1).contains("First try"));
        assert!(win_message(6).contains("six"));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
