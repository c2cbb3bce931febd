//! Core domain types for Valordle
//!
//! This module contains the fundamental game types: validated words and the
//! per-tile feedback produced by evaluating a guess. Everything here is pure
//! and deterministic.

mod feedback;
mod word;

pub use feedback::{Feedback, Tile, classify};
pub use word::{Word, WordError};

/// Number of letters in every solution and submitted guess
pub const WORD_LENGTH: usize = 5;

/// Number of guess slots on the board
pub const MAX_TURNS: usize = 6;

/// Title shown in the UI and at the top of shared results
pub const GAME_TITLE: &str = "Valordle";
