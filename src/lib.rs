//! Valordle
//!
//! A terminal word-guessing game: find the hidden five-letter word in six
//! tries, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use valordle::core::{Tile, Word, classify};
//!
//! let guess = Word::new("pearl").unwrap();
//! let solution = Word::new("spray").unwrap();
//!
//! let feedback = classify(&guess, &solution);
//! assert_eq!(feedback.tiles()[0], Tile::Present);
//! println!("{feedback}");
//! ```

// Core domain types
pub mod core;

// Game state machine and controller
pub mod game;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Share text and export
pub mod share;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
