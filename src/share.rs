//! Shareable result text and export targets
//!
//! The share text is the game title followed by one emoji row per submitted
//! guess:
//!
//! ```text
//! Valordle
//! 🟨⬛🟨⬛⬛
//! 🟩🟩🟩🟩🟩
//! ```

use crate::core::GAME_TITLE;
use crate::game::GameState;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to hand the share text to its destination
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write {}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Format the share text for a game
///
/// # Examples
/// ```
/// use valordle::core::Word;
/// use valordle::game::GameState;
/// use valordle::share::share_text;
///
/// let state = GameState::new(Word::new("spray").unwrap());
/// assert_eq!(share_text(&state), "Valordle\n");
/// ```
#[must_use]
pub fn share_text(state: &GameState) -> String {
    let lines: Vec<String> = state
        .feedback()
        .map(|(_, feedback)| feedback.to_emoji())
        .collect();

    format!("{GAME_TITLE}\n{}", lines.join("\n"))
}

/// Destination for share text
pub trait Exporter {
    /// Hand `text` to the destination
    ///
    /// # Errors
    /// Returns `ExportError` if the destination rejects the text.
    fn export(&mut self, text: &str) -> Result<(), ExportError>;

    /// Human-readable description of where the text went
    fn describe(&self) -> String;
}

/// Writes share text to a file, replacing previous contents
#[derive(Debug, Clone)]
pub struct FileExporter {
    path: PathBuf,
}

impl FileExporter {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Exporter for FileExporter {
    fn export(&mut self, text: &str) -> Result<(), ExportError> {
        fs::write(&self.path, text).map_err(|source| ExportError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Export the share text of `state`, reporting a user-facing message
///
/// Success and failure are both turned into a single line; there is no retry.
///
/// # Errors
/// Returns the failure message if the exporter rejects the text.
pub fn export_results<E: Exporter + ?Sized>(
    state: &GameState,
    exporter: &mut E,
) -> Result<String, String> {
    let text = share_text(state);
    match exporter.export(&text) {
        Ok(()) => {
            log::info!("results exported to {}", exporter.describe());
            Ok(format!("✅ Results saved to {}", exporter.describe()))
        }
        Err(err) => {
            log::warn!("export failed: {err}");
            Err(format!("❌ Export failed: {err}"))
        }
    }
}
