//! In-memory session statistics

use crate::core::MAX_TURNS;

/// Win counts for the current session; never persisted
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Index `n` counts wins on turn `n` (index 0 unused)
    pub guess_distribution: [usize; MAX_TURNS + 1],
}

impl Statistics {
    pub fn record_win(&mut self, turns: usize) {
        self.games_played += 1;
        self.games_won += 1;
        if let Some(slot) = self.guess_distribution.get_mut(turns) {
            *slot += 1;
        }
    }

    /// Count an abandoned game that had at least one guess
    pub fn record_abandoned(&mut self) {
        self.games_played += 1;
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
