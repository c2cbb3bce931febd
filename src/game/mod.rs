//! Game controller
//!
//! The state machine lives in [`state`]; [`Game`] owns one [`GameState`]
//! together with the word list and random source it needs for restarts, and
//! keeps the session statistics up to date.

mod event;
mod state;
mod stats;

pub use event::{Event, Transition};
pub use state::{GameState, Row, RowKind, Status, reduce};
pub use stats::Statistics;

use crate::wordlists::WordList;
use rand::Rng;

/// Single owner of the session state
pub struct Game<R> {
    state: GameState,
    words: WordList,
    rng: R,
    stats: Statistics,
}

impl<R: Rng> Game<R> {
    /// Start a game with a solution drawn from `words`
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use valordle::game::{Event, Game, Transition};
    /// use valordle::wordlists::WordList;
    ///
    /// let words = WordList::from_strs(&["spike"]).unwrap();
    /// let mut game = Game::new(words, StdRng::seed_from_u64(3));
    ///
    /// let last = game.handle_all(Event::word("spike"));
    /// assert_eq!(last, Transition::Won { turns: 1 });
    /// ```
    pub fn new(words: WordList, mut rng: R) -> Self {
        let state = GameState::random(&words, &mut rng);
        Self {
            state,
            words,
            rng,
            stats: Statistics::default(),
        }
    }

    /// Apply one input event
    pub fn handle(&mut self, event: Event) -> Transition {
        let abandoning = event == Event::Restart
            && !self.state.is_over()
            && self.state.turns_used() > 0;

        let transition = self.state.apply(event, &self.words, &mut self.rng);

        match transition {
            Transition::Won { turns } => self.stats.record_win(turns),
            Transition::Restarted if abandoning => self.stats.record_abandoned(),
            _ => {}
        }
        transition
    }

    /// Apply a sequence of events, returning the last transition
    pub fn handle_all<I: IntoIterator<Item = Event>>(&mut self, events: I) -> Transition {
        events
            .into_iter()
            .fold(Transition::Ignored, |_, event| self.handle(event))
    }
}

impl<R> Game<R> {
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game() -> Game<StdRng> {
        Game::new(WordList::embedded().unwrap(), StdRng::seed_from_u64(5))
    }

    fn other_word(solution: &Word) -> &'static str {
        if solution.text() == "ghost" { "judge" } else { "ghost" }
    }

    #[test]
    fn same_seed_same_solution() {
        assert_eq!(game().state().solution(), game().state().solution());
    }

    #[test]
    fn win_recorded_in_stats() {
        let mut game = game();
        let solution = game.state().solution().text().to_string();
        let miss = other_word(game.state().solution());

        game.handle_all(Event::word(miss));
        let last = game.handle_all(Event::word(&solution));

        assert_eq!(last, Transition::Won { turns: 2 });
        assert_eq!(game.stats().games_won, 1);
        assert_eq!(game.stats().guess_distribution[2], 1);
    }

    #[test]
    fn abandoned_game_counted_once() {
        let mut game = game();
        let miss = other_word(game.state().solution());

        game.handle_all(Event::word(miss));
        game.handle(Event::Restart);
        // A fresh game with no guesses is not counted
        game.handle(Event::Restart);

        assert_eq!(game.stats().games_played, 1);
        assert_eq!(game.stats().games_won, 0);
    }

    #[test]
    fn restart_after_win_not_counted_twice() {
        let mut game = game();
        let solution = game.state().solution().text().to_string();
        game.handle_all(Event::word(&solution));
        game.handle(Event::Restart);

        assert_eq!(game.stats().games_played, 1);
        assert_eq!(game.state().status(), Status::InProgress);
    }

    #[test]
    fn handle_all_empty_is_ignored() {
        let mut game = game();
        assert_eq!(game.handle_all(Vec::new()), Transition::Ignored);
    }
}
