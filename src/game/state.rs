//! Game state and the transition function
//!
//! [`GameState`] is a plain value. [`reduce`] and [`GameState::apply`] are the
//! only ways it changes, so every rule of the game lives in this file.

use super::event::{Event, Transition};
use crate::core::{Feedback, MAX_TURNS, Tile, WORD_LENGTH, Word, classify};
use crate::wordlists::WordList;
use log::{debug, info, trace};
use rand::Rng;
use rustc_hash::FxHashMap;

/// Whether the game still accepts guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Over,
}

/// Full session state for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    solution: Word,
    history: [Option<Word>; MAX_TURNS],
    current_guess: String,
    is_over: bool,
}

/// How a board row should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Submitted,
    Current,
    Empty,
}

/// Read-only projection of one board row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    pub letters: String,
    pub feedback: Option<Feedback>,
}

impl GameState {
    /// Fresh game with the given solution
    #[must_use]
    pub fn new(solution: Word) -> Self {
        Self {
            solution,
            history: Default::default(),
            current_guess: String::new(),
            is_over: false,
        }
    }

    /// Fresh game with a solution drawn from `words`
    #[must_use]
    pub fn random<R: Rng + ?Sized>(words: &WordList, rng: &mut R) -> Self {
        let solution = words.choose(rng).clone();
        trace!("solution chosen: {solution}");
        Self::new(solution)
    }

    #[must_use]
    pub const fn solution(&self) -> &Word {
        &self.solution
    }

    /// All slots, filled in order from index 0
    #[must_use]
    pub const fn history(&self) -> &[Option<Word>; MAX_TURNS] {
        &self.history
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.is_over
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        if self.is_over {
            Status::Over
        } else {
            Status::InProgress
        }
    }

    /// Submitted guesses in order
    pub fn guesses(&self) -> impl Iterator<Item = &Word> {
        self.history.iter().map_while(Option::as_ref)
    }

    /// Number of filled slots
    #[must_use]
    pub fn turns_used(&self) -> usize {
        self.guesses().count()
    }

    /// Index of the next empty slot, if any
    #[must_use]
    pub fn next_slot(&self) -> Option<usize> {
        self.history.iter().position(Option::is_none)
    }

    /// Feedback for every submitted guess
    pub fn feedback(&self) -> impl Iterator<Item = (&Word, Feedback)> {
        self.guesses()
            .map(|guess| (guess, classify(guess, &self.solution)))
    }

    /// Board projection: one row per slot
    ///
    /// While the game is in progress the first empty slot shows the guess
    /// being composed.
    #[must_use]
    pub fn rows(&self) -> Vec<Row> {
        let current = if self.is_over { None } else { self.next_slot() };

        self.history
            .iter()
            .enumerate()
            .map(|(i, slot)| match slot {
                Some(guess) => Row {
                    kind: RowKind::Submitted,
                    letters: guess.text().to_string(),
                    feedback: Some(classify(guess, &self.solution)),
                },
                None if Some(i) == current => Row {
                    kind: RowKind::Current,
                    letters: self.current_guess.clone(),
                    feedback: None,
                },
                None => Row {
                    kind: RowKind::Empty,
                    letters: String::new(),
                    feedback: None,
                },
            })
            .collect()
    }

    /// Best classification seen so far for each guessed letter
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<char, Tile> {
        let mut hints = FxHashMap::default();
        for (guess, feedback) in self.feedback() {
            for (&letter, &tile) in guess.chars().iter().zip(feedback.tiles()) {
                let best = hints.entry(char::from(letter)).or_insert(tile);
                *best = (*best).max(tile);
            }
        }
        hints
    }

    /// Apply one event in place
    ///
    /// Every event whose preconditions fail is ignored and reported as
    /// [`Transition::Ignored`]; this never errors.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        event: Event,
        words: &WordList,
        rng: &mut R,
    ) -> Transition {
        let transition = match event {
            Event::Restart => {
                *self = Self::random(words, rng);
                info!("new game started");
                Transition::Restarted
            }
            _ if self.is_over => Transition::Ignored,
            Event::TypeLetter(c) => self.type_letter(c),
            Event::Backspace => match self.current_guess.pop() {
                Some(_) => Transition::Erased,
                None => Transition::Ignored,
            },
            Event::Submit => self.submit(),
        };

        if transition.is_applied() {
            debug!("{event:?} -> {transition:?}");
        } else {
            debug!("{event:?} ignored");
        }
        transition
    }

    fn type_letter(&mut self, c: char) -> Transition {
        if self.current_guess.len() >= WORD_LENGTH || !c.is_ascii_alphabetic() {
            return Transition::Ignored;
        }
        let c = c.to_ascii_lowercase();
        self.current_guess.push(c);
        Transition::Typed(c)
    }

    fn submit(&mut self) -> Transition {
        if self.current_guess.len() != WORD_LENGTH {
            return Transition::Ignored;
        }
        // Six misses leave nowhere to write; the game stays in progress
        let Some(slot) = self.next_slot() else {
            return Transition::Ignored;
        };
        // Only ASCII letters are ever typed, so this cannot fail
        let Ok(guess) = Word::new(std::mem::take(&mut self.current_guess)) else {
            return Transition::Ignored;
        };

        let turn = slot + 1;
        let won = guess == self.solution;
        let feedback = classify(&guess, &self.solution);
        self.history[slot] = Some(guess);

        if won {
            self.is_over = true;
            info!("solved on turn {turn}");
            Transition::Won { turns: turn }
        } else {
            Transition::Submitted { turn, feedback }
        }
    }
}

/// Pure transition: consume a state and an event, return the next state
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use valordle::core::Word;
/// use valordle::game::{Event, GameState, Status, reduce};
/// use valordle::wordlists::WordList;
///
/// let words = WordList::from_strs(&["ghost"]).unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let mut state = GameState::new(Word::new("ghost").unwrap());
/// for event in Event::word("ghost") {
///     state = reduce(state, event, &words, &mut rng);
/// }
/// assert_eq!(state.status(), Status::Over);
/// ```
#[must_use]
pub fn reduce<R: Rng + ?Sized>(
    mut state: GameState,
    event: Event,
    words: &WordList,
    rng: &mut R,
) -> GameState {
    state.apply(event, words, rng);
    state
}
