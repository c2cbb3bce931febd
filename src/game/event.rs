//! Input events and their observable effects

use crate::core::Feedback;

/// A discrete input event consumed by the game state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A typed character; only ASCII letters are accepted
    TypeLetter(char),
    Backspace,
    Submit,
    Restart,
}

impl Event {
    /// Map a line of text onto the events that would type and submit it
    ///
    /// Useful for line-oriented front ends and tests.
    ///
    /// # Examples
    /// ```
    /// use valordle::game::Event;
    ///
    /// let events = Event::word("ab");
    /// assert_eq!(
    ///     events,
    ///     vec![Event::TypeLetter('a'), Event::TypeLetter('b'), Event::Submit]
    /// );
    /// ```
    #[must_use]
    pub fn word(text: &str) -> Vec<Self> {
        text.chars()
            .map(Self::TypeLetter)
            .chain(std::iter::once(Self::Submit))
            .collect()
    }
}

/// What applying an event did to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Preconditions did not hold; state unchanged
    Ignored,
    Typed(char),
    Erased,
    /// A non-winning guess was recorded in slot `turn - 1`
    Submitted { turn: usize, feedback: Feedback },
    /// The guess matched the solution on turn `turns`
    Won { turns: usize },
    Restarted,
}

impl Transition {
    /// Whether the event changed the state
    #[must_use]
    pub const fn is_applied(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
