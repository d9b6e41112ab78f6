//! Pattern detection on the discard pile.

use core::fmt;

use crate::deck::Deck;

/// A slap event raised by the top of the discard pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileEvent {
    /// The two top cards share a rank.
    Double,
    /// The top card and the third card share a rank.
    Sandwich,
}

impl fmt::Display for PileEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Double => f.write_str("Double"),
            Self::Sandwich => f.write_str("Sandwich"),
        }
    }
}

/// Classification of the discard pile after a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detection {
    /// No slap event.
    NoEvent,
    /// Only a Double.
    Double,
    /// Only a Sandwich.
    Sandwich,
    /// A Double and a Sandwich at once (three matching cards on top).
    DoubleAndSandwich,
}

impl Detection {
    /// Returns the detected events in the order they are resolved: Double first.
    pub fn events(self) -> impl Iterator<Item = PileEvent> {
        let (double, sandwich) = match self {
            Self::NoEvent => (false, false),
            Self::Double => (true, false),
            Self::Sandwich => (false, true),
            Self::DoubleAndSandwich => (true, true),
        };

        double
            .then_some(PileEvent::Double)
            .into_iter()
            .chain(sandwich.then_some(PileEvent::Sandwich))
    }

    /// Returns whether any event was detected.
    #[must_use]
    pub const fn is_event(self) -> bool {
        !matches!(self, Self::NoEvent)
    }
}

/// Returns whether the two top cards of the pile share a rank.
#[must_use]
pub fn is_double(pile: &Deck) -> bool {
    match (pile.peek_from_top(0), pile.peek_from_top(1)) {
        (Ok(top), Ok(second)) => top.matches(second),
        _ => false,
    }
}

/// Returns whether the top card and the third card of the pile share a rank.
///
/// The middle card is ignored.
#[must_use]
pub fn is_sandwich(pile: &Deck) -> bool {
    match (pile.peek_from_top(0), pile.peek_from_top(2)) {
        (Ok(top), Ok(third)) => top.matches(third),
        _ => false,
    }
}

/// Classifies the discard pile using its top three cards.
///
/// # Example
///
/// ```
/// use slaprs::{Card, Deck, Detection, Rank, detect};
///
/// let pile = Deck::from_top(&[
///     Card::new(Rank::Two),
///     Card::new(Rank::Five),
///     Card::new(Rank::Two),
/// ]);
/// assert_eq!(detect(&pile), Detection::Sandwich);
/// ```
#[must_use]
pub fn detect(pile: &Deck) -> Detection {
    match (is_double(pile), is_sandwich(pile)) {
        (false, false) => Detection::NoEvent,
        (true, false) => Detection::Double,
        (false, true) => Detection::Sandwich,
        (true, true) => Detection::DoubleAndSandwich,
    }
}
