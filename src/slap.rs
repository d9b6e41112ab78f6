//! Slap window resolution.

use core::time::Duration;

use rand::Rng;

use crate::deck::Deck;
use crate::event::PileEvent;
use crate::game::Side;
use crate::io::{Key, Reaction};

/// Result of one slap window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlapOutcome {
    /// The event that opened the window.
    pub event: PileEvent,
    /// Who took the pile.
    pub winner: Side,
    /// How many cards changed hands.
    pub cards_won: usize,
}

/// Decides who wins a slap window.
///
/// The human wins only with a slap that arrives strictly before `wait_time`.
/// A late slap, any other key, or no key at all hands the pile to the opponent.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use slaprs::{Key, Reaction, Side, slap_winner};
///
/// let wait = Duration::from_secs(1);
/// let on_time = Reaction::Pressed { key: Key::Slap, elapsed: Duration::from_millis(999) };
/// let late = Reaction::Pressed { key: Key::Slap, elapsed: wait };
/// assert_eq!(slap_winner(on_time, wait), Side::Player);
/// assert_eq!(slap_winner(late, wait), Side::Opponent);
/// ```
#[must_use]
pub fn slap_winner(reaction: Reaction, wait_time: Duration) -> Side {
    match reaction {
        Reaction::Pressed {
            key: Key::Slap,
            elapsed,
        } if elapsed < wait_time => Side::Player,
        _ => Side::Opponent,
    }
}

/// Moves the whole discard pile to the bottom of `winner`, oldest discard
/// first, then shuffles the winner's deck once.
///
/// Returns the number of cards moved. The pile is left empty.
pub fn award_pile<R: Rng + ?Sized>(pile: &mut Deck, winner: &mut Deck, rng: &mut R) -> usize {
    let cards = pile.take_oldest_first();
    let count = cards.len();
    for card in cards {
        winner.add_bottom(card);
    }
    winner.shuffle(rng);
    count
}
