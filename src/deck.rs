//! Ordered card piles.
//!
//! A [`Deck`] is read front to back: the front is the top of the pile, the
//! next card to be drawn and the place where [`Deck::insert_top`] lands.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, RANKS};
use crate::error::DeckError;

/// Number of cards moved by a false slap.
pub const PENALTY_CARDS: usize = 3;

/// An ordered pile of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Creates an unshuffled 52-card deck holding four cards of every rank.
    #[must_use]
    pub fn full() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for _ in 0..4 {
            for rank in RANKS {
                cards.push_back(Card::new(rank));
            }
        }
        Self { cards }
    }

    /// Builds a deck from cards listed top first.
    #[must_use]
    pub fn from_top(cards: &[Card]) -> Self {
        Self {
            cards: cards.iter().copied().collect(),
        }
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates the cards from top to bottom.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Card> + ExactSizeIterator {
        self.cards.iter()
    }

    /// Returns the top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.front().copied()
    }

    /// Shuffles the cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if there are no cards.
    pub fn draw_top(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::EmptyDeck)
    }

    /// Puts a card at the bottom.
    pub fn add_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Puts a card on top.
    pub fn insert_top(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    /// Returns the card `offset` places below the top.
    ///
    /// Offset 0 is the top card. Negative offsets count up from the bottom,
    /// so -1 is the bottom card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] if the offset reaches past either end.
    ///
    /// # Example
    ///
    /// ```
    /// use slaprs::{Card, Deck, Rank};
    ///
    /// let deck = Deck::from_top(&[Card::new(Rank::Ace), Card::new(Rank::Two)]);
    /// assert_eq!(deck.peek_from_top(0).unwrap().rank(), Rank::Ace);
    /// assert_eq!(deck.peek_from_top(-1).unwrap().rank(), Rank::Two);
    /// assert!(deck.peek_from_top(2).is_err());
    /// ```
    pub fn peek_from_top(&self, offset: isize) -> Result<Card, DeckError> {
        let index = if offset < 0 {
            self.cards.len().checked_sub(offset.unsigned_abs())
        } else {
            Some(offset.unsigned_abs())
        };

        index
            .and_then(|index| self.cards.get(index))
            .copied()
            .ok_or(DeckError::IndexOutOfRange)
    }

    /// Moves [`PENALTY_CARDS`] cards from the top of `source` onto `destination`.
    ///
    /// Cards are inserted one at a time, so they land in reverse order: the
    /// card that was on top of `source` ends up deepest of the three.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] without moving anything if
    /// `source` holds fewer than [`PENALTY_CARDS`] cards.
    pub fn penalize(source: &mut Self, destination: &mut Self) -> Result<(), DeckError> {
        Self::penalize_n(source, destination, PENALTY_CARDS)
    }

    pub(crate) fn penalize_n(
        source: &mut Self,
        destination: &mut Self,
        count: usize,
    ) -> Result<(), DeckError> {
        if source.len() < count {
            return Err(DeckError::InsufficientCards);
        }

        for card in source.cards.drain(..count) {
            destination.cards.push_front(card);
        }

        Ok(())
    }

    /// Removes every card, returning them from the bottom of the pile to the top.
    pub fn take_oldest_first(&mut self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.cards.drain(..).collect();
        cards.reverse();
        cards
    }

    /// Counts the cards of each rank, indexed like [`RANKS`].
    #[must_use]
    pub fn rank_counts(&self) -> [usize; 13] {
        let mut counts = [0; 13];
        for card in &self.cards {
            counts[card.rank() as usize] += 1;
        }
        counts
    }
}
