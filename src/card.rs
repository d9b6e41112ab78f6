//! Card types.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card rank. Suits are not modeled; two cards match when their ranks match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

/// All ranks in deck-building order.
pub const RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

impl Rank {
    /// Returns the short label used on the board ("2".."10", "J", "Q", "K", "A").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RANKS
            .iter()
            .copied()
            .find(|rank| rank.label() == s)
            .ok_or(CardError::InvalidRank)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank) -> Self {
        Self { rank }
    }

    /// Parses a card from its rank label.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the label is not one of the 13 ranks.
    ///
    /// # Example
    ///
    /// ```
    /// use slaprs::{Card, CardError, Rank};
    ///
    /// assert_eq!(Card::parse("Q").unwrap().rank(), Rank::Queen);
    /// assert_eq!(Card::parse("1"), Err(CardError::InvalidRank));
    /// ```
    pub fn parse(label: &str) -> Result<Self, CardError> {
        label.parse().map(Self::new)
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// Returns whether two cards share a rank.
    #[must_use]
    pub fn matches(self, other: Self) -> bool {
        self.rank == other.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rank, f)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
