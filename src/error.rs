//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank label is not one of 2-10, J, Q, K, A.
    #[error("invalid rank")]
    InvalidRank,
}

/// Errors that can occur during deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Attempted to draw from a deck with no cards.
    #[error("deck is empty")]
    EmptyDeck,
    /// Peeked beyond the current length of the deck.
    #[error("index out of range")]
    IndexOutOfRange,
    /// Not enough cards to pay a penalty.
    #[error("not enough cards for the penalty")]
    InsufficientCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The game has already ended.
    #[error("game is over")]
    GameOver,
    /// Not this side's turn.
    #[error("not this side's turn")]
    NotYourTurn,
    /// The acting side has no cards left.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors raised while the engine talks to its input and display collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError<I, D> {
    /// Reading a key failed.
    #[error("input failed: {0}")]
    Input(I),
    /// Rendering the board or a notice failed.
    #[error("display failed: {0}")]
    Display(D),
}
