//! Game state types.

use core::fmt;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Opponent,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// The human ran out of cards on their turn.
    PlayerLost,
    /// The opponent ran out of cards on its turn.
    PlayerWon,
    /// The human quit before the game finished.
    ExitedEarly,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerLost => f.write_str("Sorry player, you lost"),
            Self::PlayerWon => f.write_str("Congrats player, you won"),
            Self::ExitedEarly => f.write_str("You exited early"),
        }
    }
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the human to act.
    PlayerTurn,
    /// The opponent acts.
    OpponentTurn,
    /// The game has ended.
    GameOver(EndReason),
}

impl GameState {
    /// Returns the state in which `side` is to act.
    #[must_use]
    pub const fn turn_of(side: Side) -> Self {
        match side {
            Side::Player => Self::PlayerTurn,
            Side::Opponent => Self::OpponentTurn,
        }
    }

    /// Returns the side to act, or `None` once the game is over.
    #[must_use]
    pub const fn active_side(self) -> Option<Side> {
        match self {
            Self::PlayerTurn => Some(Side::Player),
            Self::OpponentTurn => Some(Side::Opponent),
            Self::GameOver(_) => None,
        }
    }
}
