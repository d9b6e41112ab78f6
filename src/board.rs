//! Board snapshots and on-screen messages.

use core::fmt;

use crate::card::Card;
use crate::event::PileEvent;
use crate::game::{EndReason, Side};

/// Control legend shown under the board.
pub const CONTROLS: &str = "Press d to draw\nPress s to slap\nPress i for instructions\nPress q to quit";

/// Instruction lines shown at start and on `i`.
pub const INSTRUCTIONS: [&str; 12] = [
    "Instructions:",
    "There are two players, you and the computer.",
    "Each player starts with 26 cards from a randomly shuffled 52 card deck.",
    "You take turns drawing a card, by pressing d, onto a discard pile.",
    "If the two top cards of the discard pile match, a Double is triggered.",
    "If the top card matches the card two below it, a Sandwich is triggered.",
    "When this happens, press s to slap the discard pile.",
    "Slap within the time limit and the discard pile is added to your deck.",
    "Slap too late, or press another key, and it goes to the computer.",
    "Don't press s outside of a slap event, or you lose three cards to the pile.",
    "The loser is whoever runs out of cards first.",
    "To quit early press q. To see the instructions again, press i.",
];

/// What the board shows at one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Cards left in the opponent's deck.
    pub opponent_cards: usize,
    /// Top of the discard pile, if it has any cards.
    pub top_card: Option<Card>,
    /// Cards left in the human's deck.
    pub player_cards: usize,
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🃏 computer {}", self.opponent_cards)?;
        if let Some(card) = self.top_card {
            writeln!(f, "{card}")?;
        } else {
            writeln!(f)?;
        }
        writeln!(f, "🃏 you {}", self.player_cards)?;
        writeln!(f)?;
        f.write_str(CONTROLS)
    }
}

/// A message for the human.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Shown once before the game starts.
    StartPrompt,
    /// The instruction text.
    Instructions,
    /// Waits for any key.
    PressAnyKey,
    /// Follows the instructions during play.
    InstructionsPrompt,
    /// Who won a slap window.
    SlapResult {
        /// The event that opened the window.
        event: PileEvent,
        /// Who took the pile.
        winner: Side,
    },
    /// A false slap cost cards.
    Penalty {
        /// Who slapped.
        side: Side,
        /// Cards moved onto the discard pile.
        cards: usize,
    },
    /// A false slap with too few cards to pay.
    InsufficientCards {
        /// Who slapped.
        side: Side,
    },
    /// `D` was pressed.
    CapsLock,
    /// An unmapped key was pressed.
    WrongKey,
    /// The game ended.
    GameOver(EndReason),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartPrompt => f.write_str("Ready to start? Press any key to begin"),
            Self::Instructions => {
                for line in INSTRUCTIONS {
                    writeln!(f, "{line}")?;
                }
                Ok(())
            }
            Self::PressAnyKey => f.write_str("Press any key to continue."),
            Self::InstructionsPrompt => {
                f.write_str("Press q to quit. Press any other key to continue game")
            }
            Self::SlapResult { event, winner } => match winner {
                Side::Player => write!(f, "You slapped first on the {event}."),
                Side::Opponent => write!(f, "Computer slapped first on the {event}."),
            },
            Self::Penalty { side, cards } => match side {
                Side::Player => write!(
                    f,
                    "Oh no. You slapped at the wrong time. {cards} of your cards have been added to the discard pile."
                ),
                Side::Opponent => write!(
                    f,
                    "The computer slapped at the wrong time. {cards} of its cards have been added to the discard pile."
                ),
            },
            Self::InsufficientCards { side } => match side {
                Side::Player => f.write_str(
                    "Oh no. You slapped at the wrong time. You don't have enough cards to add to the discard pile.",
                ),
                Side::Opponent => f.write_str(
                    "The computer slapped at the wrong time without enough cards to add to the discard pile.",
                ),
            },
            Self::CapsLock => f.write_str("Caps lock is on."),
            Self::WrongKey => f.write_str("Wrong key :)"),
            Self::GameOver(reason) => fmt::Display::fmt(reason, f),
        }
    }
}
