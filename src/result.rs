//! End-of-game summary.

use crate::game::EndReason;

/// Summary returned when a game finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    /// Why the game ended.
    pub reason: EndReason,
    /// Completed turns, counting both sides.
    pub turns: usize,
    /// Slap windows won by the human.
    pub slaps_won: usize,
    /// Slap windows lost by the human.
    pub slaps_lost: usize,
    /// False slaps by the human.
    pub penalties: usize,
    /// Cards in the human's deck at the end.
    pub player_cards: usize,
    /// Cards in the opponent's deck at the end.
    pub opponent_cards: usize,
}
