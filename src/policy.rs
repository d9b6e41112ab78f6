//! Opponent behavior.

use crate::game::Game;
use crate::io::Key;

/// Chooses the key the opponent "presses" on its turn.
///
/// The engine dispatches the returned key exactly as it would a key read
/// from the human's input.
pub trait Policy {
    /// Picks the next key for the opponent.
    fn next_key(&mut self, game: &Game) -> Key;
}

/// The scripted opponent: it always draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysDraw;

impl Policy for AlwaysDraw {
    fn next_key(&mut self, _game: &Game) -> Key {
        Key::Draw
    }
}
