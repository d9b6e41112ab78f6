//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::BoardSnapshot;
use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::options::GameOptions;

mod actions;
mod engine;
pub mod state;

pub use actions::Penalty;
pub use engine::TurnEngine;
pub use state::{EndReason, GameState, Side};

/// A slap game: both players' decks, the discard pile, and whose turn it is.
///
/// The decks are public so callers can inspect or rig them, but during play
/// the game is advanced only through its actions or a [`TurnEngine`].
#[derive(Debug, Clone)]
pub struct Game {
    /// The human's deck.
    pub player_deck: Deck,
    /// The opponent's deck.
    pub opponent_deck: Deck,
    /// The shared discard pile.
    pub discard_pile: Deck,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Completed turns.
    turns: usize,
    /// Random number generator for every shuffle in the game.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// A full deck is shuffled and dealt alternately, one card to the human
    /// then one to the opponent, until it runs out.
    ///
    /// # Example
    ///
    /// ```
    /// use slaprs::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.player_deck.len(), 26);
    /// assert_eq!(game.opponent_deck.len(), 26);
    /// assert_eq!(game.state(), GameState::PlayerTurn);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::full();
        deck.shuffle(&mut rng);

        let mut player_deck = Deck::empty();
        let mut opponent_deck = Deck::empty();
        while let Ok(card) = deck.draw_top() {
            player_deck.add_bottom(card);
            if let Ok(card) = deck.draw_top() {
                opponent_deck.add_bottom(card);
            }
        }

        Self {
            player_deck,
            opponent_deck,
            discard_pile: Deck::empty(),
            options,
            state: GameState::PlayerTurn,
            turns: 0,
            rng,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns whether the game has ended.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, GameState::GameOver(_))
    }

    /// Returns the number of completed turns.
    #[must_use]
    pub const fn turns(&self) -> usize {
        self.turns
    }

    /// Returns the deck belonging to `side`.
    #[must_use]
    pub const fn deck(&self, side: Side) -> &Deck {
        match side {
            Side::Player => &self.player_deck,
            Side::Opponent => &self.opponent_deck,
        }
    }

    /// Returns the total number of cards in play. Always [`DECK_SIZE`] after setup.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.player_deck.len() + self.opponent_deck.len() + self.discard_pile.len()
    }

    /// Returns whether every card is still accounted for.
    #[must_use]
    pub fn cards_conserved(&self) -> bool {
        self.total_cards() == DECK_SIZE
    }

    /// Returns what the board currently shows.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            opponent_cards: self.opponent_deck.len(),
            top_card: self.discard_pile.top(),
            player_cards: self.player_deck.len(),
        }
    }

    /// Enters the current turn, ending the game if the side to act has no cards.
    ///
    /// An empty human deck loses the game; an empty opponent deck wins it.
    /// Returns the resulting state.
    pub fn enter_turn(&mut self) -> GameState {
        let Some(side) = self.state.active_side() else {
            return self.state;
        };

        if self.deck(side).is_empty() {
            let reason = match side {
                Side::Player => EndReason::PlayerLost,
                Side::Opponent => EndReason::PlayerWon,
            };
            log::info!("{side:?} has no cards at turn entry: {reason}");
            self.state = GameState::GameOver(reason);
        }
        self.state
    }

    /// Passes the turn to the other side.
    pub fn end_turn(&mut self) {
        if let Some(side) = self.state.active_side() {
            self.turns += 1;
            self.state = GameState::turn_of(side.other());
        }
    }

    /// Ends the game early.
    pub fn quit(&mut self) {
        if !self.is_over() {
            log::info!("game exited early after {} turns", self.turns);
            self.state = GameState::GameOver(EndReason::ExitedEarly);
        }
    }

    fn deck_mut(&mut self, side: Side) -> &mut Deck {
        match side {
            Side::Player => &mut self.player_deck,
            Side::Opponent => &mut self.opponent_deck,
        }
    }
}
