use crate::deck::Deck;
use crate::error::{ActionError, DeckError};
use crate::event::{Detection, PileEvent, detect};
use crate::io::Reaction;
use crate::slap::{SlapOutcome, award_pile, slap_winner};

use super::{Game, Side};

/// What a false slap cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalty {
    /// The penalty was paid in full.
    Paid {
        /// Cards moved onto the discard pile.
        cards: usize,
    },
    /// Too few cards to pay; the whole deck went to the discard pile instead.
    Forfeited {
        /// Cards moved onto the discard pile.
        cards: usize,
    },
}

impl Game {
    fn ensure_turn(&self, side: Side) -> Result<(), ActionError> {
        match self.state.active_side() {
            None => Err(ActionError::GameOver),
            Some(active) if active != side => Err(ActionError::NotYourTurn),
            Some(_) => Ok(()),
        }
    }

    /// Moves the top card of `side`'s deck onto the discard pile and
    /// classifies the pile.
    ///
    /// The turn does not pass; call [`Game::end_turn`] once any slap windows
    /// have been resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, it is not `side`'s turn, or
    /// `side` has no cards.
    pub fn draw(&mut self, side: Side) -> Result<Detection, ActionError> {
        self.ensure_turn(side)?;

        // `draw_top` fails only on an empty deck.
        let card = self
            .deck_mut(side)
            .draw_top()
            .map_err(|_: DeckError| ActionError::EmptyDeck)?;
        self.discard_pile.insert_top(card);

        let detection = detect(&self.discard_pile);
        log::debug!(
            "{side:?} drew {card}, pile has {} cards: {detection:?}",
            self.discard_pile.len()
        );
        Ok(detection)
    }

    /// Settles one slap window and hands the discard pile to the winner.
    ///
    /// The winner's deck is shuffled after the transfer. If the pile is
    /// already empty, only the shuffle happens.
    pub fn resolve_slap(&mut self, event: PileEvent, reaction: Reaction) -> SlapOutcome {
        let winner = slap_winner(reaction, self.options.wait_time);
        let deck = match winner {
            Side::Player => &mut self.player_deck,
            Side::Opponent => &mut self.opponent_deck,
        };
        let cards_won = award_pile(&mut self.discard_pile, deck, &mut self.rng);

        log::debug!("{winner:?} won the {event} ({cards_won} cards) after {reaction:?}");
        SlapOutcome {
            event,
            winner,
            cards_won,
        }
    }

    /// Applies the penalty for slapping when no event is pending.
    ///
    /// With enough cards, [`GameOptions::penalty_cards`](crate::GameOptions)
    /// cards move from the top of `side`'s deck onto the discard pile. With
    /// fewer, every remaining card moves there instead, so `side` loses when
    /// its turn is next entered. The penalty is never less than one card.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over or it is not `side`'s turn.
    pub fn false_slap(&mut self, side: Side) -> Result<Penalty, ActionError> {
        self.ensure_turn(side)?;

        let count = self.options.penalty_cards.max(1);
        let source = match side {
            Side::Player => &mut self.player_deck,
            Side::Opponent => &mut self.opponent_deck,
        };

        if Deck::penalize_n(source, &mut self.discard_pile, count).is_ok() {
            log::info!("{side:?} paid a {count}-card penalty");
            return Ok(Penalty::Paid { cards: count });
        }

        let mut cards = 0;
        while let Ok(card) = source.draw_top() {
            self.discard_pile.insert_top(card);
            cards += 1;
        }
        log::warn!("{side:?} could not pay the penalty and forfeited {cards} cards");
        Ok(Penalty::Forfeited { cards })
    }
}
