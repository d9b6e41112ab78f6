//! The turn loop: reads keys, drives the game, and reports to the display.

use core::time::Duration;

use crate::board::Notice;
use crate::error::EngineError;
use crate::io::{DisplaySink, InputSource, Key};
use crate::policy::{AlwaysDraw, Policy};
use crate::result::GameSummary;

use super::{EndReason, Game, GameState, Penalty, Side};

type EngineResult<T, I, D> =
    Result<T, EngineError<<I as InputSource>::Error, <D as DisplaySink>::Error>>;

/// Drives a [`Game`] from an [`InputSource`] to a [`DisplaySink`].
///
/// The human's keys come from the input; the opponent's come from a
/// [`Policy`]. Every slap window is a single deadline-bounded read from the
/// input, whichever side drew the card that opened it.
#[derive(Debug)]
pub struct TurnEngine<I, D, P = AlwaysDraw> {
    game: Game,
    input: I,
    display: D,
    opponent: P,
    slaps_won: usize,
    slaps_lost: usize,
    penalties: usize,
}

impl<I: InputSource, D: DisplaySink> TurnEngine<I, D, AlwaysDraw> {
    /// Creates an engine with the scripted always-draw opponent.
    #[must_use]
    pub const fn new(game: Game, input: I, display: D) -> Self {
        Self::with_opponent(game, input, display, AlwaysDraw)
    }
}

impl<I: InputSource, D: DisplaySink, P: Policy> TurnEngine<I, D, P> {
    /// Creates an engine with a custom opponent policy.
    #[must_use]
    pub const fn with_opponent(game: Game, input: I, display: D, opponent: P) -> Self {
        Self {
            game,
            input,
            display,
            opponent,
            slaps_won: 0,
            slaps_lost: 0,
            penalties: 0,
        }
    }

    /// Returns the game being driven.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until the game ends.
    ///
    /// Shows the intro first when [`GameOptions::show_intro`](crate::GameOptions)
    /// is set, then renders the board and steps turn by turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the input or display fails. The game is left in
    /// the state it had reached.
    pub fn run(&mut self) -> EngineResult<GameSummary, I, D> {
        if self.game.options.show_intro {
            self.intro()?;
        }
        self.render()?;

        loop {
            if let GameState::GameOver(reason) = self.step()? {
                self.notify(Notice::GameOver(reason))?;
                return Ok(self.summary(reason));
            }
        }
    }

    /// Enters the current turn and handles one key for it.
    ///
    /// Returns the state afterwards. Once the game is over this reads nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the input or display fails.
    pub fn step(&mut self) -> EngineResult<GameState, I, D> {
        let Some(side) = self.game.enter_turn().active_side() else {
            return Ok(self.game.state());
        };

        let key = match side {
            Side::Player => self.read_key()?,
            Side::Opponent => self.opponent.next_key(&self.game),
        };
        self.dispatch(side, key)?;

        Ok(self.game.state())
    }

    /// Builds the summary for a finished game.
    #[must_use]
    pub fn summary(&self, reason: EndReason) -> GameSummary {
        GameSummary {
            reason,
            turns: self.game.turns(),
            slaps_won: self.slaps_won,
            slaps_lost: self.slaps_lost,
            penalties: self.penalties,
            player_cards: self.game.player_deck.len(),
            opponent_cards: self.game.opponent_deck.len(),
        }
    }

    fn dispatch(&mut self, side: Side, key: Key) -> EngineResult<(), I, D> {
        match key {
            Key::Draw => self.play_draw(side),
            Key::Slap => self.play_false_slap(side),
            Key::Instructions => self.show_instructions(),
            Key::Quit => {
                self.game.quit();
                Ok(())
            }
            Key::CapsLockDraw => self.notify(Notice::CapsLock),
            Key::Other => self.notify(Notice::WrongKey),
        }
    }

    fn play_draw(&mut self, side: Side) -> EngineResult<(), I, D> {
        let detection = match self.game.draw(side) {
            Ok(detection) => detection,
            Err(err) => {
                log::error!("{side:?} could not draw: {err}");
                return Ok(());
            }
        };
        self.render()?;

        if detection.is_event() {
            log::debug!("{side:?} opened {detection:?}");
        }
        for event in detection.events() {
            let reaction = self
                .input
                .read_key_with_deadline(self.game.options.wait_time)
                .map_err(EngineError::Input)?;
            let outcome = self.game.resolve_slap(event, reaction);
            match outcome.winner {
                Side::Player => self.slaps_won += 1,
                Side::Opponent => self.slaps_lost += 1,
            }

            self.render()?;
            self.notify(Notice::SlapResult {
                event,
                winner: outcome.winner,
            })?;
            self.pause(self.game.options.result_pause)?;
            self.discard_pending()?;
        }

        self.pause(self.game.options.turn_pause)?;
        if detection.is_event() {
            self.discard_pending()?;
        }
        self.game.end_turn();
        Ok(())
    }

    fn play_false_slap(&mut self, side: Side) -> EngineResult<(), I, D> {
        let penalty = match self.game.false_slap(side) {
            Ok(penalty) => penalty,
            Err(err) => {
                log::error!("{side:?} could not be penalized: {err}");
                return Ok(());
            }
        };
        if side == Side::Player {
            self.penalties += 1;
        }

        match penalty {
            Penalty::Paid { cards } => {
                self.render()?;
                self.notify(Notice::Penalty { side, cards })
            }
            Penalty::Forfeited { .. } => {
                self.notify(Notice::InsufficientCards { side })?;
                if side == Side::Player {
                    self.notify(Notice::PressAnyKey)?;
                    self.read_key()?;
                }
                self.render()
            }
        }
    }

    fn show_instructions(&mut self) -> EngineResult<(), I, D> {
        self.notify(Notice::Instructions)?;
        self.notify(Notice::InstructionsPrompt)?;

        if self.read_key()? == Key::Quit {
            self.game.quit();
            return Ok(());
        }
        self.render()
    }

    fn intro(&mut self) -> EngineResult<(), I, D> {
        self.notify(Notice::StartPrompt)?;
        self.read_key()?;
        self.notify(Notice::Instructions)?;
        self.notify(Notice::PressAnyKey)?;
        self.read_key()?;
        Ok(())
    }

    fn read_key(&mut self) -> EngineResult<Key, I, D> {
        self.input.read_key().map_err(EngineError::Input)
    }

    fn render(&mut self) -> EngineResult<(), I, D> {
        let board = self.game.snapshot();
        self.display.render(&board).map_err(EngineError::Display)
    }

    /// Keys that arrive after a slap window closed, while its result is
    /// still on screen, belong to that window and never to the next turn.
    fn discard_pending(&mut self) -> EngineResult<(), I, D> {
        self.input.discard_pending().map_err(EngineError::Input)
    }

    fn pause(&mut self, duration: Duration) -> EngineResult<(), I, D> {
        self.display.pause(duration).map_err(EngineError::Display)
    }

    fn notify(&mut self, notice: Notice) -> EngineResult<(), I, D> {
        self.display.notify(&notice).map_err(EngineError::Display)
    }
}
