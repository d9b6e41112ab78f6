//! Collaborator interfaces for key input and board output.
//!
//! The engine never reads a terminal or a clock directly. An [`InputSource`]
//! hands it keys, and for the slap window also reports how long the key took
//! to arrive. A [`DisplaySink`] receives board snapshots and notices.

use core::time::Duration;

use crate::board::{BoardSnapshot, Notice};

/// A key press, already mapped to its game meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `d`: draw a card.
    Draw,
    /// `s`: slap the pile.
    Slap,
    /// `i`: show the instructions.
    Instructions,
    /// `q`: quit.
    Quit,
    /// `D`: draw pressed with caps lock on.
    CapsLockDraw,
    /// Any other key.
    Other,
}

impl Key {
    /// Maps a typed character to a key.
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c {
            'd' => Self::Draw,
            's' => Self::Slap,
            'i' => Self::Instructions,
            'q' => Self::Quit,
            'D' => Self::CapsLockDraw,
            _ => Self::Other,
        }
    }
}

/// Result of waiting for a key during a slap window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// A key arrived after `elapsed`.
    Pressed {
        /// The key that was pressed.
        key: Key,
        /// Time between the window opening and the key arriving.
        elapsed: Duration,
    },
    /// No key arrived before the deadline.
    TimedOut,
}

/// Source of key events.
pub trait InputSource {
    /// Error raised when the underlying device fails.
    type Error;

    /// Blocks until a key arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be read.
    fn read_key(&mut self) -> Result<Key, Self::Error>;

    /// Waits at most `deadline` for a key.
    ///
    /// Implementations must give up once the deadline passes and return
    /// [`Reaction::TimedOut`] instead of leaving the read pending.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be read.
    fn read_key_with_deadline(&mut self, deadline: Duration) -> Result<Reaction, Self::Error>;

    /// Drops keys that arrived after a slap window closed.
    ///
    /// A slap pressed just past the deadline must not be read later as a
    /// turn key. Sources without buffering keep the default no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be read.
    fn discard_pending(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Sink for board snapshots and messages.
pub trait DisplaySink {
    /// Error raised when output fails.
    type Error;

    /// Replaces the shown board.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn render(&mut self, board: &BoardSnapshot) -> Result<(), Self::Error>;

    /// Shows a message below the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn notify(&mut self, notice: &Notice) -> Result<(), Self::Error>;

    /// Holds the current output on screen for `duration`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn pause(&mut self, duration: Duration) -> Result<(), Self::Error> {
        let _ = duration;
        Ok(())
    }
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    type Error = T::Error;

    fn read_key(&mut self) -> Result<Key, Self::Error> {
        (**self).read_key()
    }

    fn read_key_with_deadline(&mut self, deadline: Duration) -> Result<Reaction, Self::Error> {
        (**self).read_key_with_deadline(deadline)
    }

    fn discard_pending(&mut self) -> Result<(), Self::Error> {
        (**self).discard_pending()
    }
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    type Error = T::Error;

    fn render(&mut self, board: &BoardSnapshot) -> Result<(), Self::Error> {
        (**self).render(board)
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), Self::Error> {
        (**self).notify(notice)
    }

    fn pause(&mut self, duration: Duration) -> Result<(), Self::Error> {
        (**self).pause(duration)
    }
}
