//! A slap card game engine with optional `no_std` support.
//!
//! Two sides, the human and a scripted opponent, take turns drawing onto a
//! shared discard pile. When the top of the pile forms a Double or a
//! Sandwich, a timed slap window opens and the pile goes to whoever wins it.
//!
//! The crate provides a [`Game`] holding the decks and turn state, and a
//! [`TurnEngine`] that drives it from an [`InputSource`] to a
//! [`DisplaySink`]. Terminal handling lives outside the crate.
//!
//! # Example
//!
//! ```no_run
//! use slaprs::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let game = Game::new(options, 42);
//! let _ = game;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod io;
pub mod options;
pub mod policy;
pub mod result;
pub mod slap;

// Re-export main types
pub use board::{BoardSnapshot, Notice};
pub use card::{Card, DECK_SIZE, RANKS, Rank};
pub use deck::{Deck, PENALTY_CARDS};
pub use error::{ActionError, CardError, DeckError, EngineError};
pub use event::{Detection, PileEvent, detect};
pub use game::{EndReason, Game, GameState, Penalty, Side, TurnEngine};
pub use io::{DisplaySink, InputSource, Key, Reaction};
pub use options::GameOptions;
pub use policy::{AlwaysDraw, Policy};
pub use result::GameSummary;
pub use slap::{SlapOutcome, award_pile, slap_winner};
