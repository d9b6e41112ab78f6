//! Terminal slap game (default binary).
//!
//! The engine lives in the `slaprs` library; this binary only owns the
//! terminal session and the command line.

mod terminal;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use slaprs::{Game, GameOptions, GameSummary, TurnEngine};

use crate::terminal::{Keyboard, Screen, TerminalSession};

#[derive(Debug, Parser)]
#[command(name = "slap", about = "Play slap against the computer")]
struct Args {
    /// Seed for the deal and every reshuffle. Defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,

    /// Length of the slap window in milliseconds.
    #[arg(long, default_value_t = 1000)]
    wait_ms: u64,

    /// Skip the start prompt and instructions.
    #[arg(long)]
    no_intro: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default()
        .with_wait_time(Duration::from_millis(args.wait_ms))
        .with_show_intro(!args.no_intro);

    let summary = play(Game::new(options, seed))?;

    println!("{}", summary.reason);
    println!(
        "Turns: {} | slaps won: {} | slaps lost: {} | penalties: {}",
        summary.turns, summary.slaps_won, summary.slaps_lost, summary.penalties
    );
    Ok(())
}

fn play(game: Game) -> Result<GameSummary> {
    let _session = TerminalSession::enter()?;
    let mut engine = TurnEngine::new(game, Keyboard, Screen::new());
    let summary = engine.run()?;
    Ok(summary)
}
