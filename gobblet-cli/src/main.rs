//! Gobblet in the terminal.
//!
//! A hot-seat game between two people sharing one keyboard. All rules live
//! in gobblet-core; this binary only reads moves, renders and saves.

mod cli;
mod session;

use std::fs;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use gobblet_core::{GameState, StartingLayout};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::session::Session;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let game = load_game(&cli)?;
    info!(moves = game.moves_played(), "starting game");

    let mut session = Session::new(game, [cli.name_one, cli.name_two], cli.save);
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

fn load_game(cli: &Cli) -> Result<GameState> {
    if let Some(path) = &cli.resume {
        let json = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        return serde_json::from_str(&json).with_context(|| format!("{} is not a saved game", path.display()));
    }
    if let Some(path) = &cli.layout {
        let json = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        let layout = StartingLayout::from_json(&json)?;
        return Ok(GameState::from_layout(&layout)?);
    }
    Ok(GameState::standard())
}
