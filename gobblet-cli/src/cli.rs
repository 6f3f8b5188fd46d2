//! Command-line interface for the gobblet binary.

use std::path::PathBuf;

use clap::Parser;

/// Gobblet - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "gobblet")]
#[command(about = "Play Gobblet against a friend in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON starting layout (default: three nested stacks of sizes 0-3 each)
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Resume a game written by --save
    #[arg(long, conflicts_with = "layout")]
    pub resume: Option<PathBuf>,

    /// Write the game to this file after every accepted move
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Name shown for player 1
    #[arg(long, default_value = "Player 1")]
    pub name_one: String,

    /// Name shown for player 2
    #[arg(long, default_value = "Player 2")]
    pub name_two: String,
}
