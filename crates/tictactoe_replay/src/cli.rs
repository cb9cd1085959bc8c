//! Command-line interface for tictactoe_replay.

use clap::Parser;
use std::path::PathBuf;

/// Replay a tic-tac-toe match script and print the result
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Replay a TOML match script through the tic-tac-toe game state", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the match script (TOML)
    pub script: PathBuf,

    /// Print the full report as JSON instead of the final board
    #[arg(long)]
    pub json: bool,
}
