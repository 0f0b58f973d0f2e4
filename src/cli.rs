//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_core::GameMode;

/// Tic-tac-toe in the terminal, against a friend or the computer.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (used if it exists)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Starting mode: two-player or vs-computer
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Computer thinking delay in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,
}
