//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_minimax::Player;

/// Strictly Minimax - perfect-play tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML runner config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game against the engine
    Play {
        /// Mark you play (X moves first)
        #[arg(long)]
        human: Option<Player>,

        /// Print how many boards the engine searched for each move
        #[arg(long)]
        stats: bool,
    },

    /// Print the engine's move for a board
    Best {
        /// Nine cells in row-major order, e.g. "XO.|.X.|..O"
        board: String,

        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides
    SelfPlay {
        /// Starting board (defaults to the empty board)
        #[arg(long)]
        board: Option<String>,

        /// Print the game record as JSON
        #[arg(long)]
        json: bool,
    },
}
