//! Command-line interface for the tic-tac-toe engine.

use clap::{Parser, Subcommand};
use tictactoe_engine::Strategy;

/// Perfect-play tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Perfect-play tic-tac-toe via minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML search config
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Override the configured search (exhaustive, alpha-beta)
    #[arg(short, long, global = true)]
    pub strategy: Option<Strategy>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the player to move
    BestMove {
        /// Board as nine cells in row-major order, e.g. "XO..X...."
        #[arg(short, long)]
        board: String,

        /// Print the search report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides from the empty board
    SelfPlay {
        /// Pick the first move at random
        #[arg(long)]
        random_opening: bool,

        /// Seed for the random opening
        #[arg(long)]
        seed: Option<u64>,
    },
}
