//! Tic-tac-toe CLI
//!
//! Thin front-end over `tictactoe_engine`: asks for optimal moves and
//! plays self-play games.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_engine::{
    Board, Engine, OpeningPolicy, SearchConfig, initial_state, terminal, utility, winner,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Command::BestMove { board, json } => run_best_move(config, &board, json),
        Command::SelfPlay {
            random_opening,
            seed,
        } => run_self_play(config, random_opening, seed),
    }
}

/// Builds the search config from the file and command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SearchConfig::default(),
    };
    if let Some(strategy) = cli.strategy {
        config = config.with_strategy(strategy);
    }
    debug!(?config, "Using search config");
    Ok(config)
}

/// Parses and validates a board given on the command line.
fn parse_board(text: &str) -> Result<Board> {
    let board: Board = text.parse().context("invalid board")?;
    if let Err(violations) = board.validate() {
        let reasons = violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        bail!("board is not reachable by legal play: {}", reasons);
    }
    Ok(board)
}

/// Print the optimal move for a board
#[instrument]
fn run_best_move(config: SearchConfig, text: &str, json: bool) -> Result<()> {
    let board = parse_board(text)?;
    let report = Engine::new(config).analyze(&board);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board);
    match report.evaluation.action {
        Some(action) => println!(
            "{} to move: play {} {} (value {})",
            report.player,
            action,
            action.label(),
            report.evaluation.value
        ),
        None => println!("Game over: {}", describe_outcome(&board)),
    }
    println!(
        "Searched {} boards ({} cutoffs) using {}",
        report.stats.nodes, report.stats.cutoffs, report.strategy
    );
    Ok(())
}

/// Play a full engine-versus-engine game
#[instrument]
fn run_self_play(config: SearchConfig, random_opening: bool, seed: Option<u64>) -> Result<()> {
    let config = if random_opening {
        config.with_opening(OpeningPolicy::Random)
    } else {
        config
    };
    let mut engine = match seed {
        Some(seed) => Engine::seeded(config, seed),
        None => Engine::new(config),
    };

    let start = initial_state();
    let playout = engine.play_out(&start)?;
    info!(moves = playout.actions.len(), "Self-play finished");

    for (ply, (action, board)) in playout.actions.iter().zip(&playout.boards).enumerate() {
        println!("Move {}: {} {}\n{}\n", ply + 1, action, action.label(), board);
    }
    let last = playout.final_board().unwrap_or(&start);
    println!("Result: {}", describe_outcome(last));
    Ok(())
}

fn describe_outcome(board: &Board) -> String {
    if !terminal(board) {
        return "in progress".to_string();
    }
    match winner(board) {
        Some(player) => format!("{} wins (utility {})", player, utility(board)),
        None => "draw".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_accepts_reachable() {
        let board = parse_board("X.. .O. ..X").unwrap();
        assert!(!terminal(&board));
    }

    #[test]
    fn test_parse_board_rejects_unbalanced() {
        let err = parse_board("XXX X.. ...").unwrap_err();
        assert!(err.to_string().contains("not reachable"));
    }

    #[test]
    fn test_parse_board_rejects_garbage() {
        let err = parse_board("hello").unwrap_err();
        assert!(err.to_string().contains("invalid board"));
    }

    #[test]
    fn test_describe_outcome() {
        assert_eq!(describe_outcome(&initial_state()), "in progress");
        let won: Board = "OOO XX. X..".parse().unwrap();
        assert_eq!(describe_outcome(&won), "O wins (utility -1)");
        let drawn: Board = "XOX OXX OXO".parse().unwrap();
        assert_eq!(describe_outcome(&drawn), "draw");
    }
}
