//! Adversarial search over the full game tree.
//!
//! X maximizes [`Utility`], O minimizes it. Two interchangeable searches
//! are provided:
//!
//! - [`exhaustive`]: plain minimax, visiting every reachable board
//! - [`alphabeta`]: minimax with alpha-beta pruning
//!
//! Both walk [`actions`](crate::actions) in row-major order and only
//! replace the running best on a strictly better value, so the first
//! optimal action wins ties. Pruning never changes the `(value, action)`
//! pair returned at the root, only how many boards are expanded.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Action, Board, minimax};
//!
//! // X to move with two in the top row.
//! let board: Board = "XX. .O. ..O".parse().unwrap();
//! assert_eq!(minimax(&board), Some(Action::new(0, 2)));
//! ```

pub mod alphabeta;
pub mod exhaustive;

use crate::rules::{Utility, terminal, utility};
use crate::{Action, Board, Player, player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Running best before any child has been seen; below every utility.
pub(crate) const NEG_INF: Utility = Utility::MIN;
/// Running best for the minimizer before any child; above every utility.
pub(crate) const POS_INF: Utility = Utility::MAX;

/// Outcome of searching a board: its minimax value and the move that
/// achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Game value under optimal play by both sides.
    pub value: Utility,
    /// Best action for the player to move, `None` on terminal boards.
    pub action: Option<Action>,
}

impl Evaluation {
    /// Creates a new evaluation.
    pub fn new(value: Utility, action: Option<Action>) -> Self {
        Self { value, action }
    }

    /// Evaluation of a terminal board.
    pub(crate) fn leaf(board: &Board) -> Self {
        Self::new(utility(board), None)
    }
}

/// Work counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards expanded, the root included.
    pub nodes: u64,
    /// Times the remaining siblings were skipped by pruning.
    pub cutoffs: u64,
}

/// Which search to run.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Plain minimax over every reachable board.
    Exhaustive,
    /// Minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
}

/// A finished search of one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Player to move on the searched board.
    pub player: Player,
    /// Search that produced the result.
    pub strategy: Strategy,
    /// Value and best action.
    pub evaluation: Evaluation,
    /// Work done.
    pub stats: SearchStats,
}

/// Searches `board` for the player to move.
///
/// On a terminal board the evaluation carries the board's utility and no
/// action.
#[instrument(skip(board), fields(board = %board))]
pub fn evaluate(board: &Board, strategy: Strategy) -> SearchReport {
    let mut stats = SearchStats::default();
    let to_move = player(board);

    let evaluation = match (strategy, to_move) {
        (Strategy::Exhaustive, Player::X) => exhaustive::maximize(board, &mut stats),
        (Strategy::Exhaustive, Player::O) => exhaustive::minimize(board, &mut stats),
        (Strategy::AlphaBeta, Player::X) => {
            alphabeta::maximize(board, NEG_INF, POS_INF, &mut stats)
        }
        (Strategy::AlphaBeta, Player::O) => {
            alphabeta::minimize(board, NEG_INF, POS_INF, &mut stats)
        }
    };

    debug!(
        player = %to_move,
        value = evaluation.value,
        action = ?evaluation.action,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "Search complete"
    );

    SearchReport {
        player: to_move,
        strategy,
        evaluation,
        stats,
    }
}

/// Returns the optimal action for the player to move, or `None` if the
/// game is over.
///
/// Deterministic: uses alpha-beta search and never randomizes the
/// opening. See [`Engine`](crate::Engine) for configurable play.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax(board: &Board) -> Option<Action> {
    if terminal(board) {
        return None;
    }
    evaluate(board, Strategy::AlphaBeta).evaluation.action
}
