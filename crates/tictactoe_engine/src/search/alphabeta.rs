//! Minimax with alpha-beta pruning.
//!
//! `alpha` is the value X is already guaranteed elsewhere in the tree and
//! `beta` the value O is guaranteed. Once `alpha >= beta` the remaining
//! siblings cannot influence the root and are skipped. Values returned
//! from a cut-off node are bounds rather than exact scores; at the root,
//! searched with the full window, the value and chosen action match
//! [`exhaustive`](super::exhaustive) exactly.

use super::{Evaluation, NEG_INF, POS_INF, SearchStats};
use crate::model::successor;
use crate::rules::{Utility, terminal};
use crate::{Board, actions};

/// Pruned counterpart of [`exhaustive::maximize`](super::exhaustive::maximize).
pub fn maximize(
    board: &Board,
    mut alpha: Utility,
    beta: Utility,
    stats: &mut SearchStats,
) -> Evaluation {
    stats.nodes += 1;
    if terminal(board) {
        return Evaluation::leaf(board);
    }

    let mut best = Evaluation::new(NEG_INF, None);
    for action in actions(board) {
        let value = minimize(&successor(board, action), alpha, beta, stats).value;
        if value > best.value {
            best = Evaluation::new(value, Some(action));
        }
        alpha = alpha.max(value);
        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }
    best
}

/// Pruned counterpart of [`exhaustive::minimize`](super::exhaustive::minimize).
pub fn minimize(
    board: &Board,
    alpha: Utility,
    mut beta: Utility,
    stats: &mut SearchStats,
) -> Evaluation {
    stats.nodes += 1;
    if terminal(board) {
        return Evaluation::leaf(board);
    }

    let mut best = Evaluation::new(POS_INF, None);
    for action in actions(board) {
        let value = maximize(&successor(board, action), alpha, beta, stats).value;
        if value < best.value {
            best = Evaluation::new(value, Some(action));
        }
        beta = beta.min(value);
        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;
    use crate::search::exhaustive;

    #[test]
    fn test_pruning_expands_fewer_boards() {
        let mut pruned = SearchStats::default();
        let mut full = SearchStats::default();
        let board = Board::new();

        let a = maximize(&board, NEG_INF, POS_INF, &mut pruned);
        let b = exhaustive::maximize(&board, &mut full);

        assert_eq!(a, b);
        assert!(pruned.cutoffs > 0);
        assert!(pruned.nodes < full.nodes / 4);
    }

    #[test]
    fn test_blocks_instead_of_wandering() {
        // O to move; X threatens the main diagonal.
        let board: Board = "X.. .X. O..".parse().unwrap();
        let eval = minimize(&board, NEG_INF, POS_INF, &mut SearchStats::default());
        assert_eq!(eval.action, Some(Action::new(2, 2)));
    }

    #[test]
    fn test_narrow_window_cuts_immediately() {
        // O to move and wins at the first empty cell. With alpha already
        // at 1 that first child settles the node.
        let board: Board = "OO. XX. X..".parse().unwrap();
        let mut stats = SearchStats::default();
        let eval = minimize(&board, 1, POS_INF, &mut stats);
        assert_eq!(eval, Evaluation::new(-1, Some(Action::new(0, 2))));
        assert_eq!(stats.nodes, 2);
        assert_eq!(stats.cutoffs, 1);
    }
}
