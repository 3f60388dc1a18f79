//! Plain minimax: every reachable board below the root is expanded.

use super::{Evaluation, NEG_INF, POS_INF, SearchStats};
use crate::model::successor;
use crate::rules::terminal;
use crate::{Board, actions};

/// Best value X can force from `board`, and the first action reaching it.
pub fn maximize(board: &Board, stats: &mut SearchStats) -> Evaluation {
    stats.nodes += 1;
    if terminal(board) {
        return Evaluation::leaf(board);
    }

    let mut best = Evaluation::new(NEG_INF, None);
    for action in actions(board) {
        let value = minimize(&successor(board, action), stats).value;
        if value > best.value {
            best = Evaluation::new(value, Some(action));
        }
    }
    best
}

/// Best value O can force from `board`, and the first action reaching it.
pub fn minimize(board: &Board, stats: &mut SearchStats) -> Evaluation {
    stats.nodes += 1;
    if terminal(board) {
        return Evaluation::leaf(board);
    }

    let mut best = Evaluation::new(POS_INF, None);
    for action in actions(board) {
        let value = maximize(&successor(board, action), stats).value;
        if value < best.value {
            best = Evaluation::new(value, Some(action));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;

    #[test]
    fn test_full_tree_size() {
        // Number of boards in the complete tic-tac-toe game tree.
        let mut stats = SearchStats::default();
        maximize(&Board::new(), &mut stats);
        assert_eq!(stats.nodes, 549_946);
        assert_eq!(stats.cutoffs, 0);
    }

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "XX. OO. ...".parse().unwrap();
        let eval = maximize(&board, &mut SearchStats::default());
        assert_eq!(eval, Evaluation::new(1, Some(Action::new(0, 2))));
    }

    #[test]
    fn test_lost_position_still_moves() {
        // O to move, X has two open threats: every move loses.
        let board: Board = "X.X .O. X.O".parse().unwrap();
        let eval = minimize(&board, &mut SearchStats::default());
        assert_eq!(eval.value, 1);
        assert_eq!(eval.action, Some(Action::new(0, 1)));
    }
}
