//! Win detection logic for tic-tac-toe.

use crate::{Action, Board, Cell, Player};

/// Every line of three, checked in order: rows, then columns, then the
/// two diagonals.
pub const LINES: [[Action; 3]; 8] = [
    // Rows
    [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    // Columns
    [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    // Diagonals
    [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
];

/// Returns the player owning the first completed line, if any.
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| line_owner(board, line))
}

/// The player holding all three cells of `line`.
pub(crate) fn line_owner(board: &Board, [a, b, c]: &[Action; 3]) -> Option<Player> {
    match board.get(*a) {
        Some(Cell::Occupied(player))
            if board.get(*b) == Some(Cell::Occupied(player))
                && board.get(*c) == Some(Cell::Occupied(player)) =>
        {
            Some(player)
        }
        _ => None,
    }
}
