//! Board transitions: whose turn it is, which moves exist, and what a
//! move produces.

use crate::{Action, Board, MoveError, Player};
use tracing::{debug, instrument};

/// Returns the starting board with all nine cells empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player to move.
///
/// Derived from mark parity: X moves when both players have the same
/// number of marks, O otherwise. Boards that break the alternation
/// invariant get an arbitrary answer.
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty cell in row-major order.
///
/// The order is what the search uses to break ties between equally good
/// moves, so it is part of this function's contract.
pub fn actions(board: &Board) -> Vec<Action> {
    Action::ALL
        .iter()
        .copied()
        .filter(|action| board.is_empty(*action))
        .collect()
}

/// Returns the board after the player to move marks `action`.
///
/// The input board is not modified.
///
/// # Errors
///
/// Returns [`MoveError::OutOfBounds`] if the coordinates are off the
/// board and [`MoveError::Occupied`] if the cell already holds a mark.
#[instrument(skip(board))]
pub fn result(board: &Board, action: Action) -> Result<Board, MoveError> {
    if !action.in_bounds() {
        debug!("Rejected off-board action");
        return Err(MoveError::OutOfBounds(action));
    }
    if !board.is_empty(action) {
        debug!("Rejected move onto occupied cell");
        return Err(MoveError::Occupied(action));
    }

    Ok(successor(board, action))
}

/// [`result`] without the legality checks, for actions taken from
/// [`actions`].
pub(crate) fn successor(board: &Board, action: Action) -> Board {
    board.with_mark(action, player(board))
}
