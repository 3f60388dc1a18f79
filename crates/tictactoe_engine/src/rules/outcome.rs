//! Terminal detection and game value.

use super::win::winner;
use crate::{Board, Player};

/// Game value from X's point of view: `1` X wins, `-1` O wins, `0` draw.
pub type Utility = i32;

/// Checks if the game is over: someone has won or the board is full.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Value of a finished game.
///
/// Only meaningful when [`terminal`] holds; a game still in progress is
/// worth `0` here, the same as a draw.
pub fn utility(board: &Board) -> Utility {
    match winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_terminal() {
        let board = Board::new();
        assert!(!terminal(&board));
        assert_eq!(utility(&board), 0);
    }

    #[test]
    fn test_full_board_draw() {
        // X O X / O X X / O X O
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(terminal(&board));
        assert_eq!(utility(&board), 0);
    }

    #[test]
    fn test_win_before_full() {
        let board: Board = "XXX .O. ..O".parse().unwrap();
        assert!(terminal(&board));
        assert_eq!(utility(&board), 1);
    }

    #[test]
    fn test_o_win_is_negative() {
        let board: Board = "XX. OOO X..".parse().unwrap();
        assert!(terminal(&board));
        assert_eq!(utility(&board), -1);
    }

    #[test]
    fn test_in_progress_utility_is_zero() {
        let board: Board = "XX. .O. ...".parse().unwrap();
        assert!(!terminal(&board));
        assert_eq!(utility(&board), 0);
    }
}
