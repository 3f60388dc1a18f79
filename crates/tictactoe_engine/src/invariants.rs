//! Board invariants.
//!
//! The engine assumes every board it is handed came from alternating
//! legal moves starting with X. These invariants make that assumption
//! checkable, so front-ends can reject hand-written boards before
//! searching them.

use crate::rules::win::{LINES, line_owner};
use crate::{Board, Player};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has the same number of marks as O, or exactly one more.
pub struct MarkBalance;

impl Invariant<Board> for MarkBalance {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// Invariant: completed lines never belong to both players.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        let owners = LINES.iter().filter_map(|line| line_owner(board, line));
        let (mut x_wins, mut o_wins) = (false, false);
        for owner in owners {
            match owner {
                Player::X => x_wins = true,
                Player::O => o_wins = true,
            }
        }

        let valid = !(x_wins && o_wins);
        if !valid {
            warn!("Both players own a completed line");
        }
        valid
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

/// Every board invariant as a composable set.
pub type BoardInvariants = (MarkBalance, SingleWinner);

impl Board {
    /// Checks the board against [`BoardInvariants`].
    ///
    /// # Errors
    ///
    /// Returns every violated invariant.
    pub fn validate(&self) -> Result<(), Vec<InvariantViolation>> {
        BoardInvariants::check_all(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_holds() {
        assert!(Board::new().validate().is_ok());
    }

    #[test]
    fn test_reachable_board_holds() {
        let board: Board = "XOX .X. O..".parse().unwrap();
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_too_many_x() {
        let board: Board = "XX. ... ...".parse().unwrap();
        assert!(!MarkBalance::holds(&board));
    }

    #[test]
    fn test_o_ahead() {
        let board: Board = "O.. ... ...".parse().unwrap();
        assert!(!MarkBalance::holds(&board));
    }

    #[test]
    fn test_two_winners_detected() {
        let board: Board = "XXX OOO ...".parse().unwrap();
        assert!(MarkBalance::holds(&board));
        let violations = board.validate().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, SingleWinner::description());
    }

    #[test]
    fn test_all_violations_reported() {
        let board: Board = "OOO OOO XX.".parse().unwrap();
        assert_eq!(board.validate().unwrap_err().len(), 1);
        let board: Board = "XXX OOO OO.".parse().unwrap();
        assert_eq!(board.validate().unwrap_err().len(), 2);
    }
}
