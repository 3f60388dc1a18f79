//! Actions: the (row, column) coordinates a player can mark.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A cell coordinate on the board, each component in `0..3` when legal.
///
/// Coordinates are public so that callers can describe any move they like;
/// [`result`](crate::result) rejects the ones that are off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Action {
    /// Creates a new action.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All nine cells in row-major order.
    pub const ALL: [Action; 9] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];

    /// Checks that both coordinates are on the board.
    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Row-major index (0-8), or `None` off the board.
    pub fn to_index(self) -> Option<usize> {
        self.in_bounds().then_some(self.row * 3 + self.col)
    }

    /// Creates an action from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            (2, 2) => "Bottom-right",
            _ => "Off-board",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Illegal move passed to [`result`](crate::result).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The coordinates are outside the 3x3 grid.
    #[display("Illegal move: {} is off the board", _0)]
    OutOfBounds(Action),

    /// The cell is already occupied.
    #[display("Illegal move: {} is already occupied", _0)]
    Occupied(Action),
}

impl MoveError {
    /// The action that was rejected.
    pub fn action(&self) -> Action {
        match self {
            MoveError::OutOfBounds(action) | MoveError::Occupied(action) => *action,
        }
    }
}

impl std::error::Error for MoveError {}
