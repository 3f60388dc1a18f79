//! Core domain types for tic-tac-toe.

use crate::action::Action;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Single-character symbol used by the board's text form.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::Occupied(Player::X)),
            'O' | 'o' => Some(Cell::Occupied(Player::O)),
            '.' | '_' | '-' => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition produces a new `Board` and
/// the one it was derived from is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows.
    pub fn from_rows(cells: [[Cell; 3]; 3]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given action, or `None` if it is off the board.
    pub fn get(&self, action: Action) -> Option<Cell> {
        self.cells
            .get(action.row)
            .and_then(|row| row.get(action.col))
            .copied()
    }

    /// Checks if the cell at the given action exists and is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Cell::Empty))
    }

    /// Returns all cells as rows.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of marks the player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.iter().filter(|c| *c == Cell::Occupied(player)).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.iter().all(|c| c != Cell::Empty)
    }

    /// Returns a copy with `player`'s mark at `action`.
    ///
    /// Callers must pass an on-board action.
    pub(crate) fn with_mark(mut self, action: Action, player: Player) -> Self {
        self.cells[action.row][action.col] = Cell::Occupied(player);
        self
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            if i < 2 {
                writeln!(f, "{}", line)?;
            } else {
                write!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseBoardError {
    /// A character that is not a cell symbol.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidSymbol(char),

    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cell symbols (`X`, `O`, `.`, `_` or `-`) in row-major
    /// order. Whitespace and `|` separators are ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            cells.push(Cell::from_symbol(c).ok_or(ParseBoardError::InvalidSymbol(c))?);
        }
        if cells.len() != 9 {
            return Err(ParseBoardError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (i, cell) in cells.into_iter().enumerate() {
            board.cells[i / 3][i % 3] = cell;
        }
        Ok(board)
    }
}
