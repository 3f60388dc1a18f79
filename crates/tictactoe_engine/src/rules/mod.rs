//! Game rules for tic-tac-toe.
//!
//! Pure functions for judging a board: who has won, whether the game is
//! over, and what the outcome is worth. Rules are separated from board
//! storage so the search can call them without touching game flow.

pub mod outcome;
pub mod win;

pub use outcome::{Utility, terminal, utility};
pub use win::{LINES, winner};
