//! Perfect-play tic-tac-toe.
//!
//! Boards are immutable values; every move produces a new [`Board`].
//! The engine answers the questions a game loop needs:
//!
//! - **Board model**: [`initial_state`], [`player`], [`actions`],
//!   [`result`], [`winner`], [`terminal`], [`utility`]
//! - **Search**: [`minimax`] returns the optimal action for the side to
//!   move, searching the whole game tree (optionally with alpha-beta
//!   pruning, see [`search`])
//! - **Engine**: [`Engine`] adds configuration and an optional random
//!   opening on top of the search
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{initial_state, minimax, result, terminal, utility};
//!
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board) {
//!     board = result(&board, action)?;
//! }
//! assert!(terminal(&board));
//! assert_eq!(utility(&board), 0);
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod engine;
mod invariants;
mod model;
mod types;

// Public module declarations
pub mod rules;
pub mod search;

// Crate-level exports - Board model
pub use action::{Action, MoveError};
pub use model::{actions, initial_state, player, result};
pub use rules::{Utility, terminal, utility, winner};
pub use types::{Board, Cell, ParseBoardError, Player};

// Crate-level exports - Invariants
pub use invariants::{
    BoardInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalance, SingleWinner,
};

// Crate-level exports - Search
pub use search::{Evaluation, SearchReport, SearchStats, Strategy, evaluate, minimax};

// Crate-level exports - Engine and configuration
pub use config::{ConfigError, OpeningPolicy, SearchConfig};
pub use engine::{Engine, Playout};
