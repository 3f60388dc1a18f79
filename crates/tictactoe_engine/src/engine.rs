//! Configurable move selection.
//!
//! [`minimax`](crate::minimax) is a pure function; [`Engine`] wraps it with
//! a [`SearchConfig`] and a random source so the opening move can be
//! randomized. Tests inject a seeded RNG to keep games reproducible.

use crate::config::{OpeningPolicy, SearchConfig};
use crate::search::{SearchReport, evaluate};
use crate::{Action, Board, MoveError, actions, result, terminal};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// A game played to the end from some starting board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playout {
    /// Actions in the order they were played.
    pub actions: Vec<Action>,
    /// Board after each action; same length as `actions`.
    pub boards: Vec<Board>,
}

impl Playout {
    /// The terminal board, or `None` if the start was already terminal.
    pub fn final_board(&self) -> Option<&Board> {
        self.boards.last()
    }
}

/// Perfect-play move selector.
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng> {
    config: SearchConfig,
    rng: R,
}

impl Engine<StdRng> {
    /// Creates an engine seeded from the operating system.
    #[instrument]
    pub fn new(config: SearchConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates an engine with a fixed seed.
    #[instrument]
    pub fn seeded(config: SearchConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl Default for Engine<StdRng> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<R: Rng> Engine<R> {
    /// Creates an engine drawing randomness from `rng`.
    pub fn with_rng(config: SearchConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches `board` with the configured strategy.
    ///
    /// Ignores the opening policy: the report is always the searched
    /// value and action.
    pub fn analyze(&self, board: &Board) -> SearchReport {
        evaluate(board, *self.config.strategy())
    }

    /// Picks the move to play on `board`, or `None` if the game is over.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn choose(&mut self, board: &Board) -> Option<Action> {
        if terminal(board) {
            return None;
        }

        let moves = actions(board);
        if *self.config.opening() == OpeningPolicy::Random && moves.len() == Action::ALL.len() {
            let action = moves.choose(&mut self.rng).copied();
            debug!(action = ?action, "Random opening");
            return action;
        }

        self.analyze(board).evaluation.action
    }

    /// Plays both sides from `board` until the game ends.
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError`] if a chosen action is rejected, which only
    /// happens for boards that break the alternation invariant.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn play_out(&mut self, board: &Board) -> Result<Playout, MoveError> {
        let mut current = *board;
        let mut playout = Playout {
            actions: Vec::new(),
            boards: Vec::new(),
        };

        while let Some(action) = self.choose(&current) {
            current = result(&current, action)?;
            debug!(%action, "Played");
            playout.actions.push(action);
            playout.boards.push(current);
        }

        info!(moves = playout.actions.len(), "Game over");
        Ok(playout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Strategy, initial_state, utility};
    use strum::IntoEnumIterator;

    #[test]
    fn test_search_opening_is_deterministic() {
        let mut engine = Engine::seeded(SearchConfig::default(), 7);
        assert_eq!(engine.choose(&initial_state()), Some(Action::new(0, 0)));
    }

    #[test]
    fn test_random_opening_reproducible_with_seed() {
        let config = SearchConfig::default().with_opening(OpeningPolicy::Random);
        let first: Vec<_> = (0..5)
            .map(|_| Engine::seeded(config, 42).choose(&initial_state()))
            .collect();
        assert!(first.iter().all(|a| *a == first[0]));
        assert!(first[0].is_some());
    }

    #[test]
    fn test_random_opening_varies() {
        let config = SearchConfig::default().with_opening(OpeningPolicy::Random);
        let mut engine = Engine::seeded(config, 1);
        let openings: std::collections::HashSet<_> = (0..50)
            .filter_map(|_| engine.choose(&initial_state()))
            .collect();
        assert!(openings.len() > 1);
    }

    #[test]
    fn test_random_opening_only_on_empty_board() {
        let config = SearchConfig::default().with_opening(OpeningPolicy::Random);
        let mut engine = Engine::seeded(config, 3);
        let board: Board = "XX. OO. ...".parse().unwrap();
        assert_eq!(engine.choose(&board), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_play_out_draws() {
        for strategy in Strategy::iter() {
            let config = SearchConfig::default().with_strategy(strategy);
            let playout = Engine::seeded(config, 0).play_out(&initial_state()).unwrap();
            let last = playout.final_board().unwrap();
            assert!(terminal(last));
            assert_eq!(utility(last), 0);
            assert_eq!(playout.actions.len(), 9);
        }
    }

    #[test]
    fn test_play_out_from_terminal_is_empty() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        let playout = Engine::new(SearchConfig::default()).play_out(&board).unwrap();
        assert!(playout.actions.is_empty());
        assert_eq!(playout.final_board(), None);
    }
}
