//! Engine abstraction layer.
//!
//! Defines a single trait interface so different move-selection strategies
//! can be swapped behind the match harness and other tooling at runtime.

use crate::game_state::board::{Board, Vector};
use crate::game_state::tafl_types::Team;
use crate::tafl_errors::TaflErrors;

pub trait Engine {
    fn name(&self) -> &str;

    /// Pick a move for `team` on the given board.
    ///
    /// Implementations return `TaflErrors::NoLegalMoves` when the side
    /// cannot move at all.
    fn choose_move(&mut self, board: &Board, team: Team)
        -> Result<(Vector, Vector), TaflErrors>;
}
