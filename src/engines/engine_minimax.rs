//! Fixed-depth minimax engine.
//!
//! Thin wrapper around `search::minimax::best` so the tree search can sit
//! behind the common `Engine` trait. Depth 3 keeps the search interactive on
//! the shipped board sizes; larger boards may want less.

use crate::engines::engine_trait::Engine;
use crate::game_state::board::{Board, Vector};
use crate::game_state::tafl_types::Team;
use crate::search::minimax::best;
use crate::tafl_errors::TaflErrors;

pub struct MinimaxEngine {
    depth: u32,
}

impl MinimaxEngine {
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "BirchTafl Minimax"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        team: Team,
    ) -> Result<(Vector, Vector), TaflErrors> {
        best(board, team, self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::notation::unmarshal;

    #[test]
    fn chooses_the_same_move_as_the_raw_search() {
        let board = unmarshal("_ A D\nD _ _").unwrap();
        let mut engine = MinimaxEngine::new(1);
        assert_eq!(
            engine.choose_move(&board, Team::Defenders).unwrap(),
            best(&board, Team::Defenders, 1).unwrap()
        );
    }
}
