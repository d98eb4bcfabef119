//! Random-move baseline engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! harness testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::Engine;
use crate::game_state::board::{Board, Vector};
use crate::game_state::tafl_types::Team;
use crate::search::minimax::iterate;
use crate::tafl_errors::TaflErrors;

pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "BirchTafl Random"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        team: Team,
    ) -> Result<(Vector, Vector), TaflErrors> {
        let legal_moves: Vec<(Vector, Vector)> = iterate(board, team).collect();
        let mut rng = rand::rng();
        legal_moves
            .as_slice()
            .choose(&mut rng)
            .copied()
            .ok_or(TaflErrors::NoLegalMoves)
    }
}
