//! Enumeration of a team's tiles that still have somewhere to go.

use crate::game_state::board::{Board, Vector};
use crate::game_state::tafl_types::Team;
use crate::move_generation::moves::moves;

/// Positions of every tile belonging to `team` that has at least one legal
/// move, in board index order.
pub fn moveable(board: &Board, team: Team) -> Vec<Vector> {
    let mut result = Vec::new();
    for (index, tile) in board.tiles.iter().enumerate() {
        if tile.allegiance() != team {
            continue;
        }

        let position = board.vec(index);
        if moves(board, position).is_empty() {
            continue;
        }

        result.push(position);
    }

    result
}
