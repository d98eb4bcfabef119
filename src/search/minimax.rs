//! Depth-limited minimax move selection.
//!
//! The search walks the full move tree to a fixed depth with no pruning and
//! no memoization; every branch resolves its own board value, so the walk is
//! a pure recursive fold over immutable snapshots. Leaf positions are scored
//! with the material count taken from a fixed perspective (the opponent of
//! the side whose turn it is at the leaf), which keeps scores comparable
//! across the whole tree.

use crate::game_state::board::{Board, Vector};
use crate::game_state::tafl_types::Team;
use crate::move_generation::moves::moves;
use crate::search::board_scoring::{material_score, Score, MAX_SCORE, MIN_SCORE};
use crate::tafl_errors::TaflErrors;

/// Every `(from, to)` move pair available to `team`, enumerated in board
/// index order and, per tile, in move-generator direction order. The search
/// tie-break is defined by this ordering.
pub fn iterate<'a>(
    board: &'a Board,
    team: Team,
) -> impl Iterator<Item = (Vector, Vector)> + 'a {
    board
        .tiles
        .iter()
        .enumerate()
        .filter(move |(_, tile)| tile.allegiance() == team)
        .flat_map(move |(index, _)| {
            let from = board.vec(index);
            moves(board, from).into_iter().map(move |to| (from, to))
        })
}

/// Score of the strongest (or weakest, when minimizing) position reachable
/// from `board` with `turn` to move, looking `depth` plies ahead.
pub fn minimax(
    board: &Board,
    turn: Team,
    depth: u32,
    maximizing: bool,
) -> Result<Score, TaflErrors> {
    let adversary = turn.opponent()?;
    if depth == 0 {
        return Ok(material_score(board, adversary));
    }

    let mut result = if maximizing { MIN_SCORE } else { MAX_SCORE };
    for (from, to) in iterate(board, turn) {
        let value = minimax(&board.resolve(from, to), adversary, depth - 1, !maximizing)?;
        result = if maximizing {
            result.max(value)
        } else {
            result.min(value)
        };
    }

    Ok(result)
}

/// The strongest move for `team` looking `depth` plies ahead.
///
/// Deterministic: ties keep the earlier-enumerated move. Fails with
/// `NoLegalMoves` when `team` cannot move anywhere on the board.
pub fn best(board: &Board, team: Team, depth: u32) -> Result<(Vector, Vector), TaflErrors> {
    let adversary = team.opponent()?;
    let mut best_move = None;
    let mut best_score = MIN_SCORE;
    for (from, to) in iterate(board, team) {
        let value = minimax(
            &board.resolve(from, to),
            adversary,
            depth.saturating_sub(1),
            false,
        )?;
        if value > best_score {
            best_score = value;
            best_move = Some((from, to));
        }
    }

    best_move.ok_or(TaflErrors::NoLegalMoves)
}
