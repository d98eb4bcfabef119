//! Board evaluation for the search.
//!
//! Scores are plain material counts relative to a chosen perspective: the
//! higher the score, the stronger that team's position. Sentinel values
//! bracket every reachable material count so the search can seed its
//! max/min folds.

use crate::game_state::board::Board;
use crate::game_state::tafl_types::{Team, CAPTURABLE};

/// Numeric representation of an evaluation score.
pub type Score = i32;

/// Sentinel below every reachable evaluation.
pub const MIN_SCORE: Score = Score::MIN;
/// Sentinel above every reachable evaluation.
pub const MAX_SCORE: Score = Score::MAX;

/// Material count of the board relative to `perspective`: +1 for every
/// capturable tile on that side, -1 for every other capturable tile.
/// Special squares and the sanctuary are ignored; this is a relative
/// strength measure, not an absolute one.
pub fn material_score(board: &Board, perspective: Team) -> Score {
    let mut sum = 0;
    for &tile in &board.tiles {
        if !tile.is_in(CAPTURABLE) {
            continue;
        }

        if tile.allegiance() == perspective {
            sum += 1;
        } else {
            sum -= 1;
        }
    }

    sum
}
