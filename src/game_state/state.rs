//! Whole-game state: board, turn, history, and tile identities.
//!
//! `GameState` composes a board with the side to move, the move history, a
//! frozen snapshot of the starting position, and the persistent identity
//! keys. Every accepted move produces a brand-new state value; nothing is
//! mutated in place.

use crate::game_state::board::{Board, Vector};
use crate::game_state::keys::{Key, KeySet};
use crate::game_state::tafl_types::{Team, Tile};
use crate::tafl_errors::TaflErrors;
use crate::utils::notation::unmarshal;

/// A board and whose turn it is, with no history attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub turn: Team,
}

/// Rich per-square view for rendering and animation consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView {
    pub x: i8,
    pub y: i8,
    pub tile: Tile,
    pub initial: Tile,
    pub key: Key,
}

/// The total state of one game session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub turn: Team,
    pub history: Vec<(Vector, Vector)>,
    /// Snapshot taken once at creation, never changed afterwards.
    pub initial: Snapshot,
    pub keys: KeySet,
}

impl GameState {
    /// A fresh game on the given board with `start` to move.
    pub fn new(board: Board, start: Team) -> GameState {
        let keys = KeySet::new(board.tiles.len());
        GameState {
            initial: Snapshot {
                board: board.clone(),
                turn: start,
            },
            board,
            turn: start,
            history: Vec::new(),
            keys,
        }
    }

    /// A fresh game from marshaled board text.
    pub fn from_text(text: &str, start: Team) -> Result<GameState, TaflErrors> {
        Ok(GameState::new(unmarshal(text)?, start))
    }

    /// Advance the game by one move and return the successor state.
    ///
    /// No legality check happens here; callers are expected to have
    /// validated the move through the move generator. The turn flips, the
    /// moved piece carries its identity key to the destination, and the
    /// initial snapshot rides along untouched.
    pub fn play(&self, a: Vector, b: Vector) -> Result<GameState, TaflErrors> {
        let (ax, ay) = a;
        let (bx, by) = b;
        let mut history = self.history.clone();
        history.push((a, b));

        Ok(GameState {
            board: self.board.resolve(a, b),
            turn: self.turn.opponent()?,
            history,
            initial: self.initial.clone(),
            keys: self
                .keys
                .derive(self.board.index(ax, ay), self.board.index(bx, by)),
        })
    }

    /// Positions of every `team` tile that still has a legal move.
    pub fn candidates(&self, team: Team) -> Vec<Vector> {
        crate::move_generation::moveable::moveable(&self.board, team)
    }

    /// Legal destinations for the tile at `position`.
    pub fn moves(&self, position: Vector) -> Vec<Vector> {
        crate::move_generation::moves::moves(&self.board, position)
    }

    /// How many of `team`'s pieces have been captured since the game began.
    pub fn captured(&self, team: Team) -> usize {
        self.initial
            .board
            .count(team)
            .saturating_sub(self.board.count(team))
    }

    /// Per-index tile descriptions combining the current tile, the tile the
    /// square started with, and the square's identity key.
    pub fn tiles(&self) -> Vec<TileView> {
        self.board
            .tiles
            .iter()
            .enumerate()
            .map(|(index, &tile)| {
                let (x, y) = self.board.vec(index);
                TileView {
                    x,
                    y,
                    tile,
                    initial: self.initial.board.tiles[index],
                    key: self.keys.values[index],
                }
            })
            .collect()
    }
}
