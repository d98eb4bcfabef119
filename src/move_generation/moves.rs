//! Legal destination enumeration for a single tile.

use crate::game_state::board::{Board, Vector, OFFSETS};
use crate::game_state::tafl_types::{Tile, KING_LIKE};

/// Whether the moving tile `t` may come to rest on the tile `u`.
///
/// Empty squares are open to everyone; thrones and refuges only admit the
/// king. Everything else blocks.
fn allowed(t: Tile, u: Tile) -> bool {
    if u == Tile::Empty {
        return true;
    }

    t.is_in(KING_LIKE) && u.is_in(Tile::Throne.bits() | Tile::Refuge.bits())
}

/// All legal destinations for the tile at `from`, sliding outward in north,
/// east, south, west order. Pieces cannot jump: each direction stops at the
/// first square that is not a legal landing spot. The one exception is a
/// defender sliding past a throne, which does not block its line although
/// the defender cannot stop there.
pub fn moves(board: &Board, (ax, ay): Vector) -> Vec<Vector> {
    let mut result = Vec::new();
    let t = board.get(ax, ay);

    for (ox, oy) in OFFSETS {
        let mut step = 1i8;
        loop {
            let bx = ax + ox * step;
            let by = ay + oy * step;
            if bx < 0
                || by < 0
                || bx as usize >= board.width
                || by as usize >= board.height()
            {
                break;
            }

            let n = board.get(bx, by);
            if t == Tile::Defender && n == Tile::Throne {
                step += 1;
                continue;
            }

            if allowed(t, n) {
                result.push((bx, by));
                step += 1;
                continue;
            }

            break;
        }
    }

    result
}
