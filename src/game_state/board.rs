//! Board representation and the unchecked move resolver.
//!
//! A `Board` is a flat, width-indexed vector of tiles treated as a value:
//! `resolve` never mutates its input, it clones a working copy, applies the
//! move, runs the capture scan against the working copy, and returns it.

use crate::game_state::tafl_types::{Team, Tile, CAPTURABLE, KING_ANVILS, KING_LIKE};

/// Board-relative coordinates, origin top-left, x growing east, y south.
pub type Vector = (i8, i8);

/// The four orthogonal step offsets, in north, east, south, west order.
/// Move generation and the capture scan both depend on this ordering; the
/// search's deterministic tie-break is defined in terms of it.
pub const OFFSETS: [(i8, i8); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Fixed-width grid of tiles. Height is inferred from `tiles.len() / width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub tiles: Vec<Tile>,
    pub width: usize,
}

impl Board {
    #[inline]
    pub fn height(&self) -> usize {
        self.tiles.len() / self.width
    }

    /// Flat index of an in-bounds coordinate pair.
    #[inline]
    pub fn index(&self, x: i8, y: i8) -> usize {
        self.width * y as usize + x as usize
    }

    /// Coordinate pair of a flat index.
    #[inline]
    pub fn vec(&self, index: usize) -> Vector {
        ((index % self.width) as i8, (index / self.width) as i8)
    }

    /// The tile at `(x, y)`, or `Tile::None` for any out-of-bounds
    /// coordinate. Never fails; the capture scan relies on off-board reads
    /// decaying to `None`.
    pub fn get(&self, x: i8, y: i8) -> Tile {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height() {
            return Tile::None;
        }

        self.tiles[self.index(x, y)]
    }

    fn set(&mut self, x: i8, y: i8, tile: Tile) {
        let index = self.index(x, y);
        self.tiles[index] = tile;
    }

    fn remove(&mut self, x: i8, y: i8) {
        self.set(x, y, vacated(self.get(x, y)));
    }

    /// Perform an unchecked move and return the resulting board.
    ///
    /// Legality is the move generator's concern; `resolve` only applies the
    /// consequences. The moving tile leaves its vacated form behind, arrives
    /// in a form that depends on the destination square, and then each
    /// orthogonal neighbor of the destination is tested for capture:
    ///
    /// - a capturable, hostile, non-king-like neighbor is removed when the
    ///   tile one step further along the same direction is hostile to it, or
    ///   when that far tile is off the board;
    /// - the king itself falls to attackers only when all four of its
    ///   neighbors hold `KING_ANVILS` tiles at once, independent of the
    ///   single-direction anvil test.
    pub fn resolve(&self, (ax, ay): Vector, (bx, by): Vector) -> Board {
        let mut next = self.clone();
        let tile = next.get(ax, ay);
        next.set(ax, ay, vacated(tile));
        let landing = next.get(bx, by);
        next.set(bx, by, arrival(carried(tile), landing));

        for (ox, oy) in OFFSETS {
            let cx = bx + ox;
            let cy = by + oy;
            let adjacent = next.get(cx, cy);
            if !adjacent.is_in(CAPTURABLE) {
                continue;
            }

            if !hostile(tile, adjacent) {
                continue;
            }

            // The adjacent tile is an enemy: look one step further along the
            // same direction for the anvil that closes the sandwich.
            let far = next.get(bx + ox * 2, by + oy * 2);
            if (hostile(adjacent, far) || far == Tile::None) && !adjacent.is_in(KING_LIKE) {
                next.remove(cx, cy);
            }

            // Attackers may capture the king only when they have it
            // surrounded on all four sides.
            if tile == Tile::Attacker
                && adjacent == Tile::King
                && next.get(cx, cy + 1).is_in(KING_ANVILS)
                && next.get(cx, cy - 1).is_in(KING_ANVILS)
                && next.get(cx + 1, cy).is_in(KING_ANVILS)
                && next.get(cx - 1, cy).is_in(KING_ANVILS)
            {
                next.remove(cx, cy);
            }
        }

        next
    }

    /// Number of tiles on the board currently fighting for `team`.
    pub fn count(&self, team: Team) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.allegiance() == team)
            .count()
    }
}

/// What a square becomes when the tile standing on it leaves or is captured.
fn vacated(tile: Tile) -> Tile {
    match tile {
        Tile::Castle => Tile::Throne,
        Tile::Sanctuary => Tile::Refuge,
        _ => Tile::Empty,
    }
}

/// The piece actually travelling: a castle or sanctuary moves as the king.
fn carried(tile: Tile) -> Tile {
    match tile {
        Tile::Castle | Tile::Sanctuary => Tile::King,
        _ => tile,
    }
}

/// The form the carried tile takes on its destination square.
fn arrival(tile: Tile, onto: Tile) -> Tile {
    match onto {
        Tile::Throne => Tile::Castle,
        Tile::Refuge => Tile::Sanctuary,
        _ => tile,
    }
}

/// Mutual hostility between two tiles. Thrones and refuges are hostile to
/// everyone; otherwise both tiles must have a defined allegiance and those
/// allegiances must differ.
fn hostile(a: Tile, b: Tile) -> bool {
    if a == Tile::Throne || b == Tile::Throne {
        return true;
    }

    if a == Tile::Refuge || b == Tile::Refuge {
        return true;
    }

    if a.allegiance() == Team::None || b.allegiance() == Team::None {
        return false;
    }

    a.allegiance() != b.allegiance()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::notation::{marshal, unmarshal};

    #[test]
    fn get_returns_none_outside_the_board() {
        let board = unmarshal("A _\n_ D").unwrap();
        assert_eq!(board.get(-1, 0), Tile::None);
        assert_eq!(board.get(0, -1), Tile::None);
        assert_eq!(board.get(2, 0), Tile::None);
        assert_eq!(board.get(0, 2), Tile::None);
        assert_eq!(board.get(0, 0), Tile::Attacker);
        assert_eq!(board.get(1, 1), Tile::Defender);
    }

    #[test]
    fn resolve_does_not_mutate_its_input() {
        let board = unmarshal("_ A D\nD _ _").unwrap();
        let copy = board.clone();
        let _ = board.resolve((0, 1), (0, 0));
        assert_eq!(board, copy);
    }

    #[test]
    fn resolve_captures_and_moves() {
        let cases: &[(&str, &str, &str, Vector, Vector)] = &[
            (
                "move without capture one space to the east",
                "A _",
                "_ A",
                (0, 0),
                (1, 0),
            ),
            (
                "move without capture one space to the west",
                "_ A",
                "A _",
                (1, 0),
                (0, 0),
            ),
            (
                "move without capture one space to the north",
                "_ _ _\n_ K _\n_ _ _",
                "_ K _\n_ _ _\n_ _ _",
                (1, 1),
                (1, 0),
            ),
            (
                "defender captures an attacker",
                "_ A D\nD _ _",
                "D _ D\n_ _ _",
                (0, 1),
                (0, 0),
            ),
            (
                "king moves away from a castle",
                "C _ _",
                "T K _",
                (0, 0),
                (1, 0),
            ),
            (
                "king moves away from a sanctuary",
                "S _",
                "R K",
                (0, 0),
                (1, 0),
            ),
            ("king moves into a refuge", "R K", "S _", (1, 0), (0, 0)),
            ("king moves into a throne", "T K", "C _", (1, 0), (0, 0)),
            (
                "attacker must totally surround the king to capture it",
                "_ K A\nA _ _",
                "A K A\n_ _ _",
                (0, 1),
                (0, 0),
            ),
            (
                "attacker captures multiple defenders",
                "A D _ D A\n_ _ A _ _",
                "A _ A _ A\n_ _ _ _ _",
                (2, 1),
                (2, 0),
            ),
            (
                "defender captures multiple attackers",
                "_ _ D _ _\n_ _ A _ _\n_ D _ A D",
                "_ _ D _ _\n_ _ _ _ _\n_ _ D _ D",
                (1, 2),
                (2, 2),
            ),
            (
                "defender captures an attacker using the king as an anvil",
                "K A _\n_ _ D",
                "K _ D\n_ _ _",
                (2, 1),
                (2, 0),
            ),
            (
                "defender captures an attacker against the board edge",
                "D _ A",
                "_ D _",
                (0, 0),
                (1, 0),
            ),
            (
                "attackers capture the king",
                "_ A _\n_ K A\nA A _",
                "_ A _\nA _ A\n_ A _",
                (0, 2),
                (0, 1),
            ),
            (
                "attackers capture the king and a defender",
                "_ A _ _\n_ D A _\n_ _ K A\n_ A A _",
                "_ A _ _\n_ _ A _\n_ A _ A\n_ _ A _",
                (1, 3),
                (1, 2),
            ),
            (
                "attackers capture the king against the edge of the board",
                "A K A\n_ _ A",
                "A _ A\n_ A _",
                (2, 1),
                (1, 1),
            ),
            (
                "attackers capture the king against the edge and a refuge",
                "R K A\nA _ _",
                "R _ A\n_ A _",
                (0, 1),
                (1, 1),
            ),
            (
                "defenders may use thrones as anvils",
                "D _ A T",
                "_ D _ T",
                (0, 0),
                (1, 0),
            ),
            (
                "attackers may use thrones as anvils",
                "A _ D T",
                "_ A _ T",
                (0, 0),
                (1, 0),
            ),
            (
                "defenders may use the castle as an anvil",
                "D _ A C",
                "_ D _ C",
                (0, 0),
                (1, 0),
            ),
            (
                "attackers may not use the castle as an anvil",
                "A _ D C",
                "_ A D C",
                (0, 0),
                (1, 0),
            ),
            (
                "attackers may use refuges as anvils",
                "A _ D R",
                "_ A _ R",
                (0, 0),
                (1, 0),
            ),
            (
                "defenders may use refuges as anvils",
                "D _ A R",
                "_ D _ R",
                (0, 0),
                (1, 0),
            ),
            (
                "kings may use refuges as anvils",
                "K _ A R",
                "_ K _ R",
                (0, 0),
                (1, 0),
            ),
            (
                "kings may use refuges as anvils when moving from a castle",
                "C _ A R",
                "T K _ R",
                (0, 0),
                (1, 0),
            ),
        ];

        for (message, before, after, a, b) in cases {
            let actual = unmarshal(before).unwrap().resolve(*a, *b);
            let expected = unmarshal(after).unwrap();
            assert_eq!(
                actual,
                expected,
                "{}\nexpected:\n{}\nactual:\n{}",
                message,
                marshal(&expected),
                marshal(&actual),
            );
        }
    }

    #[test]
    fn count_tracks_allegiance_not_raw_tiles() {
        let board = unmarshal("A A D C T R _").unwrap();
        assert_eq!(board.count(Team::Attackers), 2);
        // The castle is the king, which fights for the defenders.
        assert_eq!(board.count(Team::Defenders), 2);
    }
}
