//! Terminal-condition detection.

use crate::game_state::board::Board;
use crate::game_state::tafl_types::{Team, Tile};

/// The winning team for the given board, or `None` while the game is still
/// going.
///
/// A sanctuary anywhere means the king reached a refuge and the defenders
/// win outright; that check takes precedence over everything else. After the
/// scan, a missing king hands the game to the attackers and a missing
/// attacker side hands it to the defenders.
pub fn victor(board: &Board) -> Option<Team> {
    let mut king_found = false;
    let mut attacker_found = false;
    for &tile in &board.tiles {
        if tile == Tile::Sanctuary {
            return Some(Team::Defenders);
        }

        if tile.is_in(Tile::King.bits() | Tile::Castle.bits()) {
            king_found = true;
        }

        if tile == Tile::Attacker {
            attacker_found = true;
        }
    }

    if !king_found {
        return Some(Team::Attackers);
    }

    if !attacker_found {
        return Some(Team::Defenders);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::notation::unmarshal;

    #[test]
    fn victory_conditions() {
        let cases: &[(&str, Option<Team>)] = &[
            ("C D D A A", None),
            ("A A D D K", None),
            ("A", Some(Team::Attackers)),
            ("K", Some(Team::Defenders)),
            ("K D", Some(Team::Defenders)),
            ("A D", Some(Team::Attackers)),
            ("A A A A A", Some(Team::Attackers)),
            ("A A D D S", Some(Team::Defenders)),
            ("A A D D R", Some(Team::Attackers)),
        ];

        for (board, expected) in cases {
            assert_eq!(
                victor(&unmarshal(board).unwrap()),
                *expected,
                "victor of board {:?}",
                board,
            );
        }
    }

    #[test]
    fn sanctuary_takes_precedence_over_a_missing_attacker_side() {
        // Both defender win conditions at once still reports defenders.
        let board = unmarshal("S D D _ _").unwrap();
        assert_eq!(victor(&board), Some(Team::Defenders));
    }
}
