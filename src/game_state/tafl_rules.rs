//! Board variant catalog.
//!
//! Each variant is a named starting position kept as an opaque text literal
//! in the marshaled board format. The layouts follow the historical setups,
//! with refuges in the corners and the king starting on the throne (`C`).

use crate::game_state::board::Board;
use crate::utils::notation::unmarshal;

/// Hnefatafl, 11x11.
pub const HNEFATAFL: &str = "
    R _ _ A A A A A _ _ R
    _ _ _ _ _ A _ _ _ _ _
    _ _ _ _ _ _ _ _ _ _ _
    A _ _ _ _ D _ _ _ _ A
    A _ _ _ D D D _ _ _ A
    A A _ D D C D D _ A A
    A _ _ _ D D D _ _ _ A
    A _ _ _ _ D _ _ _ _ A
    _ _ _ _ _ _ _ _ _ _ _
    _ _ _ _ _ A _ _ _ _ _
    R _ _ A A A A A _ _ R
";

/// Brandubh, 7x7.
pub const BRANDUBH: &str = "
    R _ _ A _ _ R
    _ _ _ A _ _ _
    _ _ _ D _ _ _
    A A D C D A A
    _ _ _ D _ _ _
    _ _ _ A _ _ _
    R _ _ A _ _ R
";

/// Tablut, 9x9.
pub const TABLUT: &str = "
    R _ _ A A A _ _ R
    _ _ _ _ A _ _ _ _
    _ _ _ _ D _ _ _ _
    A _ _ _ D _ _ _ A
    A A D D C D D A A
    A _ _ _ D _ _ _ A
    _ _ _ _ D _ _ _ _
    _ _ _ _ A _ _ _ _
    R _ _ A A A _ _ R
";

/// Ard Ri, 7x7.
pub const ARD_RI: &str = "
    R _ A A A _ R
    _ _ _ A _ _ _
    A _ D D D _ A
    A A D C D A A
    A _ D D D _ A
    _ _ _ A _ _ _
    R _ A A A _ R
";

/// Tawl-Bwrdd, 11x11.
pub const TAWL_BWRDD: &str = "
    R _ _ _ A A A _ _ _ R
    _ _ _ _ _ A _ _ _ _ _
    _ _ _ _ _ _ _ _ _ _ _
    _ _ _ _ _ D _ _ _ _ _
    A _ _ _ D D D _ _ _ A
    A A _ D D C D D _ A A
    A _ _ _ D D D _ _ _ A
    _ _ _ _ _ D _ _ _ _ _
    _ _ _ _ _ _ _ _ _ _ _
    _ _ _ _ _ A _ _ _ _ _
    R _ _ _ A A A _ _ _ R
";

/// Alea Evangelii, 19x19.
pub const ALEA_EVANGELII: &str = "
    R _ A _ _ A _ _ _ _ _ _ _ A _ _ A _ R
    _ _ _ _ A _ _ _ _ _ _ _ _ _ A _ _ _ _
    A _ _ _ _ _ _ _ _ A _ _ _ _ _ _ _ _ A
    _ _ _ _ _ _ _ _ A _ A _ _ _ _ _ _ _ _
    _ A _ _ _ _ A _ _ D _ _ A _ _ _ _ A _
    A _ _ _ _ _ _ _ A D A _ _ _ _ _ _ _ A
    _ _ _ _ A _ _ _ D D D _ _ _ A _ _ _ _
    _ _ _ _ _ _ _ A _ D _ A _ _ _ _ _ _ _
    _ _ _ A _ _ D D _ D _ D D _ _ A _ _ _
    _ _ _ _ A D D D D C D D D D A _ _ _ _
    _ _ _ A _ _ D D _ D _ D D _ _ A _ _ _
    _ _ _ _ _ _ _ A _ D _ A _ _ _ _ _ _ _
    _ _ _ _ A _ _ _ D D D _ _ _ A _ _ _ _
    A _ _ _ _ _ _ _ A D A _ _ _ _ _ _ _ A
    _ A _ _ _ _ A _ _ D _ _ A _ _ _ _ A _
    _ _ _ _ _ _ _ _ A _ A _ _ _ _ _ _ _ _
    A _ _ _ _ _ _ _ _ A _ _ _ _ _ _ _ _ A
    _ _ _ _ A _ _ _ _ _ _ _ _ _ A _ _ _ _
    R _ A _ _ A _ _ _ _ _ _ _ A _ _ A _ R
";

/// The named starting positions the engine ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardVariant {
    AleaEvangelii,
    ArdRi,
    Brandubh,
    Hnefatafl,
    Tablut,
    TawlBwrdd,
}

impl BoardVariant {
    pub fn name(self) -> &'static str {
        match self {
            BoardVariant::AleaEvangelii => "Alea Evangelii",
            BoardVariant::ArdRi => "Ard Ri",
            BoardVariant::Brandubh => "Brandubh",
            BoardVariant::Hnefatafl => "Hnefatafl",
            BoardVariant::Tablut => "Tablut",
            BoardVariant::TawlBwrdd => "Tawl Bwrdd",
        }
    }

    fn text(self) -> &'static str {
        match self {
            BoardVariant::AleaEvangelii => ALEA_EVANGELII,
            BoardVariant::ArdRi => ARD_RI,
            BoardVariant::Brandubh => BRANDUBH,
            BoardVariant::Hnefatafl => HNEFATAFL,
            BoardVariant::Tablut => TABLUT,
            BoardVariant::TawlBwrdd => TAWL_BWRDD,
        }
    }

    /// All variants, for catalog listings.
    pub const ALL: [BoardVariant; 6] = [
        BoardVariant::AleaEvangelii,
        BoardVariant::ArdRi,
        BoardVariant::Brandubh,
        BoardVariant::Hnefatafl,
        BoardVariant::Tablut,
        BoardVariant::TawlBwrdd,
    ];
}

/// The starting board for the given variant.
pub fn starting_board(variant: BoardVariant) -> Board {
    unmarshal(variant.text()).expect("variant board literal should always parse")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::tafl_types::{Team, Tile};
    use crate::game_state::victor::victor;

    #[test]
    fn every_variant_parses_to_a_square_board() {
        for variant in BoardVariant::ALL {
            let board = starting_board(variant);
            assert_eq!(board.width, board.height(), "{}", variant.name());
        }
    }

    #[test]
    fn every_variant_starts_with_the_king_on_the_throne() {
        for variant in BoardVariant::ALL {
            let board = starting_board(variant);
            let castles = board
                .tiles
                .iter()
                .filter(|&&tile| tile == Tile::Castle)
                .count();
            assert_eq!(castles, 1, "{}", variant.name());

            let center = (board.width / 2) as i8;
            assert_eq!(board.get(center, center), Tile::Castle, "{}", variant.name());
        }
    }

    #[test]
    fn every_variant_starts_undecided_with_attackers_outnumbering() {
        for variant in BoardVariant::ALL {
            let board = starting_board(variant);
            assert_eq!(victor(&board), None, "{}", variant.name());
            assert!(
                board.count(Team::Attackers) > board.count(Team::Defenders),
                "{}",
                variant.name(),
            );
        }
    }
}
