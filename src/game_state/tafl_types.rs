//! Core tile and team types for the tafl board model.
//!
//! Tiles are assigned increasing powers of two so that *sets* of tile kinds
//! can be tested with a single bitwise AND against a `TileMask`. All capture
//! and landing legality logic works on set membership rather than equality.

use crate::tafl_errors::TaflErrors;

/// A single square's content, including the special squares.
///
/// `Castle` is the king standing on the throne, `Sanctuary` is the king
/// standing on a refuge. `None` marks out-of-bounds or out-of-play squares.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    None = 1,
    Empty = 1 << 1,
    Attacker = 1 << 2,
    Defender = 1 << 3,
    King = 1 << 4,
    Throne = 1 << 5,
    Refuge = 1 << 6,
    Castle = 1 << 7,
    Sanctuary = 1 << 8,
}

/// Compact tile-set bitmask.
pub type TileMask = u16;

/// Tile kinds that can be removed from play by sandwiching.
pub const CAPTURABLE: TileMask =
    Tile::Attacker.bits() | Tile::Defender.bits() | Tile::King.bits() | Tile::Castle.bits();

/// Tile kinds that count toward the four-way encirclement of the king.
/// Off-board squares (`None`) participate, so a board edge closes the trap.
pub const KING_ANVILS: TileMask =
    Tile::Attacker.bits() | Tile::Refuge.bits() | Tile::None.bits();

/// The king in any of its forms.
pub const KING_LIKE: TileMask =
    Tile::King.bits() | Tile::Castle.bits() | Tile::Sanctuary.bits();

impl Tile {
    #[inline]
    pub const fn bits(self) -> TileMask {
        self as TileMask
    }

    /// True when this tile's bit is inside the given mask.
    #[inline]
    pub const fn is_in(self, mask: TileMask) -> bool {
        self as TileMask & mask != 0
    }

    /// The team this tile fights for. Special squares (throne, refuge) and
    /// empty or out-of-bounds squares belong to `Team::None`.
    pub fn allegiance(self) -> Team {
        match self {
            Tile::Defender | Tile::King | Tile::Castle | Tile::Sanctuary => Team::Defenders,
            Tile::Attacker => Team::Attackers,
            _ => Team::None,
        }
    }
}

/// Side to move, or `None` for squares that belong to nobody.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Attackers,
    Defenders,
    None,
}

impl Team {
    /// The opposing side. `Team::None` has no sensible opponent and fails
    /// loudly rather than guessing.
    #[inline]
    pub fn opponent(self) -> Result<Team, TaflErrors> {
        match self {
            Team::Attackers => Ok(Team::Defenders),
            Team::Defenders => Ok(Team::Attackers),
            Team::None => Err(TaflErrors::NoOpponentForNeutralTeam),
        }
    }
}
