//! Plain-text board notation.
//!
//! One letter per tile, rows separated by newlines, columns by a single
//! space on output. `unmarshal` is whitespace-tolerant on input (indentation
//! and column spacing are ignored) but validates content: unknown characters
//! and ragged rows are rejected rather than silently decoded.

use crate::game_state::board::Board;
use crate::game_state::tafl_types::Tile;
use crate::tafl_errors::TaflErrors;

fn encode(tile: Tile) -> char {
    match tile {
        Tile::Attacker => 'A',
        Tile::Castle => 'C',
        Tile::Defender => 'D',
        Tile::Empty => '_',
        Tile::King => 'K',
        Tile::None => 'N',
        Tile::Refuge => 'R',
        Tile::Sanctuary => 'S',
        Tile::Throne => 'T',
    }
}

fn decode(token: char) -> Result<Tile, TaflErrors> {
    match token {
        'A' => Ok(Tile::Attacker),
        'C' => Ok(Tile::Castle),
        'D' => Ok(Tile::Defender),
        '_' => Ok(Tile::Empty),
        'K' => Ok(Tile::King),
        'N' => Ok(Tile::None),
        'R' => Ok(Tile::Refuge),
        'S' => Ok(Tile::Sanctuary),
        'T' => Ok(Tile::Throne),
        other => Err(TaflErrors::InvalidBoardToken(other)),
    }
}

/// Render the board as human-readable text, one row per line.
pub fn marshal(board: &Board) -> String {
    board
        .tiles
        .chunks(board.width)
        .map(|row| {
            row.iter()
                .map(|&tile| encode(tile).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse board text produced by `marshal` (or written by hand). The board
/// width is inferred from the first row; every other row must match it.
pub fn unmarshal(text: &str) -> Result<Board, TaflErrors> {
    let mut tiles = Vec::new();
    let mut width = 0usize;

    for (row, line) in text
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .enumerate()
    {
        let mut found = 0usize;
        for token in line.chars().filter(|token| !token.is_whitespace()) {
            tiles.push(decode(token)?);
            found += 1;
        }

        if row == 0 {
            width = found;
        } else if found != width {
            return Err(TaflErrors::UnevenBoardRows((row, width, found)));
        }
    }

    if tiles.is_empty() {
        return Err(TaflErrors::EmptyBoardText);
    }

    Ok(Board { tiles, width })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_tile_kind() {
        let text = "A C D\n_ K N\nR S T";
        let board = unmarshal(text).unwrap();
        assert_eq!(board.width, 3);
        assert_eq!(marshal(&board), text);
    }

    #[test]
    fn input_whitespace_is_ignored() {
        let padded = "
            R _ A
            _ K _
            A _ R
        ";
        let board = unmarshal(padded).unwrap();
        assert_eq!(board.width, 3);
        assert_eq!(unmarshal(&marshal(&board)).unwrap(), board);
    }

    #[test]
    fn unknown_characters_are_rejected() {
        assert_eq!(
            unmarshal("A B"),
            Err(TaflErrors::InvalidBoardToken('B'))
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!(
            unmarshal("A A A\nA A"),
            Err(TaflErrors::UnevenBoardRows((1, 3, 2)))
        );
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(unmarshal("   \n  "), Err(TaflErrors::EmptyBoardText));
    }
}
