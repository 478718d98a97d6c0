//! Conversions between coordinates and algebraic squares.
//!
//! Converts between human-readable squares (e.g., `e4`) and the zero-based
//! row/column pairs used by the board. Columns run `a..z`, so boards larger
//! than 8x8 stay addressable; whether a square is actually on the board is
//! decided by the boundary rule, not here.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Coordinates;

/// Highest column letter the notation can express.
pub const MAX_COLUMNS: usize = 26;

/// Convert algebraic notation (for example: "e4") to coordinates.
pub fn parse_coordinates(square: &str) -> Result<Coordinates, ChessErrors> {
    let trimmed = square.trim();
    let mut chars = trimmed.chars();

    let column_char = chars
        .next()
        .ok_or_else(|| ChessErrors::InvalidAlgebraicString(square.to_owned()))?
        .to_ascii_lowercase();
    if !column_char.is_ascii_lowercase() {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let rank_part = chars.as_str();
    if rank_part.is_empty() || !rank_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }
    let rank: i32 = rank_part
        .parse()
        .map_err(|_| ChessErrors::InvalidAlgebraicString(square.to_owned()))?;
    if rank < 1 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let column = i32::from(column_char as u8 - b'a');
    Ok(Coordinates::new(rank - 1, column))
}

/// Column letter (upper-case) for a zero-based column index.
pub fn column_letter(column: usize) -> char {
    if column < MAX_COLUMNS {
        char::from(b'A' + column as u8)
    } else {
        '?'
    }
}

/// Convert coordinates to algebraic notation (for example: "E4").
///
/// Negative or too-wide coordinates still render so they can be named in
/// error explanations.
pub fn coordinates_to_algebraic(coordinates: Coordinates) -> String {
    let rank = coordinates.row.checked_add(1).filter(|rank| *rank > 0);
    match rank {
        Some(rank) if (0..MAX_COLUMNS as i32).contains(&coordinates.column) => {
            format!("{}{}", column_letter(coordinates.column as usize), rank)
        }
        _ => format!("[{},{}]", coordinates.row, coordinates.column),
    }
}
