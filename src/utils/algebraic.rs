//! Square conversions for algebraic coordinates (e.g. `e4`).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(format!(
            "'{square}' must be exactly 2 characters"
        )));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "'{square}' has file '{}' outside a-h",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "'{square}' has rank '{}' outside 1-8",
            rank as char
        )));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}
