//! Canonical chess-rule constants.
//!
//! Starting position, home rows, and the columns involved in castling. Rows
//! follow the board convention where row 0 is rank 8.

use crate::game_state::chess_types::Color;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

pub const KINGSIDE_KING_TARGET_COL: u8 = 6;
pub const KINGSIDE_ROOK_TARGET_COL: u8 = 5;
pub const QUEENSIDE_KING_TARGET_COL: u8 = 2;
pub const QUEENSIDE_ROOK_TARGET_COL: u8 = 3;

/// Row holding the king and rooks at the start of the game.
#[inline]
pub const fn home_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}
