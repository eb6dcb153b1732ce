//! Pawn step geometry: forward pushes and diagonal capture squares.

use crate::game_state::chess_types::{Color, Square};

#[inline]
pub fn pawn_push_target(color: Color, from: Square) -> Option<Square> {
    from.offset(color.forward(), 0)
}

#[inline]
pub fn pawn_double_push_target(color: Color, from: Square) -> Option<Square> {
    from.offset(color.forward() * 2, 0)
}

#[inline]
pub fn pawn_capture_targets(color: Color, from: Square) -> impl Iterator<Item = Square> {
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| from.offset(color.forward(), d_col))
}
