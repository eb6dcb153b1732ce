use crate::game_state::chess_types::{Board, Square};
use crate::moves::rook_moves::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn bishop_targets(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(13);
    for (d_row, d_col) in BISHOP_DIRECTIONS {
        trace_ray(board, from, d_row, d_col, &mut out);
    }
    out
}
