//! Rook rays and the shared ray walker used by every sliding piece.
//!
//! A ray includes each empty square in its direction and the first occupied
//! square (of either side), then stops. Nothing beyond an obstruction is ever
//! produced.

use crate::game_state::chess_types::{Board, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[inline]
pub fn rook_targets(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(14);
    for (d_row, d_col) in ROOK_DIRECTIONS {
        trace_ray(board, from, d_row, d_col, &mut out);
    }
    out
}

pub fn trace_ray(board: &Board, from: Square, d_row: i8, d_col: i8, out: &mut Vec<Square>) {
    let mut current = from;
    for _ in 0..7 {
        let Some(next) = current.offset(d_row, d_col) else {
            break;
        };
        out.push(next);
        if !board.is_empty(next) {
            break;
        }
        current = next;
    }
}
