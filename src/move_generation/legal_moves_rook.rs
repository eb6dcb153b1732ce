//! Rook action generation.
//!
//! Emits Move/Capture actions along the four orthogonal rays. Castling is a
//! king action and is not produced here.

use crate::game_state::chess_types::{Board, Piece};
use crate::move_generation::legal_move_shared::push_step_action;
use crate::moves::move_descriptions::Action;
use crate::moves::rook_moves::rook_targets;

pub fn generate_rook_actions(board: &Board, rook: &Piece, out: &mut Vec<Action>) {
    for to in rook_targets(board, rook.square) {
        push_step_action(board, rook, to, out);
    }
}
