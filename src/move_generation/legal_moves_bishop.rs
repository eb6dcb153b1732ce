//! Bishop action generation.
//!
//! Ray targets already stop at the first obstruction; this layer only turns
//! them into Move/Capture actions and drops friendly-occupied squares.

use crate::game_state::chess_types::{Board, Piece};
use crate::move_generation::legal_move_shared::push_step_action;
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::move_descriptions::Action;

pub fn generate_bishop_actions(board: &Board, bishop: &Piece, out: &mut Vec<Action>) {
    for to in bishop_targets(board, bishop.square) {
        push_step_action(board, bishop, to, out);
    }
}
