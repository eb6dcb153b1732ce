use crate::game_state::chess_types::{Board, Piece};
use crate::move_generation::legal_move_shared::push_step_action;
use crate::moves::knight_moves::knight_targets;
use crate::moves::move_descriptions::Action;

pub fn generate_knight_actions(board: &Board, knight: &Piece, out: &mut Vec<Action>) {
    for to in knight_targets(knight.square) {
        push_step_action(board, knight, to, out);
    }
}
