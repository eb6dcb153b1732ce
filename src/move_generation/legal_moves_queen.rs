use crate::game_state::chess_types::{Board, Piece};
use crate::move_generation::legal_move_shared::push_step_action;
use crate::moves::move_descriptions::Action;
use crate::moves::queen_moves::queen_targets;

pub fn generate_queen_actions(board: &Board, queen: &Piece, out: &mut Vec<Action>) {
    for to in queen_targets(board, queen.square) {
        push_step_action(board, queen, to, out);
    }
}
