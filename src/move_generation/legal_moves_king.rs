//! King action generation, including castling.
//!
//! Castling is gated on the board alone: king and rook unmoved on their home
//! squares, nothing between them, and none of the squares the king stands on,
//! crosses, or lands on attacked. On the queenside the b-file square only has
//! to be empty; the king never passes it.

use crate::game_state::chess_rules::{
    home_row, KINGSIDE_KING_TARGET_COL, KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_KING_TARGET_COL,
    QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::{Board, Piece, PieceKind, Square};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_step_action;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::{Action, ActionKind};

pub fn generate_king_actions(
    board: &Board,
    king: &Piece,
    include_castling: bool,
    out: &mut Vec<Action>,
) {
    for to in king_targets(king.square) {
        push_step_action(board, king, to, out);
    }

    if include_castling {
        generate_castling_actions(board, king, out);
    }
}

fn generate_castling_actions(board: &Board, king: &Piece, out: &mut Vec<Action>) {
    let row = home_row(king.color);
    if king.has_moved || king.square != Square::new(row, KING_HOME_COL) {
        return;
    }

    if can_castle(board, king, KINGSIDE_ROOK_COL, &[5, 6], &[4, 5, 6]) {
        out.push(Action::new(
            *king,
            Square::new(row, KINGSIDE_KING_TARGET_COL),
            ActionKind::KingsideCastle,
        ));
    }

    if can_castle(board, king, QUEENSIDE_ROOK_COL, &[1, 2, 3], &[2, 3, 4]) {
        out.push(Action::new(
            *king,
            Square::new(row, QUEENSIDE_KING_TARGET_COL),
            ActionKind::QueensideCastle,
        ));
    }
}

fn can_castle(
    board: &Board,
    king: &Piece,
    rook_col: u8,
    empty_cols: &[u8],
    safe_cols: &[u8],
) -> bool {
    let row = king.square.row();

    let rook_ready = board.occupant_at(Square::new(row, rook_col)).is_some_and(|rook| {
        rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
    });
    if !rook_ready {
        return false;
    }

    if empty_cols
        .iter()
        .any(|&col| !board.is_empty(Square::new(row, col)))
    {
        return false;
    }

    let enemy = king.color.opposite();
    !safe_cols
        .iter()
        .any(|&col| is_square_attacked(board, Square::new(row, col), enemy))
}
