//! Pseudo-legal action dispatch shared by the legality filter and the attack
//! queries.

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
use crate::move_generation::legal_moves_bishop::generate_bishop_actions;
use crate::move_generation::legal_moves_king::generate_king_actions;
use crate::move_generation::legal_moves_knight::generate_knight_actions;
use crate::move_generation::legal_moves_pawn::generate_pawn_actions;
use crate::move_generation::legal_moves_queen::generate_queen_actions;
use crate::move_generation::legal_moves_rook::generate_rook_actions;
use crate::moves::move_descriptions::{Action, ActionKind};

/// Every pseudo-legal action of `color`, scanning the board rank 8 first.
///
/// `last_action` is the ply played immediately before, consulted only for en
/// passant. Castling is generated only when `include_castling` is set; the
/// attack queries turn it off so castling checks never recurse.
pub fn pseudo_legal_actions(
    board: &Board,
    color: Color,
    last_action: Option<&Action>,
    include_castling: bool,
) -> Vec<Action> {
    let mut out = Vec::<Action>::with_capacity(64);
    for piece in board.pieces(color) {
        match piece.kind {
            PieceKind::Pawn => generate_pawn_actions(board, piece, last_action, &mut out),
            PieceKind::Knight => generate_knight_actions(board, piece, &mut out),
            PieceKind::Bishop => generate_bishop_actions(board, piece, &mut out),
            PieceKind::Rook => generate_rook_actions(board, piece, &mut out),
            PieceKind::Queen => generate_queen_actions(board, piece, &mut out),
            PieceKind::King => generate_king_actions(board, piece, include_castling, &mut out),
        }
    }
    out
}

/// Emits a Move onto an empty square or a Capture onto an enemy one. Returns
/// `true` when the square blocks any further travel along a ray.
#[inline]
pub fn push_step_action(board: &Board, piece: &Piece, to: Square, out: &mut Vec<Action>) -> bool {
    match board.occupant_at(to) {
        None => {
            out.push(Action::new(*piece, to, ActionKind::Move));
            false
        }
        Some(_) => {
            if board.is_enemy(to, piece.color) {
                out.push(Action::new(*piece, to, ActionKind::Capture));
            }
            true
        }
    }
}
