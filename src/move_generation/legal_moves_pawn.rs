//! Pawn action generation: pushes, double pushes, captures, en passant, and
//! promotions.
//!
//! Any push or capture that reaches the far row is emitted as four promotion
//! actions instead of a single Move/Capture. A capturing promotion records the
//! victim's material value so scoring and attack detection treat it as a
//! capture.

use crate::game_state::chess_rules::{pawn_start_row, promotion_row};
use crate::game_state::chess_types::{Board, Piece, PieceKind};
use crate::moves::move_descriptions::{Action, ActionKind, PROMOTION_KINDS};
use crate::moves::pawn_moves::{pawn_capture_targets, pawn_double_push_target, pawn_push_target};

pub fn generate_pawn_actions(
    board: &Board,
    pawn: &Piece,
    last_action: Option<&Action>,
    out: &mut Vec<Action>,
) {
    let side = pawn.color;
    let last_row = promotion_row(side);

    if let Some(to) = pawn_push_target(side, pawn.square) {
        if board.is_empty(to) {
            if to.row() == last_row {
                for kind in PROMOTION_KINDS {
                    out.push(Action::promotion(*pawn, to, kind, None));
                }
            } else {
                out.push(Action::new(*pawn, to, ActionKind::Move));

                if pawn.square.row() == pawn_start_row(side) {
                    if let Some(two_step) = pawn_double_push_target(side, pawn.square) {
                        if board.is_empty(two_step) {
                            out.push(Action::new(*pawn, two_step, ActionKind::PawnDoubleMove));
                        }
                    }
                }
            }
        }
    }

    for to in pawn_capture_targets(side, pawn.square) {
        match board.occupant_at(to) {
            Some(victim) if victim.color != side => {
                if to.row() == last_row {
                    for kind in PROMOTION_KINDS {
                        out.push(Action::promotion(*pawn, to, kind, Some(victim)));
                    }
                } else {
                    out.push(Action::new(*pawn, to, ActionKind::Capture));
                }
            }
            Some(_) => {}
            None => {
                if en_passant_available(pawn, last_action, to.col()) {
                    out.push(Action::new(*pawn, to, ActionKind::EnPassant));
                }
            }
        }
    }
}

/// The previous ply must be an enemy pawn's double move that landed directly
/// beside this pawn on the capture file.
fn en_passant_available(pawn: &Piece, last_action: Option<&Action>, capture_col: u8) -> bool {
    let Some(last) = last_action else {
        return false;
    };

    last.kind == ActionKind::PawnDoubleMove
        && last.piece.kind == PieceKind::Pawn
        && last.piece.color != pawn.color
        && last.destination.row() == pawn.square.row()
        && last.destination.col() == capture_col
}
