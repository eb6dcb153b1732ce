//! Standard algebraic notation rendering.
//!
//! Renders an action without disambiguation or check suffix; those are added
//! by [`crate::utils::disambiguation`] and [`append_status_suffix`].

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameStatus;
use crate::moves::move_descriptions::{Action, ActionKind};

pub fn render_action(action: &Action) -> String {
    let piece = &action.piece;
    let to = action.destination;
    let letter = match piece.kind {
        PieceKind::Pawn => String::new(),
        kind => kind.letter().to_string(),
    };

    match action.kind {
        ActionKind::Move | ActionKind::PawnDoubleMove => format!("{letter}{to}"),
        ActionKind::Capture | ActionKind::EnPassant => {
            if piece.kind == PieceKind::Pawn {
                format!("{}x{to}", piece.square.file_char())
            } else {
                format!("{letter}x{to}")
            }
        }
        ActionKind::PromoteKnight => render_promotion(action, PieceKind::Knight),
        ActionKind::PromoteBishop => render_promotion(action, PieceKind::Bishop),
        ActionKind::PromoteRook => render_promotion(action, PieceKind::Rook),
        ActionKind::PromoteQueen => render_promotion(action, PieceKind::Queen),
        ActionKind::KingsideCastle => "O-O".to_owned(),
        ActionKind::QueensideCastle => "O-O-O".to_owned(),
    }
}

fn render_promotion(action: &Action, promoted: PieceKind) -> String {
    let to = action.destination;
    if action.promotion_captures {
        format!("{}x{to}={}", action.piece.square.file_char(), promoted.letter())
    } else {
        format!("{to}={}", promoted.letter())
    }
}

/// `#` when the side now to move is mated, `+` when it is merely in check.
pub fn append_status_suffix(notation: &str, status: GameStatus) -> String {
    match status {
        GameStatus::Checkmate(_) => format!("{notation}#"),
        GameStatus::Check(_) => format!("{notation}+"),
        GameStatus::Ongoing | GameStatus::Stalemate => notation.to_owned(),
    }
}
