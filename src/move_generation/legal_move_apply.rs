//! State transition for a single action.
//!
//! `apply_action` never touches its input: it clones the game state, applies
//! the action's board mutation, awards material, advances the clocks, and
//! hands the successor back. The legality filter and the turn controller both
//! go through here, so a simulated ply and a played ply are the same code.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    home_row, KINGSIDE_KING_TARGET_COL, KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TARGET_COL, KING_HOME_COL,
    QUEENSIDE_KING_TARGET_COL, QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TARGET_COL,
};
use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::{Action, ActionKind};

pub fn apply_action(game_state: &GameState, action: &Action) -> ChessResult<GameState> {
    let moving_color = game_state.side_to_move;
    if action.side() != moving_color {
        return Err(ChessError::WrongSideToMove {
            expected: moving_color,
            found: action.side(),
        });
    }

    let from = action.source();
    let to = action.destination;
    let occupant = game_state
        .board
        .occupant_at(from)
        .ok_or(ChessError::NoPieceOnSquare(from))?;
    if occupant.kind != action.piece.kind || occupant.color != moving_color {
        return Err(ChessError::PieceMismatch(from));
    }

    let mut next = game_state.clone();
    let board = &mut next.board;

    let captured = match action.kind {
        ActionKind::Move | ActionKind::PawnDoubleMove => {
            require_empty(board, to)?;
            board.relocate(from, to);
            None
        }
        ActionKind::Capture => {
            let victim = take_enemy(board, to, moving_color)?;
            board.relocate(from, to);
            Some(victim)
        }
        ActionKind::PromoteKnight
        | ActionKind::PromoteBishop
        | ActionKind::PromoteRook
        | ActionKind::PromoteQueen => {
            let victim = if action.promotion_captures {
                Some(take_enemy(board, to, moving_color)?)
            } else {
                require_empty(board, to)?;
                None
            };
            promote(board, action)?;
            victim
        }
        ActionKind::EnPassant => {
            let victim_sq = game_state
                .previous_action
                .as_ref()
                .filter(|prev| prev.kind == ActionKind::PawnDoubleMove)
                .map(|prev| prev.destination)
                .ok_or(ChessError::MissingEnPassantTarget)?;
            require_empty(board, to)?;
            let victim = take_enemy(board, victim_sq, moving_color)?;
            board.relocate(from, to);
            Some(victim)
        }
        ActionKind::KingsideCastle => {
            castle(board, action, KINGSIDE_ROOK_COL, KINGSIDE_KING_TARGET_COL, KINGSIDE_ROOK_TARGET_COL)?;
            None
        }
        ActionKind::QueensideCastle => {
            castle(board, action, QUEENSIDE_ROOK_COL, QUEENSIDE_KING_TARGET_COL, QUEENSIDE_ROOK_TARGET_COL)?;
            None
        }
    };

    if let Some(victim) = captured {
        next.points[moving_color.index()] += victim.material_value();
    }

    if action.piece.kind == PieceKind::Pawn || captured.is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.previous_action = Some(action.clone());
    next.side_to_move = moving_color.opposite();

    Ok(next)
}

fn require_empty(board: &Board, square: Square) -> ChessResult<()> {
    if board.is_empty(square) {
        Ok(())
    } else {
        Err(ChessError::DestinationOccupied(square))
    }
}

fn take_enemy(board: &mut Board, square: Square, moving_color: Color) -> ChessResult<Piece> {
    match board.occupant_at(square) {
        None => Err(ChessError::CaptureOnEmptySquare(square)),
        Some(piece) if piece.color == moving_color => Err(ChessError::DestinationOccupied(square)),
        Some(_) => board.clear(square).ok_or(ChessError::CaptureOnEmptySquare(square)),
    }
}

fn promote(board: &mut Board, action: &Action) -> ChessResult<()> {
    let Some(kind) = action.kind.promotion_piece() else {
        return Err(ChessError::IllegalAction(action.to_string()));
    };
    board.clear(action.source());
    let mut promoted = Piece::new(kind, action.side(), action.destination);
    promoted.has_moved = true;
    board.place(promoted);
    Ok(())
}

/// The king must stand unmoved on its home square and the rook unmoved on its
/// corner, with every square between them empty.
fn castle(
    board: &mut Board,
    action: &Action,
    rook_col: u8,
    king_target_col: u8,
    rook_target_col: u8,
) -> ChessResult<()> {
    let color = action.side();
    let row = home_row(color);
    let king_from = Square::new(row, KING_HOME_COL);
    let rook_from = Square::new(row, rook_col);
    let king_to = Square::new(row, king_target_col);
    let rook_to = Square::new(row, rook_target_col);

    let king_ready = action.source() == king_from
        && board.occupant_at(king_from).is_some_and(|king| {
            king.kind == PieceKind::King && king.color == color && !king.has_moved
        });
    if !king_ready {
        return Err(ChessError::PieceMismatch(action.source()));
    }

    let rook_ready = board.occupant_at(rook_from).is_some_and(|rook| {
        rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved
    });
    if !rook_ready {
        return Err(ChessError::MissingCastlingRook(rook_from));
    }

    let (low, high) = if rook_col < KING_HOME_COL {
        (rook_col + 1, KING_HOME_COL)
    } else {
        (KING_HOME_COL + 1, rook_col)
    };
    for col in low..high {
        require_empty(board, Square::new(row, col))?;
    }

    board.relocate(king_from, king_to);
    board.relocate(rook_from, rook_to);
    Ok(())
}
