//! FEN-to-GameState importer.
//!
//! Validates all six fields before building anything, so a failure never
//! yields a partial state. Castling availability is folded into the pieces'
//! moved flags, and an en passant target is turned back into the pawn double
//! move that produced it.

use crate::chess_errors::{ChessError, ChessResult, FenField};
use crate::game_state::chess_rules::{
    home_row, pawn_start_row, KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::{Action, ActionKind};
use crate::utils::algebraic::algebraic_to_square;

const VALID_PIECE_CHARS: &str = "kKQqRrBbNnPp";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CastlingAvailability {
    white_kingside: bool,
    white_queenside: bool,
    black_kingside: bool,
    black_queenside: bool,
}

impl CastlingAvailability {
    fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }
}

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() != 6 {
        return Err(ChessError::fen(
            FenField::FieldCount,
            format!("expected 6 space-separated fields, found {}", parts.len()),
        ));
    }

    let mut board = parse_piece_placement(parts[0])?;
    let side_to_move = parse_active_color(parts[1])?;
    let castling = parse_castling_availability(parts[2])?;
    let previous_action = parse_en_passant_target(parts[3], &board, side_to_move)?;
    let halfmove_clock = parts[4].parse::<u32>().map_err(|_| {
        ChessError::fen(
            FenField::HalfmoveClock,
            format!("'{}' is not a non-negative integer", parts[4]),
        )
    })?;
    let fullmove_number = match parts[5].parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            return Err(ChessError::fen(
                FenField::FullmoveNumber,
                format!("'{}' is not a positive integer", parts[5]),
            ))
        }
    };

    apply_moved_flags(&mut board, castling);

    let mut game_state = GameState::new_empty();
    game_state.board = board;
    game_state.side_to_move = side_to_move;
    game_state.previous_action = previous_action;
    game_state.halfmove_clock = halfmove_clock;
    game_state.fullmove_number = fullmove_number;
    game_state.refresh_status()?;

    Ok(game_state)
}

fn parse_piece_placement(placement: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessError::fen(
            FenField::PiecePlacement,
            format!("expected 8 ranks, found {}", ranks.len()),
        ));
    }

    let mut board = Board::new_empty();
    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0u32;
        for ch in rank.chars() {
            if let Some(gap) = ch.to_digit(10) {
                if !(1..=8).contains(&gap) {
                    return Err(ChessError::fen(
                        FenField::PiecePlacement,
                        format!("invalid gap value '{gap}' in rank '{rank}'"),
                    ));
                }
                col += gap;
            } else if VALID_PIECE_CHARS.contains(ch) {
                if col < 8 {
                    let Some((color, kind)) = piece_from_fen_char(ch) else {
                        return Err(ChessError::fen(
                            FenField::PiecePlacement,
                            format!("invalid character '{ch}' in rank '{rank}'"),
                        ));
                    };
                    board.place(Piece::new(kind, color, Square::new(row as u8, col as u8)));
                }
                col += 1;
            } else {
                return Err(ChessError::fen(
                    FenField::PiecePlacement,
                    format!("invalid character '{ch}' in rank '{rank}'"),
                ));
            }

            if col > 8 {
                return Err(ChessError::fen(
                    FenField::PiecePlacement,
                    format!("rank '{rank}' exceeds 8 squares"),
                ));
            }
        }

        if col != 8 {
            return Err(ChessError::fen(
                FenField::PiecePlacement,
                format!("rank '{rank}' does not sum to 8 squares"),
            ));
        }
    }

    Ok(board)
}

fn parse_active_color(field: &str) -> ChessResult<Color> {
    match field {
        "w" | "W" => Ok(Color::White),
        "b" | "B" => Ok(Color::Black),
        _ => Err(ChessError::fen(
            FenField::ActiveColor,
            format!("expected 'w' or 'b', got '{field}'"),
        )),
    }
}

fn parse_castling_availability(field: &str) -> ChessResult<CastlingAvailability> {
    let mut rights = CastlingAvailability::default();
    if field == "-" {
        return Ok(rights);
    }

    if field.is_empty() || field.len() > 4 {
        return Err(ChessError::fen(
            FenField::CastlingAvailability,
            format!("expected 1-4 characters from 'KQkq' or '-', got '{field}'"),
        ));
    }

    for ch in field.chars() {
        let slot = match ch {
            'K' => &mut rights.white_kingside,
            'Q' => &mut rights.white_queenside,
            'k' => &mut rights.black_kingside,
            'q' => &mut rights.black_queenside,
            _ => {
                return Err(ChessError::fen(
                    FenField::CastlingAvailability,
                    format!("invalid castling character '{ch}'"),
                ))
            }
        };
        if *slot {
            return Err(ChessError::fen(
                FenField::CastlingAvailability,
                format!("castling character '{ch}' repeated"),
            ));
        }
        *slot = true;
    }

    Ok(rights)
}

/// Rebuilds the double move implied by the target square: a rank-3 target
/// means a White pawn just went from rank 2 to rank 4, rank 6 the Black mirror.
/// Any rank-3 or rank-6 square is accepted. The double move is only rebuilt
/// when the side that made it is not the side to move and its pawn stands on
/// the landing square; otherwise the target is ignored.
fn parse_en_passant_target(
    field: &str,
    board: &Board,
    side_to_move: Color,
) -> ChessResult<Option<Action>> {
    if field == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(field)
        .map_err(|err| ChessError::fen(FenField::EnPassantTarget, err.to_string()))?;

    let mover = match target.rank_char() {
        '3' => Color::White,
        '6' => Color::Black,
        _ => {
            return Err(ChessError::fen(
                FenField::EnPassantTarget,
                format!("'{field}' is not on rank 3 or rank 6"),
            ))
        }
    };
    if mover == side_to_move {
        return Ok(None);
    }

    let origin = Square::new(pawn_start_row(mover), target.col());
    let landing = Square::new(
        (pawn_start_row(mover) as i8 + 2 * mover.forward()) as u8,
        target.col(),
    );

    let pawn_present = board
        .occupant_at(landing)
        .is_some_and(|piece| piece.kind == PieceKind::Pawn && piece.color == mover);
    if !pawn_present {
        return Ok(None);
    }

    let pawn = Piece::new(PieceKind::Pawn, mover, origin);
    let mut action = Action::new(pawn, landing, ActionKind::PawnDoubleMove);
    action.notation = landing.to_string();
    Ok(Some(action))
}

/// Kings and rooks count as unmoved only on their home squares with the
/// matching right; pawns only on their start row.
fn apply_moved_flags(board: &mut Board, castling: CastlingAvailability) {
    let pieces: Vec<Piece> = board.all_pieces().copied().collect();
    for mut piece in pieces {
        let row = home_row(piece.color);
        let square = piece.square;
        let at = |col: u8| square == Square::new(row, col);

        piece.has_moved = match piece.kind {
            PieceKind::Pawn => piece.square.row() != pawn_start_row(piece.color),
            PieceKind::King => {
                !(at(KING_HOME_COL)
                    && (castling.kingside(piece.color) || castling.queenside(piece.color)))
            }
            PieceKind::Rook => {
                !((at(KINGSIDE_ROOK_COL) && castling.kingside(piece.color))
                    || (at(QUEENSIDE_ROOK_COL) && castling.queenside(piece.color)))
            }
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => false,
        };
        board.place(piece);
    }
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    PieceKind::from_letter(ch).map(|kind| (color, kind))
}
