//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by FEN import, square
//! parsing, action application, and the turn controller. Every variant is an
//! expected, caller-recoverable failure: bad input text or an action that
//! violates a precondition. Broken internal invariants are not represented
//! here; exhaustive matches make them unreachable instead.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Square};

pub type ChessResult<T> = Result<T, ChessError>;

/// The six space-separated FEN fields, plus the field count itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenField {
    FieldCount,
    PiecePlacement,
    ActiveColor,
    CastlingAvailability,
    EnPassantTarget,
    HalfmoveClock,
    FullmoveNumber,
}

impl fmt::Display for FenField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FenField::FieldCount => "field count",
            FenField::PiecePlacement => "piece placement",
            FenField::ActiveColor => "active colour",
            FenField::CastlingAvailability => "castling availability",
            FenField::EnPassantTarget => "en passant target",
            FenField::HalfmoveClock => "half-move clock",
            FenField::FullmoveNumber => "full-move number",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A FEN field failed validation.
    InvalidFen { field: FenField, reason: String },

    /// Square text was not a file `a..=h` followed by a rank `1..=8`.
    InvalidAlgebraic(String),

    /// The acting piece does not belong to the side to move.
    WrongSideToMove { expected: Color, found: Color },

    /// The action names a source square that holds nothing.
    NoPieceOnSquare(Square),

    /// The board occupant of the source square differs from the action's piece.
    PieceMismatch(Square),

    /// A capturing action targets an empty square.
    CaptureOnEmptySquare(Square),

    /// A non-capturing action targets an occupied square.
    DestinationOccupied(Square),

    /// En passant was requested but no pawn double move preceded it.
    MissingEnPassantTarget,

    /// Castling was requested but the rook is not on its home square.
    MissingCastlingRook(Square),

    /// The action is not among the legal actions of the current position.
    IllegalAction(String),

    /// The game already ended in checkmate or stalemate.
    GameAlreadyOver,

    /// Internal failure unrelated to the caller's input, such as a crashed
    /// perft worker.
    InvalidState(String),
}

impl ChessError {
    pub(crate) fn fen(field: FenField, reason: impl Into<String>) -> Self {
        ChessError::InvalidFen {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidFen { field, reason } => {
                write!(f, "invalid FEN {field}: {reason}")
            }
            ChessError::InvalidAlgebraic(text) => write!(f, "invalid algebraic square: {text}"),
            ChessError::WrongSideToMove { expected, found } => {
                write!(f, "it is {expected}'s turn, but a {found} piece was moved")
            }
            ChessError::NoPieceOnSquare(sq) => write!(f, "no piece on {sq}"),
            ChessError::PieceMismatch(sq) => {
                write!(f, "piece on {sq} does not match the action's piece")
            }
            ChessError::CaptureOnEmptySquare(sq) => write!(f, "cannot capture on empty square {sq}"),
            ChessError::DestinationOccupied(sq) => write!(f, "cannot move onto occupied square {sq}"),
            ChessError::MissingEnPassantTarget => {
                write!(f, "en passant requires a preceding pawn double move")
            }
            ChessError::MissingCastlingRook(sq) => write!(f, "no unmoved rook on {sq} to castle with"),
            ChessError::IllegalAction(text) => write!(f, "illegal action: {text}"),
            ChessError::GameAlreadyOver => write!(f, "the game is already over"),
            ChessError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
        }
    }
}

impl Error for ChessError {}

#[cfg(test)]
mod tests {
    use super::{ChessError, FenField};

    #[test]
    fn fen_error_names_the_field() {
        let err = ChessError::fen(FenField::ActiveColor, "expected 'w' or 'b', got 'x'");
        assert_eq!(
            err.to_string(),
            "invalid FEN active colour: expected 'w' or 'b', got 'x'"
        );
    }
}
