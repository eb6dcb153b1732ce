//! The action value type: one candidate or historical ply.
//!
//! An `Action` snapshots the acting piece (kind, side, origin square, moved
//! flag) together with its destination and kind. Notation is attached later by
//! the legal move generator and is mutable until the turn is finalized.

use std::fmt;

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Move,
    Capture,
    PawnDoubleMove,
    EnPassant,
    PromoteKnight,
    PromoteBishop,
    PromoteRook,
    PromoteQueen,
    KingsideCastle,
    QueensideCastle,
}

pub const PROMOTION_KINDS: [ActionKind; 4] = [
    ActionKind::PromoteKnight,
    ActionKind::PromoteBishop,
    ActionKind::PromoteRook,
    ActionKind::PromoteQueen,
];

impl ActionKind {
    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        match self {
            ActionKind::PromoteKnight => Some(PieceKind::Knight),
            ActionKind::PromoteBishop => Some(PieceKind::Bishop),
            ActionKind::PromoteRook => Some(PieceKind::Rook),
            ActionKind::PromoteQueen => Some(PieceKind::Queen),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion_piece().is_some()
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, ActionKind::KingsideCastle | ActionKind::QueensideCastle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The acting piece as it stood before the action.
    pub piece: Piece,
    pub destination: Square,
    pub kind: ActionKind,
    /// Material value of the piece a promoting pawn captures; 0 otherwise.
    pub capture_value: u32,
    /// Set only when a promotion also captures.
    pub promotion_captures: bool,
    pub notation: String,
}

impl Action {
    pub fn new(piece: Piece, destination: Square, kind: ActionKind) -> Self {
        Self {
            piece,
            destination,
            kind,
            capture_value: 0,
            promotion_captures: false,
            notation: String::new(),
        }
    }

    /// Promotion action; `captured` is the piece standing on the destination, if any.
    pub fn promotion(piece: Piece, destination: Square, kind: ActionKind, captured: Option<&Piece>) -> Self {
        debug_assert!(kind.is_promotion());
        let mut action = Self::new(piece, destination, kind);
        if let Some(captured) = captured {
            action.capture_value = captured.material_value();
            action.promotion_captures = true;
        }
        action
    }

    #[inline]
    pub fn source(&self) -> Square {
        self.piece.square
    }

    #[inline]
    pub fn side(&self) -> Color {
        self.piece.color
    }

    /// True for every action that removes an enemy piece.
    #[inline]
    pub fn is_capture(&self) -> bool {
        match self.kind {
            ActionKind::Capture | ActionKind::EnPassant => true,
            ActionKind::PromoteKnight
            | ActionKind::PromoteBishop
            | ActionKind::PromoteRook
            | ActionKind::PromoteQueen => self.promotion_captures,
            ActionKind::Move
            | ActionKind::PawnDoubleMove
            | ActionKind::KingsideCastle
            | ActionKind::QueensideCastle => false,
        }
    }

    /// Square of the piece an en passant capture removes: beside the
    /// capturing pawn, on the destination's file.
    #[inline]
    pub fn en_passant_victim_square(&self) -> Square {
        Square::new(self.piece.square.row(), self.destination.col())
    }

    /// Same origin, destination, and kind; notation is ignored.
    pub fn same_ply(&self, other: &Action) -> bool {
        self.piece.square == other.piece.square
            && self.piece.kind == other.piece.kind
            && self.piece.color == other.piece.color
            && self.destination == other.destination
            && self.kind == other.kind
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.notation.is_empty() {
            write!(f, "{:?}: {} -> {}", self.kind, self.piece.square, self.destination)
        } else {
            f.write_str(&self.notation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionKind};
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn promotion_capture_carries_victim_value() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Square::new(1, 1));
        let rook = Piece::new(PieceKind::Rook, Color::Black, Square::new(0, 0));
        let action = Action::promotion(pawn, rook.square, ActionKind::PromoteQueen, Some(&rook));

        assert_eq!(action.capture_value, 5);
        assert!(action.is_capture());
        assert_eq!(action.kind.promotion_piece(), Some(PieceKind::Queen));
    }

    #[test]
    fn en_passant_victim_differs_from_destination() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White, Square::new(3, 4));
        let action = Action::new(pawn, Square::new(2, 3), ActionKind::EnPassant);
        assert_eq!(action.en_passant_victim_square().to_string(), "d5");
        assert_eq!(action.destination.to_string(), "d6");
    }
}
