//! Value types shared by every layer of the rules engine.
//!
//! Squares are addressed by `(row, col)` with row 0 being rank 8 and column 0
//! being file a, so the grid reads top-down the way a diagram is printed.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move / owning side of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value used for the capture tally. The king is never scored.
    #[inline]
    pub const fn material_value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Upper-case notation letter (`P` for pawns even though notation omits it).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Board coordinate. Ordering is row-major (rank 8 first), then file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Both components must be in `0..8`; anything else is a caller bug.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Self { row, col }
    }

    /// Bounds-checked construction from signed components, used by offset walks.
    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Self> {
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.col)
    }

    #[inline]
    pub fn rank_char(self) -> char {
        char::from(b'8' - self.row)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

/// A piece instance as stored on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn material_value(&self) -> u32 {
        self.kind.material_value()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at {}", self.color, self.kind, self.square)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, PieceKind, Square};

    #[test]
    fn square_zero_zero_is_a8() {
        let sq = Square::new(0, 0);
        assert_eq!(sq.to_string(), "a8");
        assert_eq!(Square::new(7, 7).to_string(), "h1");
    }

    #[test]
    fn offsets_respect_board_edges() {
        let h1 = Square::new(7, 7);
        assert_eq!(h1.offset(1, 0), None);
        assert_eq!(h1.offset(-1, -1), Some(Square::new(6, 6)));
    }

    #[test]
    fn king_carries_no_material_value() {
        assert_eq!(PieceKind::King.material_value(), 0);
        assert_eq!(PieceKind::Queen.material_value(), 9);
        assert_eq!(Color::White.opposite(), Color::Black);
    }
}
