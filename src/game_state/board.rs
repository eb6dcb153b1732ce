//! Mailbox board: an 8x8 grid of optional pieces.
//!
//! Pieces are plain values, so cloning the board yields a fully independent
//! copy. The legality simulation relies on that to mutate a throwaway board
//! without ever aliasing the authoritative one.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn occupant_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.row() as usize][square.col() as usize].as_ref()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant_at(square).is_none()
    }

    #[inline]
    pub fn is_enemy(&self, square: Square, color: Color) -> bool {
        self.occupant_at(square).is_some_and(|piece| piece.color != color)
    }

    /// Writes the piece at its own recorded square, replacing any occupant.
    #[inline]
    pub fn place(&mut self, piece: Piece) {
        self.squares[piece.square.row() as usize][piece.square.col() as usize] = Some(piece);
    }

    /// Empties the square and hands back whatever stood there.
    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// Lifts the piece off `from` and drops it on `to`, marking it as moved.
    /// Whatever stood on `to` is overwritten.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self.clear(from)?;
        piece.square = to;
        piece.has_moved = true;
        self.place(piece);
        Some(piece)
    }

    /// All pieces of one side, rank 8 first.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.squares
            .iter()
            .flatten()
            .flatten()
            .filter(move |piece| piece.color == color)
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten().flatten()
    }

    /// First king of `color` on the board. Test boards may have none.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|piece| piece.square)
    }
}
