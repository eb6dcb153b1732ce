use crate::game_state::chess_types::{Board, Square};
use crate::moves::bishop_moves::bishop_targets;
use crate::moves::rook_moves::rook_targets;

#[inline]
pub fn queen_targets(board: &Board, from: Square) -> Vec<Square> {
    let mut out = rook_targets(board, from);
    out.extend(bishop_targets(board, from));
    out
}

#[cfg(test)]
mod tests {
    use super::queen_targets;
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};

    #[test]
    fn queen_on_d4_sees_twenty_seven_squares() {
        let board = Board::new_empty();
        assert_eq!(queen_targets(&board, Square::new(4, 3)).len(), 27);
    }

    #[test]
    fn queen_targets_stop_at_blockers() {
        let mut board = Board::new_empty();
        let d4 = Square::new(4, 3);
        let d6 = Square::new(2, 3);
        let g4 = Square::new(4, 6);
        board.place(Piece::new(PieceKind::Pawn, Color::Black, d6));
        board.place(Piece::new(PieceKind::Pawn, Color::White, g4));

        let targets = queen_targets(&board, d4);
        assert!(targets.contains(&d6));
        assert!(targets.contains(&g4));
        assert!(!targets.contains(&Square::new(1, 3)));
        assert!(!targets.contains(&Square::new(4, 7)));
    }
}
