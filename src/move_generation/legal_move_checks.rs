//! Attack and check queries.
//!
//! A square counts as attacked when some pseudo-legal action of the attacker
//! (castling excluded) captures on it. Empty squares are probed by standing a
//! throwaway defender on them first, so pawn diagonals count and pawn pushes
//! do not.

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
use crate::move_generation::legal_move_shared::pseudo_legal_actions;
use crate::moves::move_descriptions::Action;

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    !capturing_actions_on(board, square, attacker_color).is_empty()
}

/// `false` when `color` has no king, which only happens on test boards.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Distinct enemy pieces currently giving check to `color`'s king.
pub fn checking_pieces(board: &Board, color: Color) -> Vec<Piece> {
    let Some(king_sq) = board.king_square(color) else {
        return Vec::new();
    };

    let mut checkers = Vec::<Piece>::new();
    for action in capturing_actions_on(board, king_sq, color.opposite()) {
        if !checkers.iter().any(|p| p.square == action.piece.square) {
            checkers.push(action.piece);
        }
    }
    checkers
}

fn capturing_actions_on(board: &Board, square: Square, attacker_color: Color) -> Vec<Action> {
    let probe;
    let board = if board.is_empty(square) {
        let mut with_defender = board.clone();
        let mut defender = Piece::new(PieceKind::Pawn, attacker_color.opposite(), square);
        defender.has_moved = true;
        with_defender.place(defender);
        probe = with_defender;
        &probe
    } else {
        board
    };

    pseudo_legal_actions(board, attacker_color, None, false)
        .into_iter()
        .filter(|action| action.destination == square && action.is_capture())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{checking_pieces, is_king_in_check, is_square_attacked};
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    fn put(board: &mut Board, kind: PieceKind, color: Color, text: &str) {
        board.place(Piece::new(kind, color, sq(text)));
    }

    #[test]
    fn pawn_attacks_diagonal_but_not_push_square() {
        let mut board = Board::new_empty();
        put(&mut board, PieceKind::Pawn, Color::White, "e4");

        assert!(is_square_attacked(&board, sq("d5"), Color::White));
        assert!(is_square_attacked(&board, sq("f5"), Color::White));
        assert!(!is_square_attacked(&board, sq("e5"), Color::White));
    }

    #[test]
    fn blocked_slider_does_not_give_check() {
        let mut board = Board::new_empty();
        put(&mut board, PieceKind::King, Color::White, "e1");
        put(&mut board, PieceKind::Rook, Color::Black, "e8");
        assert!(is_king_in_check(&board, Color::White));

        put(&mut board, PieceKind::Knight, Color::White, "e4");
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn pawn_about_to_promote_checks_the_back_row_king() {
        let mut board = Board::new_empty();
        put(&mut board, PieceKind::King, Color::Black, "h8");
        put(&mut board, PieceKind::Pawn, Color::White, "g7");
        assert!(is_king_in_check(&board, Color::Black));
    }

    #[test]
    fn double_check_reports_both_attackers() {
        let mut board = Board::new_empty();
        put(&mut board, PieceKind::King, Color::Black, "e8");
        put(&mut board, PieceKind::Rook, Color::White, "e1");
        put(&mut board, PieceKind::Knight, Color::White, "d6");

        let checkers = checking_pieces(&board, Color::Black);
        assert_eq!(checkers.len(), 2);
        assert!(checkers.iter().any(|p| p.kind == PieceKind::Knight));
        assert!(checkers.iter().any(|p| p.kind == PieceKind::Rook));
    }

    #[test]
    fn board_without_king_is_never_in_check() {
        let mut board = Board::new_empty();
        put(&mut board, PieceKind::Queen, Color::Black, "d8");
        assert!(!is_king_in_check(&board, Color::White));
        assert!(checking_pieces(&board, Color::White).is_empty());
    }
}
