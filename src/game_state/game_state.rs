//! Authoritative game state and the turn controller.
//!
//! `GameState` owns the board, the side to move, the finalized notation
//! history, material tallies, the current status, and the clocks. A turn is
//! processed by validating the action against the legal set, taking the
//! simulated successor (already classified for the new side to move), and only
//! then committing; a rejected turn leaves the state untouched.

use std::fmt;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Board, Color};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    has_legal_action, legal_actions, LegalMoveGenerator,
};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::Action;
use crate::utils::fen_parser::parse_fen;
use crate::utils::standard_algebraic::append_status_suffix;

/// Classification of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Ongoing,
    /// The named side is in check and has a legal reply.
    Check(Color),
    /// The named side is in check with no legal reply.
    Checkmate(Color),
    /// The side to move is not in check and has no legal action.
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check(color) => write!(f, "check({color})"),
            GameStatus::Checkmate(color) => write!(f, "checkmate({color})"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    #[default]
    AwaitingAction,
    Applying,
    Resolved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,

    /// Finalized notation of every ply played, check suffixes included.
    pub history: Vec<String>,
    /// The last ply applied (or rebuilt from a FEN en passant target).
    pub previous_action: Option<Action>,

    /// Material captured, indexed by `Color::index` of the capturing side.
    pub points: [u32; 2],

    pub status: GameStatus,
    pub phase: TurnPhase,

    // Tracked but never acted upon.
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new_empty(),
            side_to_move: Color::White,
            history: Vec::new(),
            previous_action: None,
            points: [0; 2],
            status: GameStatus::Ongoing,
            phase: TurnPhase::AwaitingAction,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    /// Empty board, White to move. Mostly useful for hand-built test positions.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    /// Legal actions for `team`, sorted and carrying disambiguated notation
    /// (without check suffix).
    #[inline]
    pub fn legal_actions(&self, team: Color) -> ChessResult<Vec<Action>> {
        legal_actions(self, team)
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_check(&self) -> bool {
        matches!(self.status, GameStatus::Check(_) | GameStatus::Checkmate(_))
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        matches!(self.status, GameStatus::Checkmate(_))
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.status == GameStatus::Stalemate
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_stalemate()
    }

    #[inline]
    pub fn points(&self, color: Color) -> u32 {
        self.points[color.index()]
    }

    /// Plays one turn. The action must match one of the current legal actions
    /// by piece, origin, destination, and kind; its notation is taken from the
    /// legal set, not from the caller. The phase reads `Applying` while the
    /// turn is resolved and falls back to `AwaitingAction` if it is rejected.
    pub fn process_turn(&mut self, action: &Action) -> ChessResult<GameStatus> {
        if self.phase == TurnPhase::Resolved {
            return Err(ChessError::GameAlreadyOver);
        }
        if action.side() != self.side_to_move {
            return Err(ChessError::WrongSideToMove {
                expected: self.side_to_move,
                found: action.side(),
            });
        }

        self.phase = TurnPhase::Applying;
        match self.resolve_turn(action) {
            Ok(next) => {
                *self = next;
                Ok(self.status)
            }
            Err(err) => {
                self.phase = TurnPhase::AwaitingAction;
                Err(err)
            }
        }
    }

    fn resolve_turn(&self, action: &Action) -> ChessResult<GameState> {
        let chosen = LegalMoveGenerator
            .generate_legal_actions(self, self.side_to_move)?
            .into_iter()
            .find(|candidate| candidate.action.same_ply(action))
            .ok_or_else(|| ChessError::IllegalAction(action.to_string()))?;

        // The successor already carries the status of the side that replies.
        let mut next = chosen.game_after_action;
        let notation = append_status_suffix(&chosen.action.notation, next.status);
        if let Some(previous) = next.previous_action.as_mut() {
            previous.notation = notation.clone();
        }
        next.history.push(notation);
        Ok(next)
    }

    /// Reclassifies the position for the side to move and settles the phase.
    pub fn refresh_status(&mut self) -> ChessResult<()> {
        let side = self.side_to_move;
        let in_check = is_king_in_check(&self.board, side);
        let has_action = has_legal_action(self, side)?;
        self.settle_status(in_check, has_action);
        Ok(())
    }

    pub(crate) fn settle_status(&mut self, in_check: bool, has_action: bool) {
        let side = self.side_to_move;
        self.status = match (in_check, has_action) {
            (true, true) => GameStatus::Check(side),
            (true, false) => GameStatus::Checkmate(side),
            (false, true) => GameStatus::Ongoing,
            (false, false) => GameStatus::Stalemate,
        };
        self.phase = if self.is_game_over() {
            TurnPhase::Resolved
        } else {
            TurnPhase::AwaitingAction
        };
    }
}

#[cfg(test)]
mod tests {
    use super::{GameState, GameStatus, TurnPhase};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::move_generation::legal_move_checks::checking_pieces;
    use crate::moves::move_descriptions::{Action, ActionKind};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    fn play(game: &mut GameState, notation: &str) -> GameStatus {
        let action = game
            .legal_actions(game.side_to_move)
            .expect("generation should succeed")
            .into_iter()
            .find(|a| a.notation == notation)
            .unwrap_or_else(|| panic!("{notation} should be legal"));
        game.process_turn(&action).expect("legal action should be accepted")
    }

    #[test]
    fn scholars_mate_ends_in_checkmate() {
        let mut game = GameState::new_game();
        for notation in ["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6"] {
            assert_eq!(play(&mut game, notation), GameStatus::Ongoing);
        }

        assert_eq!(play(&mut game, "Qxf7"), GameStatus::Checkmate(Color::Black));
        assert!(game.is_checkmate() && game.is_game_over());
        assert_eq!(game.phase, TurnPhase::Resolved);
        assert!(game.legal_actions(Color::Black).expect("generation").is_empty());
        assert_eq!(game.history.last().map(String::as_str), Some("Qxf7#"));
        assert_eq!(game.points(Color::White), 1);
        assert_eq!(checking_pieces(&game.board, Color::Black).len(), 1);

        let any_black = *game.board.occupant_at(sq("a7")).expect("black pawn on a7");
        let push = Action::new(any_black, sq("a6"), ActionKind::Move);
        assert_eq!(game.process_turn(&push), Err(ChessError::GameAlreadyOver));
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut game = GameState::from_fen("rnbqkbnr/pppppppp/8/4P3/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 2")
            .expect("FEN should parse");
        play(&mut game, "d5");

        let actions = game.legal_actions(Color::White).expect("generation should succeed");
        let ep = actions
            .iter()
            .find(|a| a.kind == ActionKind::EnPassant)
            .expect("exd6 should be available");
        assert_eq!(ep.destination, sq("d6"));
        assert_eq!(ep.notation, "exd6");

        let ep = ep.clone();
        game.process_turn(&ep).expect("en passant should be accepted");
        assert!(game.board.is_empty(sq("d5")));
        assert!(game.board.is_empty(sq("e5")));
        let pawn = game.board.occupant_at(sq("d6")).expect("white pawn on d6");
        assert_eq!((pawn.kind, pawn.color), (PieceKind::Pawn, Color::White));
        assert_eq!(game.points(Color::White), 1);
    }

    #[test]
    fn blocked_kingside_castle_is_not_offered() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4KB1R w K - 0 1").expect("FEN should parse");
        let actions = game.legal_actions(Color::White).expect("generation should succeed");
        assert!(actions.iter().all(|a| a.kind != ActionKind::KingsideCastle));
    }

    #[test]
    fn castling_relocates_both_pieces() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        play(&mut game, "O-O");

        assert!(game.board.is_empty(sq("e1")));
        assert!(game.board.is_empty(sq("h1")));
        assert_eq!(game.board.occupant_at(sq("g1")).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(game.board.occupant_at(sq("f1")).map(|p| p.kind), Some(PieceKind::Rook));
        assert_eq!(game.history, vec!["O-O".to_owned()]);
    }

    #[test]
    fn stalemate_is_not_checkmate() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(game.status(), GameStatus::Stalemate);
        assert!(game.is_stalemate());
        assert!(!game.is_checkmate());

        let pawn_game = GameState::from_fen("k7/P7/1K6/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(pawn_game.status(), GameStatus::Stalemate);
    }

    #[test]
    fn check_suffix_is_recorded() {
        let mut game = GameState::new_game();
        for notation in ["e4", "d5"] {
            play(&mut game, notation);
        }
        assert_eq!(play(&mut game, "Bb5"), GameStatus::Check(Color::Black));
        assert_eq!(game.history.last().map(String::as_str), Some("Bb5+"));
        assert!(game.is_check() && !game.is_game_over());
    }

    #[test]
    fn out_of_turn_action_is_rejected_without_change() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let black_pawn = *game.board.occupant_at(sq("e7")).expect("black pawn on e7");
        let action = Action::new(black_pawn, sq("e5"), ActionKind::PawnDoubleMove);

        assert_eq!(
            game.process_turn(&action),
            Err(ChessError::WrongSideToMove {
                expected: Color::White,
                found: Color::Black
            })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn illegal_geometry_is_rejected() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let rook = *game.board.occupant_at(sq("a1")).expect("rook on a1");
        let action = Action::new(rook, sq("a5"), ActionKind::Move);
        assert!(matches!(game.process_turn(&action), Err(ChessError::IllegalAction(_))));
        assert_eq!(game.phase, TurnPhase::AwaitingAction);
        assert_eq!(game, before);
    }

    #[test]
    fn committed_turn_leaves_the_applying_phase() {
        let mut game = GameState::new_game();
        play(&mut game, "e4");
        assert_eq!(game.phase, TurnPhase::AwaitingAction);
        assert_eq!(
            game.previous_action.as_ref().map(|a| a.notation.as_str()),
            Some("e4")
        );
    }

    #[test]
    fn clocks_follow_pawn_moves_and_captures() {
        let mut game = GameState::new_game();
        play(&mut game, "Nf3");
        assert_eq!((game.halfmove_clock, game.fullmove_number), (1, 1));
        play(&mut game, "Nc6");
        assert_eq!((game.halfmove_clock, game.fullmove_number), (2, 2));
        play(&mut game, "e4");
        assert_eq!((game.halfmove_clock, game.fullmove_number), (0, 2));
    }

    #[test]
    fn piece_capture_resets_the_halfmove_clock() {
        let mut game = GameState::from_fen("4k3/8/3q4/8/4N3/8/8/4K3 w - - 5 10")
            .expect("FEN should parse");
        assert_eq!(play(&mut game, "Nxd6"), GameStatus::Check(Color::Black));
        assert_eq!((game.halfmove_clock, game.fullmove_number), (0, 10));

        play(&mut game, "Kd7");
        assert_eq!((game.halfmove_clock, game.fullmove_number), (1, 11));
    }

    #[test]
    fn ambiguous_knights_are_disambiguated() {
        let game = GameState::from_fen("4k3/8/8/8/8/5N2/8/1N2K3 w - - 0 1").expect("FEN should parse");
        let notations: Vec<String> = game
            .legal_actions(Color::White)
            .expect("generation should succeed")
            .into_iter()
            .map(|a| a.notation)
            .collect();
        assert!(notations.contains(&"Nbd2".to_owned()));
        assert!(notations.contains(&"Nfd2".to_owned()));
        assert!(notations.contains(&"Ng5".to_owned()));
    }
}
