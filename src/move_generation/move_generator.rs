use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Action;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
    pub is_checkmate: bool,
}

/// A legal action together with the position it produces.
#[derive(Debug, Clone)]
pub struct GeneratedAction {
    pub action: Action,
    pub game_after_action: GameState,
    pub annotations: MoveAnnotations,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_actions(
        &self,
        game_state: &GameState,
        team: Color,
    ) -> ChessResult<Vec<GeneratedAction>>;
}
