//! Full legal action pipeline.
//!
//! Generates every pseudo-legal action for a side, plays each one on a cloned
//! game state, and keeps only those that leave the mover's king unattacked.
//! Pins, discovered checks, en passant exposure, and castling all fall out of
//! that one simulation without dedicated detection code.
//!
//! Every survivor's successor state is classified for the side that replies
//! (check, checkmate, stalemate) before it is handed out. Survivors are sorted
//! by destination square, then source square. The annotated generator then
//! renders notation, resolves ambiguous notation, and flags checks and mates;
//! the fast generator skips the notation work.

use std::borrow::Cow;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_action;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::pseudo_legal_actions;
use crate::move_generation::move_generator::{GeneratedAction, MoveAnnotations, MoveGenerator};
use crate::moves::move_descriptions::Action;
use crate::utils::disambiguation::resolve_ambiguity;
use crate::utils::standard_algebraic::render_action;

pub struct LegalMoveGenerator;
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_actions(
        &self,
        game_state: &GameState,
        team: Color,
    ) -> ChessResult<Vec<GeneratedAction>> {
        generate_legal_actions_internal(game_state, team, true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_actions(
        &self,
        game_state: &GameState,
        team: Color,
    ) -> ChessResult<Vec<GeneratedAction>> {
        generate_legal_actions_internal(game_state, team, false)
    }
}

/// Legal actions for `team`, sorted, rendered, and disambiguated.
pub fn legal_actions(game_state: &GameState, team: Color) -> ChessResult<Vec<Action>> {
    Ok(LegalMoveGenerator
        .generate_legal_actions(game_state, team)?
        .into_iter()
        .map(|generated| generated.action)
        .collect())
}

/// True as soon as `team` has one action that keeps its king safe. Builds no
/// successor statuses, so status classification can call it without recursing.
pub fn has_legal_action(game_state: &GameState, team: Color) -> ChessResult<bool> {
    let base = rebased(game_state, team);
    for action in pseudo_legal_actions(&base.board, team, base.previous_action.as_ref(), true) {
        let next = apply_action(&base, &action)?;
        if !is_king_in_check(&next.board, team) {
            return Ok(true);
        }
    }
    Ok(false)
}

fn rebased(game_state: &GameState, team: Color) -> Cow<'_, GameState> {
    if game_state.side_to_move == team {
        Cow::Borrowed(game_state)
    } else {
        let mut flipped = game_state.clone();
        flipped.side_to_move = team;
        Cow::Owned(flipped)
    }
}

fn generate_legal_actions_internal(
    game_state: &GameState,
    team: Color,
    annotate: bool,
) -> ChessResult<Vec<GeneratedAction>> {
    let base = rebased(game_state, team);
    let defender = team.opposite();

    let pseudo = pseudo_legal_actions(&base.board, team, base.previous_action.as_ref(), true);

    let mut legal = Vec::<GeneratedAction>::with_capacity(pseudo.len());
    for action in pseudo {
        let mut next = apply_action(&base, &action)?;

        // Illegal if own king is in check after the action.
        if is_king_in_check(&next.board, team) {
            continue;
        }

        let gives_check = is_king_in_check(&next.board, defender);
        let has_reply = has_legal_action(&next, defender)?;
        next.settle_status(gives_check, has_reply);

        let annotations = if annotate {
            MoveAnnotations {
                gives_check,
                is_checkmate: gives_check && !has_reply,
            }
        } else {
            MoveAnnotations::default()
        };

        legal.push(GeneratedAction {
            action,
            game_after_action: next,
            annotations,
        });
    }

    legal.sort_by_key(|generated| (generated.action.destination, generated.action.source()));

    if annotate {
        for generated in legal.iter_mut() {
            generated.action.notation = render_action(&generated.action);
        }
        resolve_ambiguity(legal.iter_mut().map(|generated| &mut generated.action));
    }

    Ok(legal)
}
