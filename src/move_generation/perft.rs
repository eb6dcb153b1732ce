//! Perft: exhaustive legal-action tree counts for validating generation.

use std::sync::Arc;
use std::thread;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{GeneratedAction, MoveGenerator};
use crate::moves::move_descriptions::ActionKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn tally(&mut self, generated: &GeneratedAction) {
        let action = &generated.action;
        self.nodes += 1;
        if action.is_capture() {
            self.captures += 1;
        }
        if action.kind == ActionKind::EnPassant {
            self.en_passant += 1;
        }
        if action.kind.is_castle() {
            self.castles += 1;
        }
        if action.kind.is_promotion() {
            self.promotions += 1;
        }
        if generated.annotations.gives_check {
            self.checks += 1;
        }
        if generated.annotations.is_checkmate {
            self.checkmates += 1;
        }
    }
}

/// Counts leaf nodes `depth` plies below `game_state`. Check and mate tallies
/// are only populated by a generator that annotates.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_actions = generator.generate_legal_actions(game_state, game_state.side_to_move)?;
    let mut total = PerftCounts::default();
    for generated in root_actions {
        perft_recurse(generator, &generated, depth, 1, &mut total)?;
    }
    Ok(total)
}

/// Same counts as [`perft`], with one worker thread per root action. Each
/// worker owns its subtree's states outright.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_actions = generator.generate_legal_actions(game_state, game_state.side_to_move)?;
    let mut handles = Vec::with_capacity(root_actions.len());

    for generated in root_actions {
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &generated, depth, 1, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| ChessError::InvalidState("perft worker thread panicked".to_owned()))?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    generated: &GeneratedAction,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    if current_depth == search_depth {
        counts.tally(generated);
        return Ok(());
    }

    let next = &generated.game_after_action;
    for child in generator.generate_legal_actions(next, next.side_to_move)? {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }
    Ok(())
}
