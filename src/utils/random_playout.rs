//! Uniform random playout.
//!
//! Drives the turn controller with uniformly chosen legal actions until the
//! game resolves or the ply cap is reached. Used for soak testing the rules
//! and as a quick way to reach irregular positions.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;

/// Plays up to `max_plies` random legal actions from `game_state` and returns
/// the final position. Stops early on checkmate or stalemate.
pub fn play_random_game<R: Rng + ?Sized>(
    game_state: &GameState,
    rng: &mut R,
    max_plies: usize,
) -> ChessResult<GameState> {
    let mut game = game_state.clone();

    for _ in 0..max_plies {
        if game.is_game_over() {
            break;
        }
        let actions = game.legal_actions(game.side_to_move)?;
        let Some(picked) = actions.as_slice().choose(rng) else {
            break;
        };
        game.process_turn(picked)?;
    }

    Ok(game)
}
