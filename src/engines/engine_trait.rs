//! Engine abstraction layer used by the binary and the benches.
//!
//! Defines common input parameters and output payloads so different move
//! selection strategies can be picked at runtime behind a single trait.

use crate::errors::RaceError;
use crate::game_state::game_state::GameState;
use crate::game_state::pawn_types::{Colour, Move};

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured search depth for this call.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub best_score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks a move for `side`, leaving `game` as it was found.
    ///
    /// `best_move` is `None` when `side` has no moves, which loses the game.
    fn choose_move(
        &mut self,
        game: &mut GameState,
        side: Colour,
        params: &GoParams,
    ) -> Result<EngineOutput, RaceError>;
}

/// Engines only move for the side whose turn it is.
pub(crate) fn ensure_side_to_move(game: &GameState, side: Colour) -> Result<(), RaceError> {
    if game.side_to_move() == side {
        Ok(())
    } else {
        Err(RaceError::NotSideToMove {
            requested: side,
            to_move: game.side_to_move(),
        })
    }
}
