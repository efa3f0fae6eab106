//! Random-move engine.
//!
//! Selects uniformly among the generated moves. Kept as a non-search fallback
//! and as a sparring partner for diagnostics; it never looks ahead.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{ensure_side_to_move, Engine, EngineOutput, GoParams};
use crate::errors::RaceError;
use crate::game_state::game_state::GameState;
use crate::game_state::pawn_types::{Colour, Move};
use crate::game_state::race_game::RaceGame;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;

/// Uniformly random move for `side`, `None` when it has no moves.
pub fn random_move<G: RaceGame + ?Sized, R: Rng + ?Sized>(game: &G, side: Colour, rng: &mut R) -> Option<Move> {
    generate_pawn_moves(game, side).as_slice().choose(rng).copied()
}

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    /// Engine seeded from the thread-local generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible engine for tests and benches.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PawnRace Random"
    }

    fn choose_move(
        &mut self,
        game: &mut GameState,
        side: Colour,
        params: &GoParams,
    ) -> Result<EngineOutput, RaceError> {
        ensure_side_to_move(game, side)?;

        let mut out = EngineOutput::default();
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine ignores requested_depth {depth}"));
        }

        out.best_move = random_move(&*game, side, &mut self.rng);
        out.info_lines.push(format!(
            "info string random_engine picked {}",
            out.best_move.map_or_else(|| "none".to_owned(), |mv| mv.to_string())
        ));
        Ok(out)
    }
}
