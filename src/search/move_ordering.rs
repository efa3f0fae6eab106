//! Move ordering heuristics for alpha-beta.
//!
//! Ordering only changes how early cutoffs happen, never the value a search
//! returns. All sorts are stable, so equal keys keep generation order and the
//! root tie-break stays deterministic.

use crate::game_state::pawn_types::{Colour, Move};
use crate::game_state::race_rules::distance_to_promotion;
use crate::search::board_scoring::{PAWN_VALUE, PROMOTION_BONUS};

/// Captures first, then moves landing closer to `mover`'s promotion rank.
pub fn order_moves(moves: &mut [Move], mover: Colour, dim: i8) {
    moves.sort_by_key(|mv| (!mv.is_capture, distance_to_promotion(mover, dim, mv.to.y)));
}

/// Whether `mv` lands on `mover`'s promotion rank.
#[inline]
pub fn is_promotion_for(mv: &Move, mover: Colour, dim: i8) -> bool {
    distance_to_promotion(mover, dim, mv.to.y) == 0
}

/// Captures and promotions, the only moves quiescence looks at.
#[inline]
pub fn is_tactical(mv: &Move, mover: Colour, dim: i8) -> bool {
    mv.is_capture || is_promotion_for(mv, mover, dim)
}

/// Coarse gain estimate used to order tactical moves.
#[inline]
pub fn tactical_value(mv: &Move, mover: Colour, dim: i8) -> i32 {
    if is_promotion_for(mv, mover, dim) {
        PROMOTION_BONUS
    } else if mv.is_capture {
        PAWN_VALUE
    } else {
        0
    }
}

/// Promotions before plain captures.
pub fn order_tactical_moves(moves: &mut [Move], mover: Colour, dim: i8) {
    moves.sort_by_key(|mv| -tactical_value(mv, mover, dim));
}
