//! Pawn-race rule constants and per-colour geometry.

use crate::game_state::pawn_types::Colour;

/// Board size of the classic pawn race.
pub const DEFAULT_DIMENSION: i8 = 8;
/// Smallest board with distinct start and promotion ranks for both sides.
pub const MIN_DIMENSION: i8 = 3;
/// Largest board still addressable with single-letter files.
pub const MAX_DIMENSION: i8 = 26;

/// Rank delta of a single forward step.
#[inline]
pub const fn forward_direction(colour: Colour) -> i8 {
    match colour {
        Colour::White => 1,
        Colour::Black => -1,
    }
}

#[inline]
pub const fn start_rank(colour: Colour, dim: i8) -> i8 {
    match colour {
        Colour::White => 1,
        Colour::Black => dim - 2,
    }
}

#[inline]
pub const fn promotion_rank(colour: Colour, dim: i8) -> i8 {
    match colour {
        Colour::White => dim - 1,
        Colour::Black => 0,
    }
}

#[inline]
pub fn distance_to_promotion(colour: Colour, dim: i8, rank: i8) -> i8 {
    (rank - promotion_rank(colour, dim)).abs()
}
