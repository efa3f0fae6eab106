//! Errors used throughout the pawn-race engine.
//!
//! The search core never fails: "no move" is an `Option::None` and off-board
//! lookups resolve to absent squares. `RaceError` covers the fallible edges
//! around it, such as building boards, parsing text and accepting moves from
//! outside the engine.

use thiserror::Error;

use crate::game_state::pawn_types::{Colour, Move};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RaceError {
    /// Board dimension outside the supported range.
    #[error("board dimension {0} is outside {min}..={max}", min = crate::game_state::race_rules::MIN_DIMENSION, max = crate::game_state::race_rules::MAX_DIMENSION)]
    InvalidDimension(i8),

    /// A gap file in a race opening does not exist on the board.
    #[error("gap file {file} does not exist on a {dim}x{dim} board")]
    InvalidGapFile { file: i8, dim: i8 },

    /// Position diagram text could not be interpreted.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// A square or move name could not be parsed.
    #[error("invalid algebraic text '{0}'")]
    InvalidAlgebraic(String),

    /// The move is not among the generated moves for the side to move.
    #[error("illegal move {0}")]
    IllegalMove(Move),

    /// An engine was asked to move for the side that is not on turn.
    #[error("{requested} asked to move but {to_move} is on turn")]
    NotSideToMove { requested: Colour, to_move: Colour },
}
