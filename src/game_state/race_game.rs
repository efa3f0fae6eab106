//! Contract between the decision core and the game that owns the board.
//!
//! Move generation, scoring and search only ever talk to the board through
//! this trait. `GameState` is the in-crate implementation; a host game loop
//! can supply its own.

use crate::game_state::pawn_types::{Colour, Move, SquareState};

pub trait RaceGame {
    /// Side length of the square board.
    fn dim(&self) -> i8;

    /// Bounds-checked lookup. Off-board coordinates yield `None`.
    fn get_square(&self, x: i8, y: i8) -> Option<SquareState>;

    /// Most recently applied move, if any. Drives en-passant eligibility.
    fn last_move(&self) -> Option<Move>;

    /// Mutates the board. `record_history` also appends to the game's
    /// persistent move log; search-internal applications pass `false`.
    fn apply_move(&mut self, mv: Move, record_history: bool);

    /// Reverts the most recent `apply_move`. Returns `None` only when nothing
    /// has been applied, which a correct caller never does.
    fn unapply_move(&mut self) -> Option<Move>;

    /// Whether the game has concluded. `verbose = false` must not produce any
    /// externally visible side effect.
    fn is_finished(&self, verbose: bool) -> bool;

    /// Winner of a finished game, `None` while undecided.
    fn game_result(&self) -> Option<Colour>;

    /// Occupant of an on-board square, `None` for empty or off-board squares.
    #[inline]
    fn occupant(&self, x: i8, y: i8) -> Option<Colour> {
        self.get_square(x, y).and_then(|sq| sq.occupant)
    }
}
