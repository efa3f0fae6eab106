use crate::game_state::pawn_types::{Colour, Move, Square};

/// Single undo record for `apply_move` / `unapply_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub mover: Colour,
    /// Square the captured pawn stood on. Differs from `mv.to` for en passant.
    pub captured_square: Option<Square>,
    pub prev_side_to_move: Colour,
    pub recorded: bool,
}
