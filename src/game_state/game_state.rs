//! Reference board and game record.
//!
//! `GameState` stores one occupancy cell per square, the side to move, an
//! undo stack covering every applied move and the recorded move log. It is
//! the crate's implementation of the `RaceGame` contract, used by the binary,
//! the engines and the tests.

use log::info;

use crate::errors::RaceError;
use crate::game_state::pawn_types::{Colour, Move, Square, SquareState};
use crate::game_state::race_game::RaceGame;
use crate::game_state::race_rules::{
    promotion_rank, start_rank, MAX_DIMENSION, MIN_DIMENSION,
};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::utils::position_parser::parse_position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    dim: i8,
    // Row-major, index = y * dim + x.
    cells: Vec<Option<Colour>>,
    side_to_move: Colour,
    undo_stack: Vec<UndoState>,
    history: Vec<Move>,
}

impl GameState {
    /// Empty board with White to move.
    pub fn new_empty(dim: i8) -> Result<Self, RaceError> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dim) {
            return Err(RaceError::InvalidDimension(dim));
        }
        let side = usize::try_from(dim).map_err(|_| RaceError::InvalidDimension(dim))?;
        Ok(Self {
            dim,
            cells: vec![None; side * side],
            side_to_move: Colour::White,
            undo_stack: Vec::new(),
            history: Vec::new(),
        })
    }

    /// Classic race opening: each side fills its start rank except one gap file.
    pub fn new_race(dim: i8, white_gap: i8, black_gap: i8) -> Result<Self, RaceError> {
        let mut game = Self::new_empty(dim)?;
        for (colour, gap) in [(Colour::White, white_gap), (Colour::Black, black_gap)] {
            if !(0..dim).contains(&gap) {
                return Err(RaceError::InvalidGapFile { file: gap, dim });
            }
            let rank = start_rank(colour, dim);
            for x in (0..dim).filter(|x| *x != gap) {
                game.place(Square::new(x, rank), Some(colour))?;
            }
        }
        Ok(game)
    }

    /// Builds a position from a text diagram, see `utils::position_parser`.
    #[inline]
    pub fn from_diagram(diagram: &str) -> Result<Self, RaceError> {
        parse_position(diagram)
    }

    /// Sets one square directly. Intended for position setup, not for play.
    pub fn place(&mut self, square: Square, occupant: Option<Colour>) -> Result<(), RaceError> {
        let idx = self.index(square.x, square.y).ok_or_else(|| {
            RaceError::InvalidPosition(format!(
                "square ({}, {}) is off a {}x{} board",
                square.x, square.y, self.dim, self.dim
            ))
        })?;
        self.cells[idx] = occupant;
        Ok(())
    }

    #[inline]
    pub fn side_to_move(&self) -> Colour {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, colour: Colour) {
        self.side_to_move = colour;
    }

    /// Moves applied with `record_history = true`, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of applied, not yet reverted moves.
    #[inline]
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }

    /// Applies and records `mv` only if the side to move could generate it.
    pub fn apply_checked(&mut self, mv: Move) -> Result<(), RaceError> {
        let legal = generate_pawn_moves(self, self.side_to_move);
        if !legal.contains(&mv) {
            return Err(RaceError::IllegalMove(mv));
        }
        self.apply_move(mv, true);
        Ok(())
    }

    #[inline]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if !(0..self.dim).contains(&x) || !(0..self.dim).contains(&y) {
            return None;
        }
        usize::try_from(i32::from(y) * i32::from(self.dim) + i32::from(x)).ok()
    }

    fn set(&mut self, square: Square, occupant: Option<Colour>) {
        if let Some(idx) = self.index(square.x, square.y) {
            self.cells[idx] = occupant;
        } else {
            debug_assert!(false, "write to off-board square {square:?}");
        }
    }

    fn winner(&self) -> Option<Colour> {
        for colour in Colour::ALL {
            let rank = promotion_rank(colour, self.dim);
            if (0..self.dim).any(|x| self.occupant(x, rank) == Some(colour)) {
                return Some(colour);
            }
        }
        if generate_pawn_moves(self, self.side_to_move).is_empty() {
            return Some(self.side_to_move.opposite());
        }
        None
    }
}

impl RaceGame for GameState {
    #[inline]
    fn dim(&self) -> i8 {
        self.dim
    }

    #[inline]
    fn get_square(&self, x: i8, y: i8) -> Option<SquareState> {
        self.index(x, y).map(|idx| SquareState {
            square: Square::new(x, y),
            occupant: self.cells[idx],
        })
    }

    #[inline]
    fn last_move(&self) -> Option<Move> {
        self.undo_stack.last().map(|undo| undo.mv)
    }

    fn apply_move(&mut self, mv: Move, record_history: bool) {
        let mover = match self.occupant(mv.from.x, mv.from.y) {
            Some(colour) => colour,
            None => {
                debug_assert!(false, "apply_move from empty square: {mv}");
                self.side_to_move
            }
        };

        let captured_square = if mv.is_en_passant {
            // The double-stepped pawn sits beside the capturer on its origin rank.
            Some(Square::new(mv.to.x, mv.from.y))
        } else if mv.is_capture {
            Some(mv.to)
        } else {
            None
        };

        if let Some(square) = captured_square {
            self.set(square, None);
        }
        self.set(mv.from, None);
        self.set(mv.to, Some(mover));

        self.undo_stack.push(UndoState {
            mv,
            mover,
            captured_square,
            prev_side_to_move: self.side_to_move,
            recorded: record_history,
        });
        if record_history {
            self.history.push(mv);
        }
        self.side_to_move = mover.opposite();
    }

    fn unapply_move(&mut self) -> Option<Move> {
        let undo = self.undo_stack.pop()?;

        self.set(undo.mv.to, None);
        self.set(undo.mv.from, Some(undo.mover));
        if let Some(square) = undo.captured_square {
            self.set(square, Some(undo.mover.opposite()));
        }
        if undo.recorded {
            self.history.pop();
        }
        self.side_to_move = undo.prev_side_to_move;

        Some(undo.mv)
    }

    fn is_finished(&self, verbose: bool) -> bool {
        let winner = self.winner();
        if verbose {
            if let Some(colour) = winner {
                info!("game finished after {} plies: {colour} wins", self.ply());
            }
        }
        winner.is_some()
    }

    #[inline]
    fn game_result(&self) -> Option<Colour> {
        self.winner()
    }
}
