//! Colour-scoped views over the shared board.
//!
//! A `Side` bundles everything one player needs to reason about its own pawns
//! (direction, start and promotion ranks, move generation, passed-pawn test,
//! evaluation). The two sides live in a `SideRegistry` indexed by colour, so
//! the search picks the mover per node instead of holding cross-references.

use std::ops::Index;

use crate::game_state::pawn_types::{Colour, Move, Square};
use crate::game_state::race_game::RaceGame;
use crate::game_state::race_rules::{forward_direction, promotion_rank, start_rank};
use crate::move_generation::legal_moves_pawn::{generate_pawn_moves, pawn_squares};
use crate::search::board_scoring::BoardScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Side {
    colour: Colour,
}

impl Side {
    #[inline]
    pub const fn new(colour: Colour) -> Self {
        Self { colour }
    }

    #[inline]
    pub const fn colour(self) -> Colour {
        self.colour
    }

    #[inline]
    pub const fn opponent(self) -> Side {
        Side::new(self.colour.opposite())
    }

    #[inline]
    pub const fn direction(self) -> i8 {
        forward_direction(self.colour)
    }

    #[inline]
    pub const fn start_rank(self, dim: i8) -> i8 {
        start_rank(self.colour, dim)
    }

    #[inline]
    pub const fn promotion_rank(self, dim: i8) -> i8 {
        promotion_rank(self.colour, dim)
    }

    pub fn pawns<G: RaceGame + ?Sized>(self, game: &G) -> Vec<Square> {
        pawn_squares(game, self.colour)
    }

    pub fn valid_moves<G: RaceGame + ?Sized>(self, game: &G) -> Vec<Move> {
        generate_pawn_moves(game, self.colour)
    }

    /// A pawn is passed when no opposing pawn stands on its file or either
    /// neighbouring file on any rank ahead of it, promotion rank included.
    pub fn is_passed_pawn<G: RaceGame + ?Sized>(self, game: &G, square: Square) -> bool {
        if game.occupant(square.x, square.y) != Some(self.colour) {
            return false;
        }

        let opponent = self.colour.opposite();
        let dir = self.direction();
        let end_rank = self.promotion_rank(game.dim());

        let mut rank = square.y;
        while rank != end_rank {
            rank += dir;
            for file in [square.x - 1, square.x, square.x + 1] {
                if game.occupant(file, rank) == Some(opponent) {
                    return false;
                }
            }
        }
        true
    }

    /// Score of the current position from this side's point of view.
    #[inline]
    pub fn evaluate<G: RaceGame + ?Sized, S: BoardScorer>(self, game: &G, scorer: &S) -> i32 {
        scorer.score(game, self.colour)
    }
}

/// Both sides, indexed by colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideRegistry {
    sides: [Side; 2],
}

impl SideRegistry {
    pub const fn new() -> Self {
        Self {
            sides: [Side::new(Colour::White), Side::new(Colour::Black)],
        }
    }

    #[inline]
    pub fn get(&self, colour: Colour) -> Side {
        self.sides[colour.index()]
    }
}

impl Default for SideRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Colour> for SideRegistry {
    type Output = Side;

    fn index(&self, colour: Colour) -> &Side {
        &self.sides[colour.index()]
    }
}
