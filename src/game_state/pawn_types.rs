//! Core value types for the pawn-race engine.
//!
//! Colours, board positions, occupancy snapshots and moves. Everything here is
//! `Copy` so move lists and search frames can pass them around freely.

use std::fmt;

use crate::utils::algebraic::move_to_long_algebraic;

/// One of the two sides. Empty squares are `None` in an `Option<Colour>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Black,
}

impl Colour {
    pub const ALL: [Colour; 2] = [Colour::White, Colour::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Colour::White => 0,
            Colour::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Colour::White => write!(f, "White"),
            Colour::Black => write!(f, "Black"),
        }
    }
}

/// Board position. Signed so that `y + dir` never wraps before the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub x: i8,
    pub y: i8,
}

impl Square {
    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

/// Result of a bounds-checked board lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareState {
    pub square: Square,
    pub occupant: Option<Colour>,
}

impl SquareState {
    #[inline]
    pub const fn occupied_by(&self) -> Option<Colour> {
        self.occupant
    }

    #[inline]
    pub const fn x(&self) -> i8 {
        self.square.x
    }

    #[inline]
    pub const fn y(&self) -> i8 {
        self.square.y
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// A pawn move. En-passant moves always carry `is_capture` as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub is_capture: bool,
    pub is_en_passant: bool,
}

impl Move {
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            is_capture: false,
            is_en_passant: false,
        }
    }

    #[inline]
    pub const fn capture(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            is_capture: true,
            is_en_passant: false,
        }
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            is_capture: true,
            is_en_passant: true,
        }
    }

    /// Number of ranks covered; 2 for a double advance.
    #[inline]
    pub fn rank_distance(&self) -> i8 {
        (self.to.y - self.from.y).abs()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(*self))
    }
}
