//! Square and move conversions for long algebraic coordinates.
//!
//! Files are letters from `a`, ranks are 1-based numbers, so boards up to
//! 26 files wide are addressable (`a1`, `c10`). Moves are written as the
//! origin square followed by the destination square (`b2b4`).

use crate::errors::RaceError;
use crate::game_state::pawn_types::{Colour, Move, Square};
use crate::game_state::race_game::RaceGame;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;

/// Convert long algebraic notation (for example: "e4") to a board square.
pub fn algebraic_to_square(text: &str, dim: i8) -> Result<Square, RaceError> {
    let invalid = || RaceError::InvalidAlgebraic(text.to_owned());

    let mut chars = text.chars();
    let file_char = chars.next().ok_or_else(invalid)?;
    if !file_char.is_ascii_lowercase() {
        return Err(invalid());
    }
    let rank = chars.as_str().parse::<i8>().map_err(|_| invalid())?;

    let x = (file_char as u8 - b'a') as i8;
    let y = rank - 1;
    if !(0..dim).contains(&x) || !(0..dim).contains(&y) {
        return Err(invalid());
    }
    Ok(Square::new(x, y))
}

/// Convert a board square to long algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.x.clamp(0, 25) as u8);
    format!("{file_char}{}", i32::from(square.y) + 1)
}

pub fn move_to_long_algebraic(mv: Move) -> String {
    format!("{}{}", square_to_algebraic(mv.from), square_to_algebraic(mv.to))
}

/// Resolve `b2b4` style text against the moves `side` can currently make, so
/// the capture and en-passant flags come from the generator.
pub fn long_algebraic_to_move<G: RaceGame + ?Sized>(
    text: &str,
    game: &G,
    side: Colour,
) -> Result<Move, RaceError> {
    let text = text.trim();
    let split = text
        .char_indices()
        .skip(1)
        .find(|(_, ch)| ch.is_ascii_lowercase())
        .map(|(idx, _)| idx)
        .ok_or_else(|| RaceError::InvalidAlgebraic(text.to_owned()))?;

    let from = algebraic_to_square(&text[..split], game.dim())?;
    let to = algebraic_to_square(&text[split..], game.dim())?;

    generate_pawn_moves(game, side)
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to)
        .ok_or(RaceError::IllegalMove(Move::quiet(from, to)))
}
