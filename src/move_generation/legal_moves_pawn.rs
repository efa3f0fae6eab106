//! Pseudo-legal pawn move enumeration.
//!
//! Pawns are visited file by file, rank by rank, and each pawn emits its moves
//! in a fixed order (en passant, left capture, right capture, single advance,
//! double advance). The resulting order is stable for a given board, which the
//! root tie-break relies on.

use crate::game_state::pawn_types::{Colour, Move, Square};
use crate::game_state::race_game::RaceGame;
use crate::game_state::race_rules::{forward_direction, start_rank};

/// All squares holding a pawn of `colour`, file-major.
pub fn pawn_squares<G: RaceGame + ?Sized>(game: &G, colour: Colour) -> Vec<Square> {
    let dim = game.dim();
    let mut out = Vec::new();
    for x in 0..dim {
        for y in 0..dim {
            if game.occupant(x, y) == Some(colour) {
                out.push(Square::new(x, y));
            }
        }
    }
    out
}

pub fn generate_pawn_moves<G: RaceGame + ?Sized>(game: &G, side: Colour) -> Vec<Move> {
    let mut out = Vec::new();
    generate_pawn_moves_into(game, side, &mut out);
    out
}

pub fn generate_pawn_moves_into<G: RaceGame + ?Sized>(game: &G, side: Colour, out: &mut Vec<Move>) {
    let opponent = side.opposite();
    let dir = forward_direction(side);
    let home_rank = start_rank(side, game.dim());
    let last_move = game.last_move();

    for from in pawn_squares(game, side) {
        if let Some(target) = last_move.and_then(|last| en_passant_target(game, side, from, last)) {
            out.push(Move::en_passant(from, target));
        }

        for file_delta in [-1i8, 1i8] {
            let Some(target) = game.get_square(from.x + file_delta, from.y + dir) else {
                continue;
            };
            if target.occupied_by() == Some(opponent) {
                out.push(Move::capture(from, target.square));
            }
        }

        match game.get_square(from.x, from.y + dir) {
            Some(one) if one.is_empty() => out.push(Move::quiet(from, one.square)),
            // A blocked pawn cannot step through to the double advance.
            _ => continue,
        }

        if from.y == home_rank {
            if let Some(two) = game.get_square(from.x, from.y + 2 * dir) {
                if two.is_empty() {
                    out.push(Move::quiet(from, two.square));
                }
            }
        }
    }
}

/// Square a pawn on `from` would land on when capturing en passant, if the
/// previous move makes that possible.
fn en_passant_target<G: RaceGame + ?Sized>(
    game: &G,
    side: Colour,
    from: Square,
    last_move: Move,
) -> Option<Square> {
    if last_move.rank_distance() != 2 {
        return None;
    }
    if (last_move.to.x - from.x).abs() != 1 || last_move.to.y != from.y {
        return None;
    }
    if game.occupant(last_move.to.x, last_move.to.y) != Some(side.opposite()) {
        return None;
    }

    let capture_rank = (last_move.from.y + last_move.to.y) / 2;
    game.get_square(last_move.to.x, capture_rank)
        .filter(|sq| sq.is_empty())
        .map(|sq| sq.square)
}
