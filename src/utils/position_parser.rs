//! Text diagrams for pawn-race positions.
//!
//! A diagram lists ranks from the top (highest `y`) down, separated by `/`,
//! one character per file: `W` white pawn, `B` black pawn, `.` empty. The
//! side to move follows after whitespace as `w` or `b`:
//!
//! `...../..B../...../.W.../..... w`
//!
//! The number of ranks sets the board dimension.

use crate::errors::RaceError;
use crate::game_state::game_state::GameState;
use crate::game_state::pawn_types::{Colour, Square};
use crate::game_state::race_game::RaceGame;

pub fn parse_position(text: &str) -> Result<GameState, RaceError> {
    let mut parts = text.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| RaceError::InvalidPosition("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| RaceError::InvalidPosition("missing side to move".to_owned()))?;
    if parts.next().is_some() {
        return Err(RaceError::InvalidPosition(
            "diagram has extra trailing fields".to_owned(),
        ));
    }

    let ranks: Vec<&str> = board_part.split('/').collect();
    let dim = i8::try_from(ranks.len())
        .map_err(|_| RaceError::InvalidPosition(format!("{} ranks is too many", ranks.len())))?;
    let mut game = GameState::new_empty(dim)?;

    for (row, rank_str) in ranks.iter().enumerate() {
        let y = dim - 1 - row as i8;
        let cells: Vec<char> = rank_str.chars().collect();
        if cells.len() != ranks.len() {
            return Err(RaceError::InvalidPosition(format!(
                "rank '{rank_str}' has {} files, expected {dim}",
                cells.len()
            )));
        }

        for (x, ch) in cells.into_iter().enumerate() {
            let occupant = occupant_from_char(ch)
                .ok_or_else(|| RaceError::InvalidPosition(format!("invalid square character '{ch}'")))?;
            game.place(Square::new(x as i8, y), occupant)?;
        }
    }

    game.set_side_to_move(parse_side_to_move(side_part)?);
    Ok(game)
}

/// Inverse of `parse_position` for the board and side to move.
pub fn generate_diagram(game: &GameState) -> String {
    let dim = game.dim();
    let ranks: Vec<String> = (0..dim)
        .rev()
        .map(|y| {
            (0..dim)
                .map(|x| match game.occupant(x, y) {
                    Some(Colour::White) => 'W',
                    Some(Colour::Black) => 'B',
                    None => '.',
                })
                .collect()
        })
        .collect();

    let side = match game.side_to_move() {
        Colour::White => "w",
        Colour::Black => "b",
    };
    format!("{} {side}", ranks.join("/"))
}

fn parse_side_to_move(side_part: &str) -> Result<Colour, RaceError> {
    match side_part {
        "w" => Ok(Colour::White),
        "b" => Ok(Colour::Black),
        _ => Err(RaceError::InvalidPosition(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn occupant_from_char(ch: char) -> Option<Option<Colour>> {
    match ch {
        'W' => Some(Some(Colour::White)),
        'B' => Some(Some(Colour::Black)),
        '.' => Some(None),
        _ => None,
    }
}
