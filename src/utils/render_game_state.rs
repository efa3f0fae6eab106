//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the CLI.

use crate::game_state::pawn_types::Colour;
use crate::game_state::race_game::RaceGame;

/// Render the board to a Unicode string, highest rank first.
pub fn render_game_state<G: RaceGame + ?Sized>(game: &G) -> String {
    let dim = game.dim();
    let files: String = (0..dim)
        .map(|x| char::from(b'a' + x as u8).to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let label_width = dim.to_string().len();

    let mut out = String::new();
    out.push_str(&format!("{:width$} {files}\n", "", width = label_width));

    for y in (0..dim).rev() {
        let rank_label = format!("{:>width$}", y + 1, width = label_width);
        out.push_str(&rank_label);
        out.push(' ');

        for x in 0..dim {
            out.push(match game.occupant(x, y) {
                Some(Colour::White) => '♙',
                Some(Colour::Black) => '♟',
                None => '·',
            });
            if x < dim - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push_str(&rank_label);
        out.push('\n');
    }

    out.push_str(&format!("{:width$} {files}", "", width = label_width));
    out
}
