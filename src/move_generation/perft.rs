use crate::game_state::pawn_types::{Colour, Move};
use crate::game_state::race_game::RaceGame;
use crate::game_state::race_rules::promotion_rank;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.promotions += rhs.promotions;
    }

    fn record_leaf(&mut self, mv: &Move, mover: Colour, dim: i8) {
        self.nodes += 1;
        if mv.is_capture {
            self.captures += 1;
        }
        if mv.is_en_passant {
            self.en_passant += 1;
        }
        if mv.to.y == promotion_rank(mover, dim) {
            self.promotions += 1;
        }
    }
}

/// Counts the move tree below `game` to `depth` plies, `side` moving first.
///
/// Decided positions are leaves: nothing is generated below a promotion or
/// below a side with no moves. The board is restored before returning.
pub fn perft<G: RaceGame + ?Sized>(game: &mut G, side: Colour, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for (_, counts) in perft_divide(game, side, depth) {
        total.merge(counts);
    }
    total
}

/// Per-root-move breakdown of `perft`, in generation order.
pub fn perft_divide<G: RaceGame + ?Sized>(game: &mut G, side: Colour, depth: u8) -> Vec<(Move, PerftCounts)> {
    if depth == 0 {
        return Vec::new();
    }

    generate_pawn_moves(&*game, side)
        .into_iter()
        .map(|mv| {
            let mut counts = PerftCounts::default();
            perft_recurse(game, mv, side, depth, 1, &mut counts);
            (mv, counts)
        })
        .collect()
}

fn perft_recurse<G: RaceGame + ?Sized>(
    game: &mut G,
    mv: Move,
    mover: Colour,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.record_leaf(&mv, mover, game.dim());
        return;
    }

    game.apply_move(mv, false);
    if !game.is_finished(false) {
        let replier = mover.opposite();
        for child in generate_pawn_moves(&*game, replier) {
            perft_recurse(game, child, replier, search_depth, current_depth + 1, counts);
        }
    }
    game.unapply_move();
}
