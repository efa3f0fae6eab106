//! Depth-limited minimax with alpha-beta pruning and quiescence search.
//!
//! Scores are always from the searching side's point of view: the
//! maximizing layer is the searching side, the minimizing layer its opponent.
//! The board is shared and mutated in place; every child visit goes through
//! `AppliedMove`, which reverts the move when the frame is left.
//!
//! Decided games score `MATE_SCORE` minus the plies from the root, so the
//! search prefers the quickest forced win and the slowest forced loss.

use crate::game_state::pawn_types::{Colour, Move};
use crate::game_state::race_game::RaceGame;
use crate::game_state::side::{Side, SideRegistry};
use crate::search::applied_move::AppliedMove;
use crate::search::board_scoring::BoardScorer;
use crate::search::move_ordering::{is_tactical, order_moves, order_tactical_moves};

/// Window bound; strictly larger than any score the search can return.
pub const SCORE_INFINITY: i32 = i32::MAX;
/// Score of a win found at the root. Wins further down score slightly less.
pub const MATE_SCORE: i32 = i32::MAX - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies of full-width search, root move included.
    pub max_depth: u8,
    /// Extra plies of capture/promotion-only search below the horizon.
    pub quiescence_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 6,
            quiescence_depth: 4,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub quiescence_nodes: u64,
    pub cutoffs: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub root_moves: usize,
    pub stats: SearchStats,
}

pub struct Searcher<'s, S: BoardScorer> {
    scorer: &'s S,
    config: SearchConfig,
    perspective: Colour,
    sides: SideRegistry,
    stats: SearchStats,
}

impl<'s, S: BoardScorer> Searcher<'s, S> {
    pub fn new(scorer: &'s S, config: SearchConfig, perspective: Colour) -> Self {
        Self {
            scorer,
            config,
            perspective,
            sides: SideRegistry::new(),
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Score of a position where the searching side has won, `depth` plies
    /// of full-width search remaining.
    #[inline]
    pub fn win_score(&self, depth: u8) -> i32 {
        MATE_SCORE - self.plies_from_root(depth)
    }

    #[inline]
    pub fn loss_score(&self, depth: u8) -> i32 {
        -MATE_SCORE + self.plies_from_root(depth)
    }

    #[inline]
    fn plies_from_root(&self, depth: u8) -> i32 {
        i32::from(self.config.max_depth.saturating_sub(depth))
    }

    #[inline]
    fn mover(&self, maximizing: bool) -> Side {
        if maximizing {
            self.sides[self.perspective]
        } else {
            self.sides[self.perspective.opposite()]
        }
    }

    pub fn search<G: RaceGame + ?Sized>(
        &mut self,
        game: &mut G,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;

        if game.is_finished(false) {
            match game.game_result() {
                Some(winner) if winner == self.perspective => return self.win_score(depth),
                Some(_) => return self.loss_score(depth),
                None => {}
            }
        }

        if depth == 0 {
            let budget = self.config.quiescence_depth;
            return self.quiescence(game, alpha, beta, budget, maximizing);
        }

        let mover = self.mover(maximizing);
        let mut moves = mover.valid_moves(&*game);
        if moves.is_empty() {
            // The side to move is immobilised and loses.
            return if maximizing {
                self.loss_score(depth)
            } else {
                self.win_score(depth)
            };
        }
        order_moves(&mut moves, mover.colour(), game.dim());

        let mut best = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };
        for mv in moves {
            let score = {
                let mut child = AppliedMove::apply(&mut *game, mv);
                self.search(&mut *child, depth - 1, alpha, beta, !maximizing)
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }

    pub fn quiescence<G: RaceGame + ?Sized>(
        &mut self,
        game: &mut G,
        mut alpha: i32,
        mut beta: i32,
        depth: u8,
        maximizing: bool,
    ) -> i32 {
        self.stats.quiescence_nodes += 1;

        let stand_pat = self.sides[self.perspective].evaluate(&*game, self.scorer);
        if maximizing {
            if stand_pat >= beta {
                self.stats.cutoffs += 1;
                return beta;
            }
            alpha = alpha.max(stand_pat);
        } else {
            if stand_pat <= alpha {
                self.stats.cutoffs += 1;
                return alpha;
            }
            beta = beta.min(stand_pat);
        }

        // A decided game is as quiet as it gets.
        if depth == 0 || game.is_finished(false) {
            return stand_pat;
        }

        let mover = self.mover(maximizing);
        let dim = game.dim();
        let mut tactical: Vec<Move> = mover
            .valid_moves(&*game)
            .into_iter()
            .filter(|mv| is_tactical(mv, mover.colour(), dim))
            .collect();
        if tactical.is_empty() {
            return stand_pat;
        }
        order_tactical_moves(&mut tactical, mover.colour(), dim);

        let mut best = stand_pat;
        for mv in tactical {
            let score = {
                let mut child = AppliedMove::apply(&mut *game, mv);
                self.quiescence(&mut *child, alpha, beta, depth - 1, !maximizing)
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchConfig, Searcher, MATE_SCORE, SCORE_INFINITY};
    use crate::game_state::game_state::GameState;
    use crate::game_state::pawn_types::{Colour, Move, Square};
    use crate::game_state::race_game::RaceGame;
    use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
    use crate::search::applied_move::AppliedMove;
    use crate::search::board_scoring::{BoardScorer, MaterialScorer, PawnRaceScorer};
    use crate::search::move_ordering::is_tactical;

    const SMALL_POSITIONS: [&str; 8] = [
        "..../BB.B/..../WW.W w",
        "..../BB.B/..../WW.W b",
        "..../.B../W.W./.... w",
        "...../.B.B./...../W.W.W/..... w",
        "...../B.BB./...../.WW.W/..... b",
        "...../..B../.W.../...../..... b",
        "...../.B.../..W../..B../.W... w",
        ".../B.B/.W. w",
    ];

    /// Plain minimax over the same tree, no pruning anywhere.
    fn reference_search<S: BoardScorer>(
        game: &mut GameState,
        scorer: &S,
        config: SearchConfig,
        me: Colour,
        depth: u8,
        maximizing: bool,
    ) -> i32 {
        let plies = i32::from(config.max_depth - depth);
        if game.is_finished(false) {
            match game.game_result() {
                Some(winner) if winner == me => return MATE_SCORE - plies,
                Some(_) => return -MATE_SCORE + plies,
                None => {}
            }
        }
        if depth == 0 {
            return reference_quiescence(game, scorer, me, config.quiescence_depth, maximizing);
        }

        let mover = if maximizing { me } else { me.opposite() };
        let moves = generate_pawn_moves(&*game, mover);
        if moves.is_empty() {
            return if maximizing { -MATE_SCORE + plies } else { MATE_SCORE - plies };
        }

        let scores: Vec<i32> = moves
            .into_iter()
            .map(|mv| {
                game.apply_move(mv, false);
                let score = reference_search(game, scorer, config, me, depth - 1, !maximizing);
                game.unapply_move();
                score
            })
            .collect();
        let extreme = if maximizing {
            scores.iter().max()
        } else {
            scores.iter().min()
        };
        *extreme.expect("non-empty move list")
    }

    fn reference_quiescence<S: BoardScorer>(
        game: &mut GameState,
        scorer: &S,
        me: Colour,
        depth: u8,
        maximizing: bool,
    ) -> i32 {
        let stand_pat = scorer.score(&*game, me);
        if depth == 0 || game.is_finished(false) {
            return stand_pat;
        }

        let mover = if maximizing { me } else { me.opposite() };
        let dim = game.dim();
        let mut value = stand_pat;
        for mv in generate_pawn_moves(&*game, mover)
            .into_iter()
            .filter(|mv| is_tactical(mv, mover, dim))
        {
            game.apply_move(mv, false);
            let score = reference_quiescence(game, scorer, me, depth - 1, !maximizing);
            game.unapply_move();
            value = if maximizing { value.max(score) } else { value.min(score) };
        }
        value
    }

    fn assert_pruned_matches_reference<S: BoardScorer>(scorer: &S) {
        for diagram in SMALL_POSITIONS {
            for depth in 1..=3u8 {
                let mut game = GameState::from_diagram(diagram).expect("diagram should parse");
                let me = game.side_to_move();
                let config = SearchConfig {
                    max_depth: depth,
                    quiescence_depth: 2,
                };
                let before = game.clone();

                let expected = reference_search(&mut game, scorer, config, me, depth, true);
                let mut searcher = Searcher::new(scorer, config, me);
                let pruned = searcher.search(&mut game, depth, -SCORE_INFINITY, SCORE_INFINITY, true);

                assert_eq!(pruned, expected, "{diagram} at depth {depth}");
                assert_eq!(game, before, "search left the board changed for {diagram}");
            }
        }
    }

    #[test]
    fn pruned_search_matches_full_minimax_with_positional_scorer() {
        assert_pruned_matches_reference(&PawnRaceScorer::default());
    }

    #[test]
    fn pruned_search_matches_full_minimax_with_material_scorer() {
        assert_pruned_matches_reference(&MaterialScorer::default());
    }

    #[test]
    fn pruning_actually_cuts_on_a_race_opening() {
        let scorer = PawnRaceScorer::default();
        let mut game = GameState::new_race(6, 0, 5).expect("race opening should build");
        let mut searcher = Searcher::new(&scorer, SearchConfig::default(), Colour::White);
        searcher.search(&mut game, 3, -SCORE_INFINITY, SCORE_INFINITY, true);
        let stats = searcher.stats();
        assert!(stats.cutoffs > 0);
        assert!(stats.nodes > 1);
    }

    #[test]
    fn faster_wins_and_slower_losses_score_higher() {
        let scorer = MaterialScorer::default();
        let config = SearchConfig {
            max_depth: 4,
            quiescence_depth: 0,
        };
        // White has already promoted.
        let mut won = GameState::from_diagram("W.../..../..B./.... b").expect("diagram should parse");

        let mut white = Searcher::new(&scorer, config, Colour::White);
        let quick = white.search(&mut won, 3, -SCORE_INFINITY, SCORE_INFINITY, true);
        let slow = white.search(&mut won, 1, -SCORE_INFINITY, SCORE_INFINITY, true);
        assert_eq!(quick, MATE_SCORE - 1);
        assert!(quick > slow);

        let mut black = Searcher::new(&scorer, config, Colour::Black);
        let early_loss = black.search(&mut won, 3, -SCORE_INFINITY, SCORE_INFINITY, true);
        let late_loss = black.search(&mut won, 1, -SCORE_INFINITY, SCORE_INFINITY, true);
        assert_eq!(early_loss, -MATE_SCORE + 1);
        assert!(late_loss > early_loss);
        assert!(slow > late_loss);
    }

    #[test]
    fn quiescence_sees_the_recapture_behind_the_horizon() {
        let scorer = MaterialScorer::default();
        let mut game = GameState::from_diagram(
            "......../B......./......../....B.../...B..../..W...../.......W/........ w",
        )
        .expect("diagram should parse");
        let capture = Move::capture(Square::new(2, 2), Square::new(3, 3));

        let score_with_budget = |game: &mut GameState, quiescence_depth: u8| {
            let config = SearchConfig {
                max_depth: 1,
                quiescence_depth,
            };
            let mut searcher = Searcher::new(&scorer, config, Colour::White);
            let mut child = AppliedMove::apply(game, capture);
            searcher.search(&mut *child, 0, -SCORE_INFINITY, SCORE_INFINITY, false)
        };

        assert_eq!(score_with_budget(&mut game, 0), 0);
        assert_eq!(score_with_budget(&mut game, 2), -100);
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn immobilised_mover_loses_inside_search() {
        let scorer = PawnRaceScorer::default();
        let config = SearchConfig {
            max_depth: 2,
            quiescence_depth: 1,
        };
        let mut game = GameState::from_diagram("..../.B../.W../.... w").expect("diagram should parse");
        let mut searcher = Searcher::new(&scorer, config, Colour::White);
        let score = searcher.search(&mut game, 2, -SCORE_INFINITY, SCORE_INFINITY, true);
        assert_eq!(score, searcher.loss_score(2));
    }
}
