//! Minimax decision engine.
//!
//! `choose_move` is the top-level entry point of the search: it runs the
//! root layer itself and hands every child to `Searcher`. Root moves are
//! compared by strict improvement over the ordered list, so the first of
//! several equally scored moves wins and the choice is reproducible.

use log::debug;

use crate::engines::engine_trait::{ensure_side_to_move, Engine, EngineOutput, GoParams};
use crate::errors::RaceError;
use crate::game_state::game_state::GameState;
use crate::game_state::pawn_types::{Colour, Move};
use crate::game_state::race_game::RaceGame;
use crate::game_state::side::Side;
use crate::search::alpha_beta::{SearchConfig, SearchResult, Searcher, MATE_SCORE, SCORE_INFINITY};
use crate::search::applied_move::AppliedMove;
use crate::search::board_scoring::{BoardScorer, PawnRaceScorer};
use crate::search::move_ordering::order_moves;

/// Best move for `side` at `config.max_depth` plies (at least one).
///
/// `best_move` is `None` when `side` has no moves; the caller declares the
/// loss. `game` is returned to its original state.
pub fn choose_move<G, S>(game: &mut G, side: Colour, scorer: &S, config: SearchConfig) -> SearchResult
where
    G: RaceGame + ?Sized,
    S: BoardScorer,
{
    let config = SearchConfig {
        max_depth: config.max_depth.max(1),
        ..config
    };

    let mut moves = Side::new(side).valid_moves(&*game);
    if moves.is_empty() {
        debug!("{side} has no moves");
        return SearchResult {
            best_move: None,
            best_score: -MATE_SCORE,
            ..SearchResult::default()
        };
    }
    order_moves(&mut moves, side, game.dim());

    let root_moves = moves.len();
    let mut searcher = Searcher::new(scorer, config, side);
    let mut best: Option<(Move, i32)> = None;
    for mv in moves {
        let score = {
            let mut child = AppliedMove::apply(&mut *game, mv);
            searcher.search(&mut *child, config.max_depth - 1, -SCORE_INFINITY, SCORE_INFINITY, false)
        };
        debug!("root move {mv} scored {score}");

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((mv, score));
        }
    }

    let stats = searcher.stats();
    debug!(
        "{side} search done: depth={} nodes={} qnodes={} cutoffs={}",
        config.max_depth, stats.nodes, stats.quiescence_nodes, stats.cutoffs
    );

    SearchResult {
        best_move: best.map(|(mv, _)| mv),
        best_score: best.map_or(-MATE_SCORE, |(_, score)| score),
        root_moves,
        stats,
    }
}

pub struct MinimaxEngine<S: BoardScorer = PawnRaceScorer> {
    scorer: S,
    config: SearchConfig,
}

impl MinimaxEngine<PawnRaceScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(PawnRaceScorer::default(), config)
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(scorer: S, config: SearchConfig) -> Self {
        Self { scorer, config }
    }
}

impl Default for MinimaxEngine<PawnRaceScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "PawnRace Minimax"
    }

    fn choose_move(
        &mut self,
        game: &mut GameState,
        side: Colour,
        params: &GoParams,
    ) -> Result<EngineOutput, RaceError> {
        ensure_side_to_move(game, side)?;

        let config = SearchConfig {
            max_depth: params.depth.unwrap_or(self.config.max_depth),
            ..self.config
        };
        let result = choose_move(game, side, &self.scorer, config);

        let mut out = EngineOutput {
            best_move: result.best_move,
            best_score: result.best_move.map(|_| result.best_score),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} nodes {} qnodes {} cutoffs {} root_moves {}",
            config.max_depth.max(1),
            result.stats.nodes,
            result.stats.quiescence_nodes,
            result.stats.cutoffs,
            result.root_moves
        ));
        if let Some(mv) = result.best_move {
            out.info_lines
                .push(format!("info score {} pv {}", result.best_score, mv));
        }
        Ok(out)
    }
}
