//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.
//! Every scorer here is antisymmetric: scoring for one colour is the negation
//! of scoring the same position for the other.

use crate::game_state::pawn_types::Colour;
use crate::game_state::race_game::RaceGame;
use crate::game_state::race_rules::distance_to_promotion;
use crate::game_state::side::Side;

pub const PAWN_VALUE: i32 = 100;
pub const ADVANCEMENT_VALUE: i32 = 10;
pub const PASSED_PAWN_BONUS: i32 = 50;
pub const PROMOTION_BONUS: i32 = 1000;

/// Static score of a decided game. Kept well inside `i32` so the search
/// sentinels stay strictly larger.
pub const WIN_SCORE: i32 = i32::MAX / 2;

pub trait BoardScorer: Send + Sync {
    /// Score from `side`'s perspective; positive favours `side`.
    fn score<G: RaceGame + ?Sized>(&self, game: &G, side: Colour) -> i32;
}

/// Weights of the positional terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    pub pawn_value: i32,
    pub advancement_value: i32,
    pub passed_pawn_bonus: i32,
    pub promotion_bonus: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            pawn_value: PAWN_VALUE,
            advancement_value: ADVANCEMENT_VALUE,
            passed_pawn_bonus: PASSED_PAWN_BONUS,
            promotion_bonus: PROMOTION_BONUS,
        }
    }
}

/// `±WIN_SCORE` for a decided game, `None` while it is still open.
#[inline]
fn terminal_score<G: RaceGame + ?Sized>(game: &G, side: Colour) -> Option<i32> {
    if !game.is_finished(false) {
        return None;
    }
    match game.game_result() {
        Some(winner) if winner == side => Some(WIN_SCORE),
        Some(_) => Some(-WIN_SCORE),
        None => None,
    }
}

/// Material, advancement, promotion and passed-pawn evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PawnRaceScorer {
    pub weights: EvalWeights,
}

impl PawnRaceScorer {
    pub const fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    /// The heuristic terms alone, without the decided-game short-circuit.
    pub fn positional<G: RaceGame + ?Sized>(&self, game: &G, side: Colour) -> i32 {
        let us = Side::new(side);
        let them = us.opponent();
        let our_pawns = us.pawns(game);
        let their_pawns = them.pawns(game);

        let mut score = (our_pawns.len() as i32 - their_pawns.len() as i32) * self.weights.pawn_value;
        for (view, pawns, sign) in [(us, &our_pawns, 1), (them, &their_pawns, -1)] {
            for pawn in pawns {
                score += sign * self.pawn_terms(game, view, pawn.y, view.is_passed_pawn(game, *pawn));
            }
        }
        score
    }

    #[inline]
    fn pawn_terms<G: RaceGame + ?Sized>(&self, game: &G, view: Side, rank: i8, passed: bool) -> i32 {
        let dim = game.dim();
        let distance = distance_to_promotion(view.colour(), dim, rank);

        let mut terms = i32::from(dim - distance) * self.weights.advancement_value;
        if distance == 0 {
            terms += self.weights.promotion_bonus;
        }
        if passed {
            terms += self.weights.passed_pawn_bonus;
        }
        terms
    }
}

impl BoardScorer for PawnRaceScorer {
    fn score<G: RaceGame + ?Sized>(&self, game: &G, side: Colour) -> i32 {
        terminal_score(game, side).unwrap_or_else(|| self.positional(game, side))
    }
}

/// Pawn count difference only.
#[derive(Debug, Clone, Copy)]
pub struct MaterialScorer {
    pub pawn_value: i32,
}

impl Default for MaterialScorer {
    fn default() -> Self {
        Self {
            pawn_value: PAWN_VALUE,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score<G: RaceGame + ?Sized>(&self, game: &G, side: Colour) -> i32 {
        if let Some(score) = terminal_score(game, side) {
            return score;
        }
        let us = Side::new(side);
        let ours = us.pawns(game).len() as i32;
        let theirs = us.opponent().pawns(game).len() as i32;
        (ours - theirs) * self.pawn_value
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, EvalWeights, MaterialScorer, PawnRaceScorer, WIN_SCORE};
    use crate::game_state::game_state::GameState;
    use crate::game_state::pawn_types::Colour;

    const POSITIONS: [&str; 6] = [
        "...../W...B/...../..W../..... w",
        "...../W...B/...../..W../..... b",
        "......../.BB.B.BB/......../...W..../..B...../......../WW.W.WWW/........ w",
        "..../.B../.W../.... b",
        "W../.../... w",
        "...../B.B.B/.W.W./...../..... b",
    ];

    #[test]
    fn evaluation_is_antisymmetric() {
        let full = PawnRaceScorer::default();
        let material = MaterialScorer::default();
        for diagram in POSITIONS {
            let game = GameState::from_diagram(diagram).expect("diagram should parse");
            assert_eq!(
                full.score(&game, Colour::White),
                -full.score(&game, Colour::Black),
                "{diagram}"
            );
            assert_eq!(
                material.score(&game, Colour::White),
                -material.score(&game, Colour::Black),
                "{diagram}"
            );
        }
    }

    #[test]
    fn positional_terms_add_up() {
        // White: a4 (one step from promotion, passed), c2 (passed).
        // Black: e4 (passed). Material +100, advancement 40 + 20 - 20,
        // passed pawns 50 + 50 - 50.
        let game = GameState::from_diagram(POSITIONS[0]).expect("diagram should parse");
        let scorer = PawnRaceScorer::default();
        assert_eq!(scorer.score(&game, Colour::White), 190);
        assert_eq!(scorer.score(&game, Colour::Black), -190);
    }

    #[test]
    fn promotion_bonus_applies_on_the_last_rank() {
        let game = GameState::from_diagram(POSITIONS[4]).expect("diagram should parse");
        let scorer = PawnRaceScorer::default();
        // 100 material + 30 advancement + 1000 promotion + 50 passed.
        assert_eq!(scorer.positional(&game, Colour::White), 1180);
    }

    #[test]
    fn decided_games_short_circuit_to_win_score() {
        let game = GameState::from_diagram(POSITIONS[4]).expect("diagram should parse");
        assert_eq!(PawnRaceScorer::default().score(&game, Colour::White), WIN_SCORE);
        assert_eq!(MaterialScorer::default().score(&game, Colour::Black), -WIN_SCORE);

        let stuck = GameState::from_diagram(POSITIONS[3]).expect("diagram should parse");
        assert_eq!(PawnRaceScorer::default().score(&stuck, Colour::Black), -WIN_SCORE);
    }

    #[test]
    fn custom_weights_are_honoured() {
        let game = GameState::from_diagram(POSITIONS[0]).expect("diagram should parse");
        let scorer = PawnRaceScorer::new(EvalWeights {
            pawn_value: 1,
            advancement_value: 0,
            passed_pawn_bonus: 0,
            promotion_bonus: 0,
        });
        assert_eq!(scorer.score(&game, Colour::White), 1);
    }
}
