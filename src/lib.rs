//! Crate root module declarations for the pawn-race engine.
//!
//! Exposes the board model, pawn move generation, the alpha-beta search and
//! the engines built on it, plus text helpers, so the binary, benches and
//! external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod game_state;
    pub mod pawn_types;
    pub mod race_game;
    pub mod race_rules;
    pub mod side;
    pub mod undo_state;
}

pub mod move_generation {
    pub mod legal_moves_pawn;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod applied_move;
    pub mod board_scoring;
    pub mod move_ordering;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod position_parser;
    pub mod render_game_state;
}
