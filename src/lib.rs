//! Crate root module declarations for the Veil Chess rules engine.
//!
//! Veil Chess is a chess variant in which every piece starts with an unknown,
//! multi-valued identity: a candidate set of all six piece types that can only
//! shrink, through deductions driven by global piece-count conservation. This
//! file exposes the top-level subsystems (game state, per-type move rules,
//! identity resolution, and utility helpers) so binaries, tests, and external
//! tooling can import stable module paths.

pub mod board_location;
pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_rules {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
}

pub mod identity {
    pub mod resolve;
}

pub mod utils {
    pub mod render_game_state;
    pub mod save_state;
}
