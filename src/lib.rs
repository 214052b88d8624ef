//! Crate root module declarations for the Passant chess move-selection core.
//!
//! Exposes the board representations, move generation, search, the agents
//! built on top of it, and utility helpers so the binary, benches, and
//! external hosts can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod absolute_board;
    pub mod chess_types;
    pub mod relative_state;
}

pub mod move_generation {
    pub mod attack_oracle;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliders;
    pub mod move_validation;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod endgame_patterns;
    pub mod endgame_scoring;
    pub mod iterative_deepening;
    pub mod move_history;
    pub mod session;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_trait;
    pub mod time_management;
}

pub mod utils {
    pub mod fen_parser;
    pub mod render_board;
    pub mod self_play;
}
