//! Crate root module declarations for the chess referee.
//!
//! The referee decides whether a proposed move is legal on a given position
//! and, if so, produces the resulting position. This file exposes the board
//! model, the move validation pipeline and the I/O helpers (notation, move
//! files, rendering, replay) so the binary, tests and benches can import
//! stable module paths.

pub mod app_config;
pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod board_factory;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod move_validation {
    pub mod attack_oracle;
    pub mod bishop_rule;
    pub mod game_engine;
    pub mod general_rules;
    pub mod king_rule;
    pub mod knight_rule;
    pub mod path_clearance;
    pub mod pawn_rule;
    pub mod piece_rules;
    pub mod position_diff;
    pub mod post_move_rules;
    pub mod queen_rule;
    pub mod rook_rule;
    pub mod rule;
    pub mod validation_outcome;

    #[cfg(test)]
    pub(crate) mod test_support;
}

pub mod utils {
    pub mod algebraic;
    pub mod game_replay;
    pub mod move_reader;
    pub mod random_playout;
    pub mod render_board;
}
