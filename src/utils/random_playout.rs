//! Seeded random games played through the validation engine.
//!
//! Candidate moves are enumerated by brute force (every own piece to every
//! square) and filtered by the engine, so a playout exercises the whole rule
//! pipeline. Used by the CLI, the property tests and the benches.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_validation::game_engine::GameEngine;

#[derive(Debug, Clone, Copy)]
pub struct PlayoutConfig {
    pub plies: usize,
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            plies: 40,
            seed: 1234,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Playout {
    pub moves: Vec<Move>,
    pub final_board: Board,
    /// Side to move when the playout ended.
    pub side_to_move: Color,
    /// True when the playout stopped because the side to move had no legal move.
    pub exhausted: bool,
}

/// Every move `color` can legally make on `board`.
pub fn legal_moves(engine: &GameEngine, board: &Board, color: Color) -> Vec<Move> {
    let destinations: Vec<Coordinates> = board.squares().map(|square| square.coordinates).collect();

    board
        .squares_with_pieces(color)
        .into_iter()
        .flat_map(|origin| {
            destinations
                .iter()
                .map(move |to| Move::new(color, origin.coordinates, *to))
        })
        .filter(|mv| engine.validate_move(board, mv).is_passed())
        .collect()
}

pub fn random_playout(engine: &GameEngine, initial_board: Board, config: PlayoutConfig) -> Playout {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut board = initial_board;
    let mut side_to_move = Color::White;
    let mut moves = Vec::with_capacity(config.plies);
    let mut exhausted = false;

    while moves.len() < config.plies {
        let candidates = legal_moves(engine, &board, side_to_move);
        let Some(mv) = candidates.choose(&mut rng).copied() else {
            exhausted = true;
            break;
        };

        match engine.perform_move(&board, &mv) {
            Ok(next) => board = next,
            Err(violation) => {
                // Candidates were produced by the same engine on the same board.
                tracing::error!(%mv, "legal move rejected on replay: {violation}");
                break;
            }
        }
        tracing::trace!(ply = moves.len(), %mv, "random move played");
        moves.push(mv);
        side_to_move = side_to_move.opposite();
    }

    tracing::debug!(plies = moves.len(), exhausted, seed = config.seed, "playout finished");
    Playout {
        moves,
        final_board: board,
        side_to_move,
        exhausted,
    }
}
