//! Replays a move list through the engine, ply by ply.
//!
//! This is the console runner's loop as a library: every accepted move is
//! recorded together with its resulting position and whether it checks the
//! opponent; the first rejected move ends the replay.

use chrono::{DateTime, Local};

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_validation::attack_oracle::is_king_in_check;
use crate::move_validation::game_engine::GameEngine;
use crate::move_validation::validation_outcome::RuleViolation;

#[derive(Debug, Clone)]
pub struct PlyRecord {
    pub mv: Move,
    pub board_after: Board,
    /// The opponent's king is attacked after this move.
    pub gives_check: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReplayOutcome {
    Completed,
    /// `ply` is the zero-based index of the rejected move.
    Rejected {
        ply: usize,
        mv: Move,
        violation: RuleViolation,
    },
}

#[derive(Debug, Clone)]
pub struct GameReplay {
    pub started_at: DateTime<Local>,
    pub initial_board: Board,
    pub plies: Vec<PlyRecord>,
    pub outcome: ReplayOutcome,
}

impl GameReplay {
    /// The last accepted position, or the initial board if none was.
    pub fn final_board(&self) -> &Board {
        self.plies
            .last()
            .map(|ply| &ply.board_after)
            .unwrap_or(&self.initial_board)
    }

    pub fn is_completed(&self) -> bool {
        self.outcome == ReplayOutcome::Completed
    }
}

pub fn replay_moves(engine: &GameEngine, initial_board: Board, moves: &[Move]) -> GameReplay {
    let started_at = Local::now();
    let mut plies: Vec<PlyRecord> = Vec::with_capacity(moves.len());
    let mut outcome = ReplayOutcome::Completed;

    for (ply, mv) in moves.iter().enumerate() {
        let current = plies
            .last()
            .map(|record| &record.board_after)
            .unwrap_or(&initial_board);

        match engine.perform_move(current, mv) {
            Ok(board_after) => {
                let gives_check = is_king_in_check(&board_after, mv.color.opposite());
                if gives_check {
                    tracing::info!(ply, %mv, "{} king is in check", mv.color.opposite());
                }
                plies.push(PlyRecord {
                    mv: *mv,
                    board_after,
                    gives_check,
                });
            }
            Err(violation) => {
                tracing::warn!(ply, %mv, "illegal move: {violation}");
                outcome = ReplayOutcome::Rejected {
                    ply,
                    mv: *mv,
                    violation,
                };
                break;
            }
        }
    }

    GameReplay {
        started_at,
        initial_board,
        plies,
        outcome,
    }
}
