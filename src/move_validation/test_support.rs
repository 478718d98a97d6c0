//! Board-building shorthands for the rule tests.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_validation::validation_outcome::{ValidationOutcome, ViolationKind};

pub fn at(notation: &str) -> Coordinates {
    Coordinates::of(notation).expect("test square should parse")
}

pub fn clear_board() -> Board {
    Board::new(8)
}

pub fn place(board: &mut Board, square: &str, kind: PieceKind, color: Color) {
    board.set_piece(at(square), Some(Piece::new(kind, color)));
}

pub fn mv(color: Color, from: &str, to: &str) -> Move {
    Move::new(color, at(from), at(to))
}

/// Kind and explanation of a failed outcome; panics on `Passed`.
pub fn failure(outcome: ValidationOutcome) -> (ViolationKind, String) {
    match outcome {
        ValidationOutcome::Failed(violation) => (violation.kind, violation.explanation),
        ValidationOutcome::Passed => panic!("expected the rule to fail"),
    }
}
