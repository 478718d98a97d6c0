//! Rules every move must satisfy regardless of the moving piece.
//!
//! These run first. Passing them is what makes `from` and `to` safe to
//! dereference for the piece rules, so each rule here checks bounds itself
//! before touching a square and the set can be evaluated in any order.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_validation::rule::Rule;
use crate::move_validation::validation_outcome::{ValidationOutcome, ViolationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneralRule {
    Borders,
    StartSquare,
    PieceColor,
    OwnPieceCapture,
    KingCapture,
}

impl GeneralRule {
    pub const ALL: [GeneralRule; 5] = [
        GeneralRule::Borders,
        GeneralRule::StartSquare,
        GeneralRule::PieceColor,
        GeneralRule::OwnPieceCapture,
        GeneralRule::KingCapture,
    ];
}

impl Rule for GeneralRule {
    fn can_validate(&self, board: &Board, mv: &Move) -> bool {
        match self {
            GeneralRule::Borders => true,
            GeneralRule::StartSquare => board.contains(mv.from),
            GeneralRule::PieceColor => {
                board.contains(mv.from) && board.square(mv.from).is_occupied()
            }
            GeneralRule::OwnPieceCapture | GeneralRule::KingCapture => {
                board.contains(mv.to) && board.square(mv.to).is_occupied()
            }
        }
    }

    fn validate(&self, board: &Board, mv: &Move) -> ValidationOutcome {
        match self {
            GeneralRule::Borders => validate_borders(board, mv),
            GeneralRule::StartSquare => validate_start_square(board, mv),
            GeneralRule::PieceColor => validate_piece_color(board, mv),
            GeneralRule::OwnPieceCapture => validate_own_piece_capture(board, mv),
            GeneralRule::KingCapture => validate_king_capture(board, mv),
        }
    }
}

fn validate_borders(board: &Board, mv: &Move) -> ValidationOutcome {
    match [mv.from, mv.to].into_iter().find(|c| !board.contains(*c)) {
        Some(outside) => ValidationOutcome::failed(
            ViolationKind::OutOfBounds,
            format!("The move is illegal since it goes outside the board borders: {outside}"),
        ),
        None => ValidationOutcome::Passed,
    }
}

fn validate_start_square(board: &Board, mv: &Move) -> ValidationOutcome {
    if board.square(mv.from).is_occupied() {
        ValidationOutcome::Passed
    } else {
        ValidationOutcome::failed(
            ViolationKind::EmptyOrigin,
            format!("Piece was not found at: {}", mv.from),
        )
    }
}

fn validate_piece_color(board: &Board, mv: &Move) -> ValidationOutcome {
    match board.piece_at(mv.from) {
        Some(piece) if piece.color != mv.color => ValidationOutcome::failed(
            ViolationKind::WrongMover,
            format!(
                "{} color player is trying to move a {} piece.",
                mv.color, piece.color
            ),
        ),
        _ => ValidationOutcome::Passed,
    }
}

fn validate_own_piece_capture(board: &Board, mv: &Move) -> ValidationOutcome {
    match board.piece_at(mv.to) {
        Some(piece) if piece.color == mv.color => ValidationOutcome::failed(
            ViolationKind::OwnCapture,
            format!(
                "{} color player is trying to capture their own piece at {}",
                mv.color, mv.to
            ),
        ),
        _ => ValidationOutcome::Passed,
    }
}

fn validate_king_capture(board: &Board, mv: &Move) -> ValidationOutcome {
    match board.piece_at(mv.to) {
        Some(piece) if piece.kind == PieceKind::King => ValidationOutcome::failed(
            ViolationKind::KingCapture,
            format!(
                "{} color player is trying to capture an opponent's king at {}",
                mv.color, mv.to
            ),
        ),
        _ => ValidationOutcome::Passed,
    }
}
