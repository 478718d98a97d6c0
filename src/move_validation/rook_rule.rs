//! Rook movement law: any distance along a row or column with a clear path.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_validation::path_clearance::validate_path_is_not_blocked;
use crate::move_validation::position_diff::PositionDiff;
use crate::move_validation::validation_outcome::{ValidationOutcome, ViolationKind};

pub fn validate_rook_move(board: &Board, mv: &Move) -> ValidationOutcome {
    let diff = PositionDiff::of_move(mv);

    if diff.is_on_line() && !diff.is_zero() {
        validate_path_is_not_blocked(board, mv.from, mv.to)
    } else {
        ValidationOutcome::failed(
            ViolationKind::IllegalPieceGeometry,
            format!(
                "Rook at {} can't reach {} since it's not on the same horizontal/vertical",
                mv.from, mv.to
            ),
        )
    }
}
