//! Queen movement law: rook lines and bishop diagonals, with a clear path.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_validation::path_clearance::validate_path_is_not_blocked;
use crate::move_validation::position_diff::PositionDiff;
use crate::move_validation::validation_outcome::{ValidationOutcome, ViolationKind};

pub fn validate_queen_move(board: &Board, mv: &Move) -> ValidationOutcome {
    let diff = PositionDiff::of_move(mv);

    if (diff.is_on_diagonal() || diff.is_on_line()) && !diff.is_zero() {
        validate_path_is_not_blocked(board, mv.from, mv.to)
    } else {
        ValidationOutcome::failed(
            ViolationKind::IllegalPieceGeometry,
            format!(
                "The queen at {} can't move to {} since the target is neither on the same diagonal nor on the same line",
                mv.from, mv.to
            ),
        )
    }
}
