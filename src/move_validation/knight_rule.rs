//! Knight movement law: an L-shaped jump, never blocked.

use crate::game_state::chess_types::Move;
use crate::move_validation::position_diff::PositionDiff;
use crate::move_validation::validation_outcome::{ValidationOutcome, ViolationKind};

pub fn validate_knight_move(mv: &Move) -> ValidationOutcome {
    let diff = PositionDiff::of_move(mv);
    let is_l_path = matches!(
        (diff.abs_row_delta(), diff.abs_column_delta()),
        (1, 2) | (2, 1)
    );

    if is_l_path {
        ValidationOutcome::Passed
    } else {
        ValidationOutcome::failed(
            ViolationKind::IllegalPieceGeometry,
            format!(
                "The knight at {} can't move to {} since the target is not reachable via L path",
                mv.from, mv.to
            ),
        )
    }
}
