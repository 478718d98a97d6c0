//! Line-of-sight check for sliding moves.
//!
//! Walks from `from` towards `to` one unit step at a time and fails on the
//! first occupied square strictly between them. Only straight lines and
//! diagonals are walkable; callers classify the move shape first.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Coordinates;
use crate::move_validation::position_diff::PositionDiff;
use crate::move_validation::validation_outcome::{ValidationOutcome, ViolationKind};

pub fn validate_path_is_not_blocked(
    board: &Board,
    from: Coordinates,
    to: Coordinates,
) -> ValidationOutcome {
    let diff = PositionDiff::new(from, to);
    debug_assert!(
        diff.is_on_line() || diff.is_on_diagonal(),
        "path from {from} to {to} is not a straight line"
    );

    let (d_row, d_column) = diff.step();
    let mut current = from;
    for _ in 1..diff.chebyshev_distance() {
        current = current.offset(d_row, d_column);
        if board.square(current).is_occupied() {
            return ValidationOutcome::failed(
                ViolationKind::PathBlocked,
                format!("{to} can't be reached since there is a piece at {current} on the path"),
            );
        }
    }

    ValidationOutcome::Passed
}

#[cfg(test)]
mod tests {
    use super::validate_path_is_not_blocked;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::move_validation::validation_outcome::{ValidationOutcome, ViolationKind};

    fn at(notation: &str) -> Coordinates {
        Coordinates::of(notation).expect("test square should parse")
    }

    fn board_with(pieces: &[&str]) -> Board {
        let mut board = Board::new(8);
        for square in pieces {
            board.set_piece(at(square), Some(Piece::new(PieceKind::Knight, Color::Black)));
        }
        board
    }

    #[test]
    fn empty_path_passes_in_every_direction() {
        let board = board_with(&[]);
        for (from, to) in [("a1", "a8"), ("h8", "a1"), ("d4", "h4"), ("d4", "a7"), ("c2", "c3")] {
            assert!(
                validate_path_is_not_blocked(&board, at(from), at(to)).is_passed(),
                "{from}->{to} should be clear"
            );
        }
    }

    #[test]
    fn destination_and_origin_do_not_block() {
        let board = board_with(&["a1", "a8"]);
        assert!(validate_path_is_not_blocked(&board, at("a1"), at("a8")).is_passed());
    }

    #[test]
    fn first_intermediate_piece_is_named() {
        let board = board_with(&["f5", "g6"]);
        let outcome = validate_path_is_not_blocked(&board, at("e4"), at("h7"));
        assert_eq!(
            outcome,
            ValidationOutcome::failed(
                ViolationKind::PathBlocked,
                "H7 can't be reached since there is a piece at F5 on the path"
            )
        );
    }

    #[test]
    fn blocking_is_symmetric() {
        let board = board_with(&["a4"]);
        let up = validate_path_is_not_blocked(&board, at("a1"), at("a8"));
        let down = validate_path_is_not_blocked(&board, at("a8"), at("a1"));
        for outcome in [up, down] {
            match outcome {
                ValidationOutcome::Failed(violation) => {
                    assert!(violation.explanation.contains("piece at A4"))
                }
                ValidationOutcome::Passed => panic!("a4 should block the a-file"),
            }
        }
    }
}
