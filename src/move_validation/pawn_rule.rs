//! Pawn movement law.
//!
//! Straight moves go one row forward, or two from the starting row, onto an
//! empty square with a clear path. Captures go exactly one square diagonally
//! forward onto an occupied square. No en-passant and no promotion.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::PAWN_START_OFFSET;
use crate::game_state::chess_types::*;
use crate::move_validation::path_clearance::validate_path_is_not_blocked;
use crate::move_validation::piece_rules::Destination;
use crate::move_validation::position_diff::PositionDiff;
use crate::move_validation::validation_outcome::{ValidationOutcome, ViolationKind};

const CAPTURE_COLUMN_DISTANCE: i32 = 1;
const DOUBLE_STEP: i32 = 2;

pub fn validate_pawn_move(board: &Board, mv: &Move, destination: Destination) -> ValidationOutcome {
    match destination {
        Destination::Occupied => validate_capture(mv),
        Destination::Empty => validate_advance(board, mv),
    }
}

fn validate_capture(mv: &Move) -> ValidationOutcome {
    let diff = PositionDiff::of_move(mv);
    if diff.abs_column_delta() == CAPTURE_COLUMN_DISTANCE && diff.row_delta == mv.color.forward() {
        ValidationOutcome::Passed
    } else {
        ValidationOutcome::failed(
            ViolationKind::IllegalPieceGeometry,
            format!(
                "Pawn located at {} can't capture a piece at {} because it's not located 1 square diagonally to the pawn's direction",
                mv.from, mv.to
            ),
        )
    }
}

fn validate_advance(board: &Board, mv: &Move) -> ValidationOutcome {
    let diff = PositionDiff::of_move(mv);
    if !diff.is_same_column() {
        return ValidationOutcome::failed(
            ViolationKind::IllegalPieceGeometry,
            format!("Pawn at {} can be moved vertically only.", mv.from),
        );
    }

    let forward = mv.color.forward();
    let single = diff.row_delta == forward;
    let double = diff.row_delta == forward * DOUBLE_STEP
        && mv.from.row == starting_row(mv.color, board.size());

    if single || double {
        validate_path_is_not_blocked(board, mv.from, mv.to)
    } else {
        ValidationOutcome::failed(
            ViolationKind::IllegalPieceGeometry,
            format!("{} pawn on {} is not allowed to move to {}", mv.color, mv.from, mv.to),
        )
    }
}

fn starting_row(color: Color, board_size: usize) -> i32 {
    match color {
        Color::White => PAWN_START_OFFSET as i32,
        Color::Black => board_size as i32 - 1 - PAWN_START_OFFSET as i32,
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::*;
    use crate::move_validation::piece_rules::PieceRule;
    use crate::move_validation::rule::Rule;
    use crate::move_validation::test_support::*;
    use crate::move_validation::validation_outcome::ViolationKind;

    #[test]
    fn captures_one_square_diagonally_forward() {
        for (color, from, to) in [
            (Color::White, "e4", "f5"),
            (Color::White, "e4", "d5"),
            (Color::Black, "e4", "f3"),
            (Color::Black, "e4", "d3"),
        ] {
            let mut board = clear_board();
            place(&mut board, from, PieceKind::Pawn, color);
            place(&mut board, to, PieceKind::Knight, color.opposite());
            assert!(
                PieceRule::Pawn.validate(&board, &mv(color, from, to)).is_passed(),
                "{color} {from}x{to} should be legal"
            );
        }
    }

    #[test]
    fn rejects_captures_in_the_wrong_direction_or_too_far() {
        for (color, from, to) in [
            (Color::Black, "e4", "f5"),
            (Color::White, "e4", "d3"),
            (Color::White, "e4", "f6"),
            (Color::White, "e4", "g5"),
            (Color::White, "e4", "g6"),
            (Color::White, "e4", "e5"),
        ] {
            let mut board = clear_board();
            place(&mut board, from, PieceKind::Pawn, color);
            place(&mut board, to, PieceKind::Knight, color.opposite());
            let (kind, explanation) =
                failure(PieceRule::Pawn.validate(&board, &mv(color, from, to)));
            assert_eq!(kind, ViolationKind::IllegalPieceGeometry);
            assert_eq!(
                explanation,
                format!(
                    "Pawn located at {} can't capture a piece at {} because it's not located 1 square diagonally to the pawn's direction",
                    at(from),
                    at(to)
                )
            );
        }
    }

    #[test]
    fn advances_one_or_two_from_the_starting_row() {
        for (color, from, to) in [
            (Color::White, "e2", "e3"),
            (Color::White, "e2", "e4"),
            (Color::Black, "e7", "e6"),
            (Color::Black, "e7", "e5"),
        ] {
            let mut board = clear_board();
            place(&mut board, from, PieceKind::Pawn, color);
            assert!(PieceRule::Pawn.validate(&board, &mv(color, from, to)).is_passed());
        }
    }

    #[test]
    fn rejects_double_step_away_from_the_starting_row() {
        let mut board = clear_board();
        place(&mut board, "e4", PieceKind::Pawn, Color::White);
        let (kind, explanation) =
            failure(PieceRule::Pawn.validate(&board, &mv(Color::White, "e4", "e6")));
        assert_eq!(kind, ViolationKind::IllegalPieceGeometry);
        assert_eq!(explanation, "WHITE pawn on E4 is not allowed to move to E6");
    }

    #[test]
    fn rejects_backward_and_sideways_advances() {
        let mut board = clear_board();
        place(&mut board, "e4", PieceKind::Pawn, Color::Black);

        let (_, explanation) =
            failure(PieceRule::Pawn.validate(&board, &mv(Color::Black, "e4", "e5")));
        assert_eq!(explanation, "BLACK pawn on E4 is not allowed to move to E5");

        for to in ["d4", "f4", "f5", "d3"] {
            let (_, explanation) =
                failure(PieceRule::Pawn.validate(&board, &mv(Color::Black, "e4", to)));
            assert_eq!(explanation, "Pawn at E4 can be moved vertically only.");
        }
    }

    #[test]
    fn double_step_needs_a_clear_path() {
        for (color, from, to, blocker) in [
            (Color::White, "e2", "e4", "e3"),
            (Color::Black, "e7", "e5", "e6"),
        ] {
            let mut board = clear_board();
            place(&mut board, from, PieceKind::Pawn, color);
            place(&mut board, blocker, PieceKind::Knight, color.opposite());
            let (kind, explanation) =
                failure(PieceRule::Pawn.validate(&board, &mv(color, from, to)));
            assert_eq!(kind, ViolationKind::PathBlocked);
            assert_eq!(
                explanation,
                format!(
                    "{} can't be reached since there is a piece at {} on the path",
                    at(to),
                    at(blocker)
                )
            );
        }
    }

    #[test]
    fn black_starting_row_follows_the_board_size() {
        let mut board = crate::game_state::board::Board::new(10);
        place(&mut board, "c9", PieceKind::Pawn, Color::Black);
        assert!(PieceRule::Pawn
            .validate(&board, &mv(Color::Black, "c9", "c7"))
            .is_passed());
    }
}
