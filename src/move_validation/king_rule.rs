//! King movement law: one square in any direction, never onto an attacked
//! square. A defended piece therefore cannot be captured by the king.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_validation::attack_oracle::is_square_attacked_excluding;
use crate::move_validation::position_diff::PositionDiff;
use crate::move_validation::validation_outcome::{ValidationOutcome, ViolationKind};

pub const KING_MOVE_DISTANCE: i32 = 1;

/// One-step king move onto a square the opponent does not attack.
///
/// Attacks are read from `board` as it stands, with the king still on
/// `mv.from`. A line attack that only the king's own origin square blocks
/// (rook on a4, king e4 -> f4) passes here; the post-move king-in-check rule
/// rejects it once the move has been applied.
pub fn validate_king_move(board: &Board, mv: &Move) -> ValidationOutcome {
    let diff = PositionDiff::of_move(mv);

    if diff.chebyshev_distance() != KING_MOVE_DISTANCE {
        return ValidationOutcome::failed(
            ViolationKind::IllegalPieceGeometry,
            format!(
                "The king at {} can't move to {} since it's too far away",
                mv.from, mv.to
            ),
        );
    }

    // The piece being captured must not defend its own square.
    if is_square_attacked_excluding(board, mv.to, mv.color.opposite(), Some(mv.to)) {
        ValidationOutcome::failed(
            ViolationKind::SelfCheck,
            format!(
                "The king at {} can't move to {} since it will be under attack",
                mv.from, mv.to
            ),
        )
    } else {
        ValidationOutcome::Passed
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::*;
    use crate::move_validation::game_engine::GameEngine;
    use crate::move_validation::piece_rules::PieceRule;
    use crate::move_validation::rule::Rule;
    use crate::move_validation::test_support::*;
    use crate::move_validation::validation_outcome::ViolationKind;

    #[test]
    fn captures_undefended_pieces_in_every_direction() {
        for to in ["e5", "f4", "d4", "e3", "f5", "d5", "f3", "d3"] {
            let mut board = clear_board();
            place(&mut board, "e4", PieceKind::King, Color::White);
            place(&mut board, to, PieceKind::Bishop, Color::Black);
            assert!(
                PieceRule::King
                    .validate(&board, &mv(Color::White, "e4", to))
                    .is_passed(),
                "Ke4x{to} should be legal"
            );
        }
    }

    #[test]
    fn refuses_targets_beyond_one_square() {
        for to in ["e6", "g4", "c4", "e2", "g6", "c6", "g2", "c2", "f6", "g5"] {
            let mut board = clear_board();
            place(&mut board, "e4", PieceKind::King, Color::White);
            let (kind, explanation) =
                failure(PieceRule::King.validate(&board, &mv(Color::White, "e4", to)));
            assert_eq!(kind, ViolationKind::IllegalPieceGeometry);
            assert_eq!(
                explanation,
                format!("The king at E4 can't move to {} since it's too far away", at(to))
            );
        }
    }

    #[test]
    fn refuses_to_capture_defended_pieces() {
        for (defender, square) in [
            (PieceKind::Pawn, "g6"),
            (PieceKind::Knight, "g7"),
            (PieceKind::Bishop, "c8"),
            (PieceKind::Rook, "f8"),
            (PieceKind::Queen, "h5"),
            (PieceKind::King, "g6"),
        ] {
            let mut board = clear_board();
            place(&mut board, "e4", PieceKind::King, Color::White);
            place(&mut board, "f5", PieceKind::Bishop, Color::Black);
            place(&mut board, square, defender, Color::Black);

            let (kind, explanation) =
                failure(PieceRule::King.validate(&board, &mv(Color::White, "e4", "f5")));
            assert_eq!(kind, ViolationKind::SelfCheck, "{defender:?} on {square}");
            assert_eq!(
                explanation,
                "The king at E4 can't move to F5 since it will be under attack"
            );
        }
    }

    #[test]
    fn refuses_empty_squares_covered_by_a_pawn() {
        let mut board = clear_board();
        place(&mut board, "e4", PieceKind::King, Color::White);
        place(&mut board, "d6", PieceKind::Pawn, Color::Black);

        let (kind, _) = failure(PieceRule::King.validate(&board, &mv(Color::White, "e4", "e5")));
        assert_eq!(kind, ViolationKind::SelfCheck);
        assert!(PieceRule::King
            .validate(&board, &mv(Color::White, "e4", "d5"))
            .is_passed());
    }

    #[test]
    fn refuses_to_step_next_to_the_other_king() {
        let mut board = clear_board();
        place(&mut board, "e4", PieceKind::King, Color::White);
        place(&mut board, "e6", PieceKind::King, Color::Black);

        let (kind, _) = failure(PieceRule::King.validate(&board, &mv(Color::White, "e4", "e5")));
        assert_eq!(kind, ViolationKind::SelfCheck);
        assert!(PieceRule::King
            .validate(&board, &mv(Color::White, "e4", "e3"))
            .is_passed());
    }

    #[test]
    fn attacks_through_the_origin_square_are_left_to_the_post_move_check() {
        let mut board = clear_board();
        place(&mut board, "e4", PieceKind::King, Color::White);
        place(&mut board, "a4", PieceKind::Rook, Color::Black);
        let request = mv(Color::White, "e4", "f4");

        assert!(PieceRule::King.validate(&board, &request).is_passed());

        let violation = GameEngine::new()
            .perform_move(&board, &request)
            .expect_err("f4 stays on the rook's row");
        assert_eq!(violation.kind, ViolationKind::SelfCheck);
        assert_eq!(violation.explanation, "The WHITE King is under attack!");
    }
}
