//! Move validation pipeline.
//!
//! One run per move request:
//! `GENERAL -> PIECE -> APPLY (on a private copy) -> POST_MOVE -> commit | reject`.
//!
//! The caller's board is only ever read. Applying the move happens on a
//! clone, which becomes the returned position on success and is dropped on
//! rejection.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_validation::general_rules::GeneralRule;
use crate::move_validation::piece_rules::PieceRule;
use crate::move_validation::post_move_rules::PostMoveRule;
use crate::move_validation::rule::{validate_rules, Rule};
use crate::move_validation::validation_outcome::{RuleViolation, ValidationOutcome};

/// Rule sets fixed at construction; the engine holds no other state and can
/// be shared freely between threads working on independent boards.
#[derive(Debug, Clone)]
pub struct GameEngine {
    general_rules: Vec<GeneralRule>,
    piece_rules: Vec<PieceRule>,
    post_move_rules: Vec<PostMoveRule>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            general_rules: GeneralRule::ALL.to_vec(),
            piece_rules: PieceRule::ALL.to_vec(),
            post_move_rules: PostMoveRule::ALL.to_vec(),
        }
    }

    /// Validate `mv` against `board` and return the resulting position.
    pub fn perform_move(&self, board: &Board, mv: &Move) -> Result<Board, RuleViolation> {
        self.run_stage("general", &self.general_rules, board, mv)?;

        if !self.piece_rules.iter().any(|rule| rule.can_validate(board, mv)) {
            tracing::warn!(%mv, "no piece rule applies to the moving piece");
        }
        self.run_stage("piece", &self.piece_rules, board, mv)?;

        let position = apply_move(board, mv);
        self.run_stage("post_move", &self.post_move_rules, &position, mv)?;

        tracing::debug!(%mv, "move committed");
        Ok(position)
    }

    /// Run the full pipeline and discard the resulting position.
    pub fn validate_move(&self, board: &Board, mv: &Move) -> ValidationOutcome {
        match self.perform_move(board, mv) {
            Ok(_) => ValidationOutcome::Passed,
            Err(violation) => ValidationOutcome::Failed(violation),
        }
    }

    fn run_stage<R: Rule>(
        &self,
        stage: &'static str,
        rules: &[R],
        board: &Board,
        mv: &Move,
    ) -> Result<(), RuleViolation> {
        validate_rules(rules, board, mv).into_result().map_err(|violation| {
            tracing::debug!(stage, %mv, kind = ?violation.kind, "move rejected: {violation}");
            violation
        })
    }
}

/// Copy of `board` with the piece on `mv.from` moved to `mv.to`; whatever
/// stood on `mv.to` is captured.
fn apply_move(board: &Board, mv: &Move) -> Board {
    let mut position = board.clone();
    position.relocate(mv.from, mv.to);
    position
}

#[cfg(test)]
mod tests {
    use super::GameEngine;
    use crate::game_state::chess_types::*;
    use crate::move_validation::test_support::*;
    use crate::move_validation::validation_outcome::{ValidationOutcome, ViolationKind};

    #[test]
    fn accepted_move_relocates_the_piece() {
        let mut board = clear_board();
        place(&mut board, "e4", PieceKind::Bishop, Color::White);
        place(&mut board, "h7", PieceKind::Knight, Color::Black);

        let after = GameEngine::new()
            .perform_move(&board, &mv(Color::White, "e4", "h7"))
            .expect("bishop capture should be legal");

        assert_eq!(after.piece_at(at("e4")), None);
        assert_eq!(
            after.piece_at(at("h7")),
            Some(Piece::new(PieceKind::Bishop, Color::White))
        );
        assert_eq!(after.squares_with_pieces(Color::Black).len(), 0);
        assert_eq!(
            board.piece_at(at("h7")),
            Some(Piece::new(PieceKind::Knight, Color::Black))
        );
    }

    #[test]
    fn pinned_piece_cannot_expose_the_king() {
        let mut board = clear_board();
        place(&mut board, "e4", PieceKind::King, Color::White);
        place(&mut board, "a8", PieceKind::Bishop, Color::Black);
        place(&mut board, "c6", PieceKind::Pawn, Color::White);

        let before = board.clone();
        let violation = GameEngine::new()
            .perform_move(&board, &mv(Color::White, "c6", "c7"))
            .expect_err("pawn is pinned");
        assert_eq!(violation.kind, ViolationKind::SelfCheck);
        assert_eq!(violation.to_string(), "The WHITE King is under attack!");
        assert_eq!(board, before);
    }

    #[test]
    fn checked_side_must_answer_the_check() {
        for (attacker, square) in [
            (PieceKind::Pawn, "d5"),
            (PieceKind::Knight, "f6"),
            (PieceKind::Bishop, "a8"),
            (PieceKind::Rook, "e1"),
            (PieceKind::Queen, "h4"),
            (PieceKind::King, "f5"),
        ] {
            let mut board = clear_board();
            place(&mut board, "e4", PieceKind::King, Color::White);
            place(&mut board, square, attacker, Color::Black);
            place(&mut board, "a2", PieceKind::Pawn, Color::White);

            let violation = GameEngine::new()
                .perform_move(&board, &mv(Color::White, "a2", "a3"))
                .expect_err("king is left in check");
            assert_eq!(violation.kind, ViolationKind::SelfCheck, "{attacker:?} on {square}");
        }
    }

    #[test]
    fn king_cannot_slide_along_an_attacked_line() {
        let mut board = clear_board();
        place(&mut board, "e4", PieceKind::King, Color::White);
        place(&mut board, "a4", PieceKind::Rook, Color::Black);

        // The king hides f4 from the rook until it has moved there.
        let violation = GameEngine::new()
            .perform_move(&board, &mv(Color::White, "e4", "f4"))
            .expect_err("f4 is on the rook's row");
        assert_eq!(violation.kind, ViolationKind::SelfCheck);
    }

    #[test]
    fn king_defended_by_its_king_cannot_be_approached() {
        let mut board = clear_board();
        place(&mut board, "e4", PieceKind::King, Color::White);
        place(&mut board, "f5", PieceKind::Bishop, Color::Black);
        place(&mut board, "g6", PieceKind::King, Color::Black);

        let violation = GameEngine::new()
            .perform_move(&board, &mv(Color::White, "e4", "f5"))
            .expect_err("bishop is defended by the black king");
        assert_eq!(violation.kind, ViolationKind::SelfCheck);
    }

    #[test]
    fn validate_move_reports_without_returning_a_board() {
        let board = clear_board();
        let outcome = GameEngine::new().validate_move(&board, &mv(Color::White, "e2", "e4"));
        assert!(matches!(
            outcome,
            ValidationOutcome::Failed(ref violation) if violation.kind == ViolationKind::EmptyOrigin
        ));
    }
}
