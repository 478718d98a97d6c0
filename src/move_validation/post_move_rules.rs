//! Rules judged on the position after the move was tentatively applied.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_validation::attack_oracle::{attackers_to_square, is_king_in_check};
use crate::move_validation::rule::Rule;
use crate::move_validation::validation_outcome::{ValidationOutcome, ViolationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostMoveRule {
    /// The mover may not end the move with their own king attacked.
    KingInCheck,
}

impl PostMoveRule {
    pub const ALL: [PostMoveRule; 1] = [PostMoveRule::KingInCheck];
}

impl Rule for PostMoveRule {
    fn can_validate(&self, _board: &Board, _mv: &Move) -> bool {
        true
    }

    fn validate(&self, board: &Board, mv: &Move) -> ValidationOutcome {
        match self {
            PostMoveRule::KingInCheck => validate_king_not_in_check(board, mv),
        }
    }
}

fn validate_king_not_in_check(board: &Board, mv: &Move) -> ValidationOutcome {
    if !is_king_in_check(board, mv.color) {
        return ValidationOutcome::Passed;
    }

    if let Some(king) = board.king_square(mv.color) {
        tracing::debug!(
            %king,
            attackers = ?attackers_to_square(board, king, mv.color.opposite()),
            "move leaves the king attacked"
        );
    }
    ValidationOutcome::failed(
        ViolationKind::SelfCheck,
        format!("The {} King is under attack!", mv.color),
    )
}
