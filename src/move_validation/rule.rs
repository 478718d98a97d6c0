//! The capability every rule offers to the pipeline.
//!
//! Rules come in three disjoint sets (general, piece, post-move) that differ
//! only in when the engine runs them. Each set is a closed enum implementing
//! [`Rule`], so dispatch is exhaustive and assembled once by the engine.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_validation::validation_outcome::ValidationOutcome;

pub trait Rule {
    /// Whether this rule has anything to say about `mv` on `board`.
    fn can_validate(&self, board: &Board, mv: &Move) -> bool;

    /// Judge `mv`. Only called when `can_validate` returned true.
    fn validate(&self, board: &Board, mv: &Move) -> ValidationOutcome;
}

/// First failure among the applicable rules, or `Passed`.
pub fn validate_rules<R: Rule>(rules: &[R], board: &Board, mv: &Move) -> ValidationOutcome {
    rules
        .iter()
        .filter(|rule| rule.can_validate(board, mv))
        .map(|rule| rule.validate(board, mv))
        .find(ValidationOutcome::is_failed)
        .unwrap_or(ValidationOutcome::Passed)
}
