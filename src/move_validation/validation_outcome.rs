//! Pass/fail results produced by every rule.
//!
//! A failed rule always carries a [`RuleViolation`]: the kind of violation
//! plus the explanation shown to the player. The pipeline stops at the first
//! violation of a stage and hands it back unchanged.

use thiserror::Error;

/// Category of a rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// A coordinate lies outside the board.
    OutOfBounds,
    /// There is no piece on the origin square.
    EmptyOrigin,
    /// The origin piece belongs to the other player.
    WrongMover,
    /// The destination holds one of the mover's own pieces.
    OwnCapture,
    /// The destination holds the opponent's king.
    KingCapture,
    /// The piece cannot reach the destination by its movement law.
    IllegalPieceGeometry,
    /// A sliding piece's path is occupied before the destination.
    PathBlocked,
    /// The move leaves, or puts, the mover's king under attack.
    SelfCheck,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{explanation}")]
pub struct RuleViolation {
    pub kind: ViolationKind,
    pub explanation: String,
}

impl RuleViolation {
    pub fn new(kind: ViolationKind, explanation: impl Into<String>) -> Self {
        Self {
            kind,
            explanation: explanation.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Passed,
    Failed(RuleViolation),
}

impl ValidationOutcome {
    #[inline]
    pub fn failed(kind: ViolationKind, explanation: impl Into<String>) -> Self {
        ValidationOutcome::Failed(RuleViolation::new(kind, explanation))
    }

    #[inline]
    pub fn is_passed(&self) -> bool {
        matches!(self, ValidationOutcome::Passed)
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        !self.is_passed()
    }

    pub fn into_result(self) -> Result<(), RuleViolation> {
        match self {
            ValidationOutcome::Passed => Ok(()),
            ValidationOutcome::Failed(violation) => Err(violation),
        }
    }
}
