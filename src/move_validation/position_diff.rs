//! Geometric relationship between two coordinates.
//!
//! Deltas are signed `to - from`, so a positive row delta points towards
//! Black's side of the board.

use crate::game_state::chess_types::{Coordinates, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionDiff {
    pub row_delta: i32,
    pub column_delta: i32,
}

impl PositionDiff {
    #[inline]
    pub fn new(from: Coordinates, to: Coordinates) -> Self {
        Self {
            row_delta: to.row - from.row,
            column_delta: to.column - from.column,
        }
    }

    #[inline]
    pub fn of_move(mv: &Move) -> Self {
        Self::new(mv.from, mv.to)
    }

    #[inline]
    pub fn abs_row_delta(&self) -> i32 {
        self.row_delta.abs()
    }

    #[inline]
    pub fn abs_column_delta(&self) -> i32 {
        self.column_delta.abs()
    }

    #[inline]
    pub fn is_same_row(&self) -> bool {
        self.row_delta == 0
    }

    #[inline]
    pub fn is_same_column(&self) -> bool {
        self.column_delta == 0
    }

    /// Same row or same column. A zero-length diff counts, and is rejected
    /// by the callers that care.
    #[inline]
    pub fn is_on_line(&self) -> bool {
        self.is_same_row() || self.is_same_column()
    }

    #[inline]
    pub fn is_on_diagonal(&self) -> bool {
        self.abs_row_delta() == self.abs_column_delta()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.row_delta == 0 && self.column_delta == 0
    }

    /// Larger of the two absolute deltas (king distance).
    #[inline]
    pub fn chebyshev_distance(&self) -> i32 {
        self.abs_row_delta().max(self.abs_column_delta())
    }

    /// Unit step `(row, column)` with each axis in `{-1, 0, 1}`.
    #[inline]
    pub fn step(&self) -> (i32, i32) {
        (self.row_delta.signum(), self.column_delta.signum())
    }
}
