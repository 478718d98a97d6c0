//! Piece movement rules, one variant per piece kind.
//!
//! A piece rule applies when the origin square holds a piece of its kind and
//! judges whether that piece's movement law reaches the destination given the
//! current occupancy. General rules (bounds, colors, own captures) have
//! already run by the time a piece rule is asked.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_validation::bishop_rule::validate_bishop_move;
use crate::move_validation::king_rule::validate_king_move;
use crate::move_validation::knight_rule::validate_knight_move;
use crate::move_validation::pawn_rule::validate_pawn_move;
use crate::move_validation::queen_rule::validate_queen_move;
use crate::move_validation::rook_rule::validate_rook_move;
use crate::move_validation::rule::Rule;
use crate::move_validation::validation_outcome::ValidationOutcome;

/// How a rule should treat the destination square.
///
/// The attack oracle asks whether a piece could capture on a square that may
/// currently be empty, so it evaluates with `Occupied` regardless of the
/// board. Only the pawn rule distinguishes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Empty,
    Occupied,
}

impl Destination {
    #[inline]
    pub fn on_board(board: &Board, to: Coordinates) -> Self {
        if board.square(to).is_occupied() {
            Destination::Occupied
        } else {
            Destination::Empty
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceRule {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceRule {
    pub const ALL: [PieceRule; 6] = [
        PieceRule::Pawn,
        PieceRule::Knight,
        PieceRule::Bishop,
        PieceRule::Rook,
        PieceRule::Queen,
        PieceRule::King,
    ];

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            PieceRule::Pawn => PieceKind::Pawn,
            PieceRule::Knight => PieceKind::Knight,
            PieceRule::Bishop => PieceKind::Bishop,
            PieceRule::Rook => PieceKind::Rook,
            PieceRule::Queen => PieceKind::Queen,
            PieceRule::King => PieceKind::King,
        }
    }

    /// Judge `mv` with an explicit view of the destination square.
    pub fn evaluate(self, board: &Board, mv: &Move, destination: Destination) -> ValidationOutcome {
        match self {
            PieceRule::Pawn => validate_pawn_move(board, mv, destination),
            PieceRule::Knight => validate_knight_move(mv),
            PieceRule::Bishop => validate_bishop_move(board, mv),
            PieceRule::Rook => validate_rook_move(board, mv),
            PieceRule::Queen => validate_queen_move(board, mv),
            PieceRule::King => validate_king_move(board, mv),
        }
    }
}

impl Rule for PieceRule {
    fn can_validate(&self, board: &Board, mv: &Move) -> bool {
        board
            .piece_at(mv.from)
            .is_some_and(|piece| piece.kind == self.kind())
    }

    fn validate(&self, board: &Board, mv: &Move) -> ValidationOutcome {
        self.evaluate(board, mv, Destination::on_board(board, mv.to))
    }
}
