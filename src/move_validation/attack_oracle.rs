//! Square-under-attack detection.
//!
//! A square is attacked by a color when at least one piece of that color
//! could legally capture a piece placed on it. For every attacker the oracle
//! synthesizes the capturing move and asks the piece rules, treating the
//! target as occupied. Nothing is ever applied to the board.
//!
//! Kings are the exception: an attacking king is judged by adjacency alone.
//! Asking the full king rule would ask this oracle again about the king's own
//! safety, and two adjacent kings would then recurse without end.

use crate::game_state::board::{Board, Square};
use crate::game_state::chess_types::*;
use crate::move_validation::piece_rules::{Destination, PieceRule};
use crate::move_validation::position_diff::PositionDiff;
use crate::move_validation::rule::Rule;

const KING_REACH: i32 = 1;

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_square) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_square, color.opposite())
}

#[inline]
pub fn is_square_attacked(board: &Board, target: Coordinates, attacker_color: Color) -> bool {
    is_square_attacked_excluding(board, target, attacker_color, None)
}

/// Like [`is_square_attacked`], ignoring whatever stands on `excluded`.
///
/// The king rule excludes the piece it is about to capture, which would
/// otherwise count as attacking its own square.
pub fn is_square_attacked_excluding(
    board: &Board,
    target: Coordinates,
    attacker_color: Color,
    excluded: Option<Coordinates>,
) -> bool {
    let attacked = board
        .squares_with_pieces(attacker_color)
        .into_iter()
        .filter(|square| Some(square.coordinates) != excluded)
        .any(|square| can_capture_on(board, square, target));

    tracing::trace!(%target, %attacker_color, attacked, "attack query");
    attacked
}

/// Origins of every `attacker_color` piece that could capture on `target`.
pub fn attackers_to_square(
    board: &Board,
    target: Coordinates,
    attacker_color: Color,
) -> Vec<Coordinates> {
    board
        .squares_with_pieces(attacker_color)
        .into_iter()
        .filter(|square| can_capture_on(board, square, target))
        .map(|square| square.coordinates)
        .collect()
}

fn can_capture_on(board: &Board, attacker: &Square, target: Coordinates) -> bool {
    let Some(piece) = attacker.piece else {
        return false;
    };
    if attacker.coordinates == target {
        return false;
    }

    let capture = Move::new(piece.color, attacker.coordinates, target);
    PieceRule::ALL
        .into_iter()
        .filter(|rule| rule.can_validate(board, &capture))
        .any(|rule| match rule {
            PieceRule::King => PositionDiff::of_move(&capture).chebyshev_distance() == KING_REACH,
            _ => rule.evaluate(board, &capture, Destination::Occupied).is_passed(),
        })
}
