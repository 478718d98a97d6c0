//! Canonical chess-rule constants.
//!
//! Board dimensions and the standard starting arrangement used by the board
//! factory.

use crate::game_state::chess_types::PieceKind;

/// Board size of standard chess.
pub const STANDARD_BOARD_SIZE: usize = 8;

/// Back rank from column A to column H, identical for both sides.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Row on which pawns of each side start, counted from that side's back rank.
pub const PAWN_START_OFFSET: usize = 1;
