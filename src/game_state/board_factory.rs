//! Board construction: empty boards and the standard starting position.

use crate::app_config::AppConfig;
use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{BACK_RANK, PAWN_START_OFFSET};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy)]
pub struct BoardFactory {
    board_size: usize,
}

impl BoardFactory {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            board_size: config.board_size,
        }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Empty board of the configured size.
    pub fn clear_board(&self) -> Board {
        Board::new(self.board_size)
    }

    /// Board holding the 32-piece starting arrangement.
    ///
    /// On boards wider than eight columns the pieces occupy columns A..H;
    /// White uses the bottom two rows and Black the top two.
    pub fn starting_board(&self) -> Result<Board, ChessErrors> {
        if self.board_size < BACK_RANK.len() {
            return Err(ChessErrors::BoardTooSmall(self.board_size));
        }

        let mut board = self.clear_board();
        let last_row = (self.board_size - 1) as i32;
        let offset = PAWN_START_OFFSET as i32;

        for (column, kind) in BACK_RANK.iter().enumerate() {
            let column = column as i32;
            board.set_piece(
                Coordinates::new(0, column),
                Some(Piece::new(*kind, Color::White)),
            );
            board.set_piece(
                Coordinates::new(offset, column),
                Some(Piece::new(PieceKind::Pawn, Color::White)),
            );
            board.set_piece(
                Coordinates::new(last_row - offset, column),
                Some(Piece::new(PieceKind::Pawn, Color::Black)),
            );
            board.set_piece(
                Coordinates::new(last_row, column),
                Some(Piece::new(*kind, Color::Black)),
            );
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::BoardFactory;
    use crate::app_config::AppConfig;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::*;

    fn at(notation: &str) -> Coordinates {
        Coordinates::of(notation).expect("test square should parse")
    }

    #[test]
    fn starting_board_has_thirty_two_pieces() {
        let board = BoardFactory::new(&AppConfig::default())
            .starting_board()
            .expect("8x8 board should hold the starting position");

        assert_eq!(board.squares_with_pieces(Color::White).len(), 16);
        assert_eq!(board.squares_with_pieces(Color::Black).len(), 16);
        assert_eq!(
            board.piece_at(at("e1")),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(at("d8")),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(
            board.piece_at(at("g7")),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(board.piece_at(at("e4")), None);
    }

    #[test]
    fn larger_boards_put_black_on_the_top_rows() {
        let config = AppConfig {
            board_size: 10,
            ..AppConfig::default()
        };
        let board = BoardFactory::new(&config)
            .starting_board()
            .expect("10x10 board should hold the starting position");

        assert_eq!(
            board.piece_at(at("a10")),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        assert_eq!(
            board.piece_at(at("a9")),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(board.piece_at(at("i1")), None);
    }

    #[test]
    fn small_boards_cannot_hold_the_starting_position() {
        let config = AppConfig {
            board_size: 6,
            ..AppConfig::default()
        };
        let factory = BoardFactory::new(&config);
        assert_eq!(factory.clear_board().size(), 6);
        assert!(matches!(
            factory.starting_board(),
            Err(ChessErrors::BoardTooSmall(6))
        ));
    }
}
