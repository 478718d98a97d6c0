//! Plain-text board renderer.
//!
//! Creates a human-readable board view for the console runner, tests and
//! diagnostics. Piece names come from the configured name mappings: White
//! pieces are upper-cased and Black pieces lower-cased.

use crate::app_config::AppConfig;
use crate::game_state::board::{Board, Square};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::column_letter;

const EMPTY_SQUARE: &str = ".";

#[derive(Debug, Clone)]
pub struct BoardRenderer {
    config: AppConfig,
}

impl BoardRenderer {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Render the board, top row first, with the column letters underneath.
    pub fn render(&self, board: &Board) -> String {
        let mut out = String::new();
        let size = board.size();
        let label_width = size.to_string().len();

        for row in (0..size).rev() {
            let cells: Vec<String> = board
                .row(row)
                .iter()
                .map(|square| self.render_square(square))
                .collect();
            out.push_str(&format!("{:>label_width$}| {}\n", row + 1, cells.join(" ")));
        }

        let indent = " ".repeat(label_width + 2);
        let rule: Vec<&str> = vec!["-"; size];
        let letters: Vec<String> = (0..size).map(|c| column_letter(c).to_string()).collect();
        out.push_str(&format!("{indent}{}\n", rule.join(" ")));
        out.push_str(&format!("{indent}{}\n", letters.join(" ")));

        out
    }

    fn render_square(&self, square: &Square) -> String {
        match square.piece {
            Some(piece) => self.piece_name(piece),
            None => EMPTY_SQUARE.to_owned(),
        }
    }

    fn piece_name(&self, piece: Piece) -> String {
        let name = self.config.name_for(piece.kind);
        match piece.color {
            Color::White => name.to_uppercase(),
            Color::Black => name.to_lowercase(),
        }
    }
}
