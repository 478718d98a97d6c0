//! Reads move lists from text files or streams.
//!
//! One move per line, written as two algebraic squares: `e2e4`, `e2 e4` or
//! `e2-e4`. Blank lines are skipped and `#` starts a comment. Colors are not
//! written in the file; they alternate starting with White.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::parse_coordinates;

const COMMENT_MARKER: char = '#';

pub fn read_moves_from_path(path: impl AsRef<Path>) -> Result<Vec<Move>, ChessErrors> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ChessErrors::MoveFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let moves = read_moves(BufReader::new(file))?;
    tracing::info!(path = %path.display(), count = moves.len(), "moves read");
    Ok(moves)
}

pub fn read_moves(reader: impl BufRead) -> Result<Vec<Move>, ChessErrors> {
    let mut moves = Vec::new();
    let mut color = Color::White;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.split(COMMENT_MARKER).next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let (from, to) = parse_move_text(content).ok_or_else(|| ChessErrors::InvalidMoveLine {
            line_number: index + 1,
            line: line.clone(),
        })?;
        moves.push(Move::new(color, from, to));
        color = color.opposite();
    }

    Ok(moves)
}

fn parse_move_text(content: &str) -> Option<(Coordinates, Coordinates)> {
    let squares: Vec<&str> = content
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect();

    match squares.as_slice() {
        [from, to] => Some((parse_coordinates(from).ok()?, parse_coordinates(to).ok()?)),
        [joined] => split_joined(joined),
        _ => None,
    }
}

/// Split `e2e4` (or `a10a12` on larger boards) at the second letter.
fn split_joined(joined: &str) -> Option<(Coordinates, Coordinates)> {
    let split_at = joined
        .char_indices()
        .skip(1)
        .find(|(_, c)| c.is_ascii_alphabetic())
        .map(|(index, _)| index)?;
    let (from, to) = joined.split_at(split_at);
    Some((parse_coordinates(from).ok()?, parse_coordinates(to).ok()?))
}
