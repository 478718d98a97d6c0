//! Square-grid board representation.
//!
//! `Board` owns one `Square` per (row, column) pair of a fixed-size grid,
//! stored row-major. A board is treated as an immutable snapshot once it is
//! published by the engine: the pipeline clones it before applying a move and
//! only ever mutates that private copy.

use crate::game_state::chess_types::*;

/// A board cell and its optional occupant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    pub coordinates: Coordinates,
    pub piece: Option<Piece>,
}

impl Square {
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }
}

/// Fixed-size square grid. The size never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Empty board of `size` x `size` squares.
    pub fn new(size: usize) -> Self {
        let mut squares = Vec::with_capacity(size * size);
        for row in 0..size {
            for column in 0..size {
                squares.push(Square {
                    coordinates: Coordinates::new(row as i32, column as i32),
                    piece: None,
                });
            }
        }
        Self { size, squares }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether both axes of `coordinates` fall inside `[0, size)`.
    #[inline]
    pub fn contains(&self, coordinates: Coordinates) -> bool {
        let size = self.size as i32;
        (0..size).contains(&coordinates.row) && (0..size).contains(&coordinates.column)
    }

    #[inline]
    fn index(&self, coordinates: Coordinates) -> usize {
        debug_assert!(
            self.contains(coordinates),
            "square {coordinates} is outside a {0}x{0} board",
            self.size
        );
        coordinates.row as usize * self.size + coordinates.column as usize
    }

    /// The square at `coordinates`.
    ///
    /// Callers must have checked the coordinates are on the board; the
    /// boundary rule guarantees this for every move that reaches piece logic.
    #[inline]
    pub fn square(&self, coordinates: Coordinates) -> &Square {
        &self.squares[self.index(coordinates)]
    }

    #[inline]
    pub fn piece_at(&self, coordinates: Coordinates) -> Option<Piece> {
        self.square(coordinates).piece
    }

    /// Place (or clear, with `None`) the occupant of a square.
    #[inline]
    pub fn set_piece(&mut self, coordinates: Coordinates, piece: Option<Piece>) {
        let index = self.index(coordinates);
        self.squares[index].piece = piece;
    }

    /// Move whatever stands on `from` to `to`, discarding the previous
    /// occupant of `to`.
    pub fn relocate(&mut self, from: Coordinates, to: Coordinates) {
        let moving = self.piece_at(from);
        self.set_piece(to, moving);
        self.set_piece(from, None);
    }

    /// All squares currently holding a piece of `color`.
    pub fn squares_with_pieces(&self, color: Color) -> Vec<&Square> {
        self.squares
            .iter()
            .filter(|square| square.piece.is_some_and(|piece| piece.color == color))
            .collect()
    }

    /// The squares of one row, ordered by column.
    pub fn row(&self, row: usize) -> &[Square] {
        let start = row * self.size;
        &self.squares[start..start + self.size]
    }

    /// The squares of one column, ordered by row.
    pub fn column(&self, column: usize) -> Vec<&Square> {
        self.squares
            .iter()
            .skip(column)
            .step_by(self.size.max(1))
            .take(self.size)
            .collect()
    }

    /// Location of the first king of `color`, if that side has one.
    pub fn king_square(&self, color: Color) -> Option<Coordinates> {
        self.squares
            .iter()
            .find(|square| square.piece == Some(Piece::new(PieceKind::King, color)))
            .map(|square| square.coordinates)
    }

    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }
}
