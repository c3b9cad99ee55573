//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, PieceKind, PositionBuilder, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let position = PositionBuilder::new()
//!     .piece(e1, Color::White, PieceKind::King)
//!     .piece(e8, Color::Black, PieceKind::King)
//!     .build();
//! assert_eq!(position.piece_count(), 2);
//! ```

use super::piece::Piece;
use super::position::Position;
use super::types::{Color, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug, Default)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, PieceKind)>,
}

impl PositionBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder holding the standard two-army layout.
    ///
    /// `bottom` is the color placed on ranks 1 and 2; the other army takes
    /// ranks 7 and 8. Files are the same for both armies (queens on d,
    /// kings on e), so with `Color::White` at the bottom this is the
    /// ordinary starting position.
    #[must_use]
    pub fn starting_position(bottom: Color) -> Self {
        let top = bottom.opponent();
        let mut builder = Self::new();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            builder.push(0, file, bottom, kind);
            builder.push(7, file, top, kind);
        }
        for file in 0..8 {
            builder.push(1, file, bottom, PieceKind::Pawn);
            builder.push(6, file, top, PieceKind::Pawn);
        }
        builder
    }

    fn push(&mut self, rank: usize, file: usize, color: Color, kind: PieceKind) {
        if let Some(square) = Square::new(rank, file) {
            self.pieces.push((square, color, kind));
        }
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Build the position. Every piece starts unmoved.
    #[must_use]
    pub fn build(self) -> Position {
        let mut position = Position::empty();
        for (square, color, kind) in self.pieces {
            position.set(square, Some(Piece::new(kind, color, square)));
        }
        position
    }
}
