//! Pieces on the board.
//!
//! A `Piece` carries its identity (kind and color), the square it stands on,
//! the squares it has occupied, and a few transient flags a presentation
//! layer reads (selected, dragging) or the controller sets (captured).

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::{MoveError, PieceError};
use super::types::{Color, PieceKind, Square};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
    history: Vec<Square>,
    selected: bool,
    captured: bool,
    dragging: bool,
}

impl Piece {
    /// Create a piece standing on `square`. Its history starts with that square.
    #[must_use]
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            kind,
            color,
            square,
            history: vec![square],
            selected: false,
            captured: false,
            dragging: false,
        }
    }

    /// Create a piece from raw coordinates.
    ///
    /// Fails with `InvalidArgument` if the coordinates are off the board.
    pub fn try_new(
        kind: PieceKind,
        color: Color,
        rank: usize,
        file: usize,
    ) -> Result<Self, PieceError> {
        let square = Square::new(rank, file).ok_or_else(|| PieceError::InvalidArgument {
            reason: format!("square (rank {rank}, file {file}) is off the board"),
        })?;
        Ok(Piece::new(kind, color, square))
    }

    /// Create a piece from a FEN letter (uppercase = White).
    pub fn from_fen_char(c: char, square: Square) -> Result<Self, PieceError> {
        let kind = PieceKind::from_char(c).ok_or_else(|| PieceError::InvalidArgument {
            reason: format!("unknown piece letter '{c}'"),
        })?;
        Ok(Piece::new(kind, Color::from_fen_case(c), square))
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        self.square
    }

    /// Squares occupied over time, the starting square first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Square] {
        &self.history
    }

    /// True once the piece has left its starting square
    #[inline]
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.history.len() > 1
    }

    /// Square occupied before the most recent move
    #[must_use]
    pub fn previous_square(&self) -> Option<Square> {
        let n = self.history.len();
        if n >= 2 {
            Some(self.history[n - 2])
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    #[inline]
    #[must_use]
    pub const fn is_captured(&self) -> bool {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// FEN letter for this piece
    #[inline]
    #[must_use]
    pub fn fen_char(&self) -> char {
        self.kind.to_fen_char(self.color)
    }

    /// Move to `square` and record it. Occupancy and legality are the
    /// caller's business.
    pub fn move_to(&mut self, square: Square) {
        self.square = square;
        self.history.push(square);
    }

    /// Move to raw coordinates, rejecting off-board destinations.
    pub fn try_move_to(&mut self, rank: usize, file: usize) -> Result<(), MoveError> {
        let square = Square::new(rank, file).ok_or(MoveError::OffBoard { rank, file })?;
        self.move_to(square);
        Ok(())
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub(crate) fn mark_captured(&mut self) {
        self.captured = true;
        self.selected = false;
        self.dragging = false;
    }

    /// Re-anchor the piece to the cell it is stored in without touching its
    /// history.
    pub(crate) fn place(&mut self, square: Square) {
        self.square = square;
        if self.history.is_empty() {
            self.history.push(square);
        }
    }

    /// Replace a promoting pawn: same color and history, new kind.
    pub(crate) fn promoted(&self, kind: PieceKind) -> Piece {
        Piece {
            kind,
            color: self.color,
            square: self.square,
            history: self.history.clone(),
            selected: false,
            captured: false,
            dragging: false,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
