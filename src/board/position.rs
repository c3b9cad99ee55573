use super::error::SquareError;
use super::piece::Piece;
use super::types::{Color, MoveRecord, PieceKind, Square};

/// The board: an 8x8 grid of optional pieces plus the move log and the
/// captured-piece lists.
///
/// The grid is the sole owner of the pieces standing on it. Every occupied
/// cell holds a piece whose `square()` equals that cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub(crate) grid: [[Option<Piece>; 8]; 8], // [rank][file]
    pub(crate) move_log: Vec<MoveRecord>,
    pub(crate) captured: [Vec<Piece>; 2], // by color of the captured piece
}

impl Position {
    /// An empty board with no history.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Piece on `square`, if any
    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.grid[square.rank()][square.file()].as_ref()
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.grid[square.rank()][square.file()].as_mut()
    }

    /// Piece at raw coordinates.
    ///
    /// Fails with `OutOfBounds` when either coordinate is outside 0-7.
    pub fn get_at(&self, rank: usize, file: usize) -> Result<Option<&Piece>, SquareError> {
        let square = Square::try_from((rank, file))?;
        Ok(self.get(square))
    }

    /// Write a cell, returning its previous occupant.
    ///
    /// A placed piece is re-anchored to `square`.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        let piece = piece.map(|mut p| {
            p.place(square);
            p
        });
        std::mem::replace(&mut self.grid[square.rank()][square.file()], piece)
    }

    /// Write a cell at raw coordinates, rejecting off-board ones.
    pub fn set_at(
        &mut self,
        rank: usize,
        file: usize,
        piece: Option<Piece>,
    ) -> Result<Option<Piece>, SquareError> {
        let square = Square::try_from((rank, file))?;
        Ok(self.set(square, piece))
    }

    /// Remove and return the occupant of `square`
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.grid[square.rank()][square.file()].take()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    /// Color and kind on `square`, if occupied
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, PieceKind)> {
        self.get(square).map(|p| (p.color(), p.kind()))
    }

    /// All pieces on the board, rank 1 first
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.grid.iter().flatten().flatten()
    }

    /// Pieces of one color, rank 1 first
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// Number of pieces on the board
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Every occupied square with its color and kind, a1..h8
    #[must_use]
    pub fn placement(&self) -> Vec<(Square, Color, PieceKind)> {
        self.pieces()
            .map(|p| (p.square(), p.color(), p.kind()))
            .collect()
    }

    #[must_use]
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    #[must_use]
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.move_log.last().copied()
    }

    /// Captured pieces of `color`, in capture order
    #[must_use]
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    pub(crate) fn record_move(&mut self, record: MoveRecord) {
        self.move_log.push(record);
    }

    pub(crate) fn record_capture(&mut self, mut piece: Piece) {
        piece.mark_captured();
        self.captured[piece.color().index()].push(piece);
    }

    /// Clear the grid, the move log and the captured lists
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check the grid invariant: each piece reports the cell it is stored in.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        Square::all().all(|sq| self.get(sq).map_or(true, |p| p.square() == sq))
    }
}
