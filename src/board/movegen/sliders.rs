use super::super::piece::Piece;
use super::super::position::Position;
use super::super::tables::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::types::{Color, Square, SquareSet};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl Position {
    pub(crate) fn generate_slider_destinations(&self, piece: &Piece, slider: SliderType) -> SquareSet {
        let from = piece.square();
        let color = piece.color();
        match slider {
            SliderType::Bishop => self.cast_rays(from, color, &BISHOP_DIRECTIONS),
            SliderType::Rook => self.cast_rays(from, color, &ROOK_DIRECTIONS),
            SliderType::Queen => self
                .cast_rays(from, color, &ROOK_DIRECTIONS)
                .union(self.cast_rays(from, color, &BISHOP_DIRECTIONS)),
        }
    }

    /// Walk each direction until the edge or the first occupied square. An
    /// enemy blocker is included, a friendly one is not.
    fn cast_rays(&self, from: Square, color: Color, directions: &[(isize, isize)]) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        for &(dr, df) in directions {
            let mut cursor = from.offset(dr, df);
            while let Some(sq) = cursor {
                match self.get(sq) {
                    None => targets.insert(sq),
                    Some(blocker) => {
                        if blocker.color() != color {
                            targets.insert(sq);
                        }
                        break;
                    }
                }
                cursor = sq.offset(dr, df);
            }
        }
        targets
    }
}
