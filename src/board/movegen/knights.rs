use super::super::piece::Piece;
use super::super::position::Position;
use super::super::tables::KNIGHT_TARGETS;
use super::super::types::SquareSet;

impl Position {
    pub(crate) fn generate_knight_destinations(&self, knight: &Piece) -> SquareSet {
        let targets = KNIGHT_TARGETS[knight.square().as_index()];
        self.without_friendly(targets, knight.color())
    }
}
