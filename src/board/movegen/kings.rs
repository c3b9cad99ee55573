use super::super::piece::Piece;
use super::super::position::Position;
use super::super::tables::KING_TARGETS;
use super::super::types::{CastleSide, Color, PieceKind, Square, SquareSet};
use super::MoveContext;

/// File the king starts on, for both colors
const KING_HOME_FILE: usize = 4;

/// Castling side of a king move from its home square, if `to` is one of
/// the two castling destinations on the same rank.
pub(crate) fn castle_side_for(
    king: &Piece,
    to: Square,
    ctx: &MoveContext,
) -> Option<CastleSide> {
    let home = king_home_square(king.color(), ctx)?;
    if king.kind() != PieceKind::King || king.square() != home || to.rank() != home.rank() {
        return None;
    }
    CastleSide::BOTH
        .into_iter()
        .find(|side| side.king_target_file() == to.file())
}

fn king_home_square(color: Color, ctx: &MoveContext) -> Option<Square> {
    Square::new(ctx.home_rank(color), KING_HOME_FILE)
}

impl Position {
    pub(crate) fn generate_king_destinations(&self, king: &Piece, ctx: &MoveContext) -> SquareSet {
        let steps = KING_TARGETS[king.square().as_index()];
        self.without_friendly(steps, king.color())
            .union(self.castling_destinations(king, ctx))
    }

    /// Castling destinations for an unmoved king standing on its home square.
    ///
    /// A side is offered only while its right is set, the rook on that
    /// corner is an unmoved, uncaptured rook of the king's color, and every
    /// square between king and rook is empty.
    pub(crate) fn castling_destinations(&self, king: &Piece, ctx: &MoveContext) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        let color = king.color();
        let Some(home) = king_home_square(color, ctx) else {
            return targets;
        };
        if king.has_moved() || king.square() != home {
            return targets;
        }

        for side in CastleSide::BOTH {
            if !ctx.castling_rights.has(color, side) {
                continue;
            }
            let rook_ready = self.get(home.with_file(side.rook_file())).is_some_and(|rook| {
                rook.kind() == PieceKind::Rook
                    && rook.color() == color
                    && !rook.has_moved()
                    && !rook.is_captured()
            });
            let path_clear = side
                .between_files()
                .iter()
                .all(|&file| self.is_empty(home.with_file(file)));
            if rook_ready && path_clear {
                targets.insert(home.with_file(side.king_target_file()));
            }
        }
        targets
    }
}
