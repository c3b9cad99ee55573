//! Candidate destination generation.
//!
//! Generation is a read-only query on a `Position`: given the square of a
//! piece and a `MoveContext`, it returns the squares that piece may move to.
//! Check and pins are not considered.

mod kings;
mod knights;
mod pawns;
mod sliders;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::position::Position;
use super::types::{CastlingRights, Color, PieceKind, Square, SquareSet};

pub(crate) use kings::castle_side_for;
use sliders::SliderType;

/// Mover-relative context for generation.
///
/// `player_color` is the army that starts on ranks 1-2. Each color's home
/// rank follows from it, and pawns always advance away from their own home
/// rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveContext {
    pub player_color: Color,
    pub castling_rights: CastlingRights,
}

impl Default for MoveContext {
    fn default() -> Self {
        MoveContext::new(Color::White, CastlingRights::all())
    }
}

impl MoveContext {
    #[must_use]
    pub const fn new(player_color: Color, castling_rights: CastlingRights) -> Self {
        MoveContext {
            player_color,
            castling_rights,
        }
    }

    /// Back rank of `color` (0 for the player's army, 7 for the other)
    #[inline]
    #[must_use]
    pub const fn home_rank(&self, color: Color) -> usize {
        if matches!(
            (color, self.player_color),
            (Color::White, Color::White) | (Color::Black, Color::Black)
        ) {
            0
        } else {
            7
        }
    }

    /// Rank step of a pawn of `color`
    #[inline]
    #[must_use]
    pub const fn pawn_direction(&self, color: Color) -> isize {
        if self.home_rank(color) == 0 {
            1
        } else {
            -1
        }
    }

    /// Rank where a pawn of `color` promotes
    #[inline]
    #[must_use]
    pub const fn promotion_rank(&self, color: Color) -> usize {
        7 - self.home_rank(color)
    }
}

/// Candidate destinations for the piece on `from` in `position`.
///
/// Free-function form of [`Position::destinations`].
#[inline]
#[must_use]
pub fn legal_destinations(position: &Position, from: Square, ctx: &MoveContext) -> SquareSet {
    position.destinations(from, ctx)
}

impl Position {
    /// Candidate destinations for the piece on `from`.
    ///
    /// Returns an empty set when `from` is empty. Every returned square is on
    /// the board and never holds a piece of the mover's color.
    #[must_use]
    pub fn destinations(&self, from: Square, ctx: &MoveContext) -> SquareSet {
        match self.get(from) {
            Some(piece) => self.piece_destinations(piece, ctx),
            None => SquareSet::EMPTY,
        }
    }

    pub(crate) fn piece_destinations(&self, piece: &Piece, ctx: &MoveContext) -> SquareSet {
        match piece.kind() {
            PieceKind::Pawn => self.generate_pawn_destinations(piece, ctx),
            PieceKind::Knight => self.generate_knight_destinations(piece),
            PieceKind::Bishop => self.generate_slider_destinations(piece, SliderType::Bishop),
            PieceKind::Rook => self.generate_slider_destinations(piece, SliderType::Rook),
            PieceKind::Queen => self.generate_slider_destinations(piece, SliderType::Queen),
            PieceKind::King => self.generate_king_destinations(piece, ctx),
        }
    }

    /// Squares of `targets` that are empty or hold an enemy of `color`
    fn without_friendly(&self, targets: SquareSet, color: Color) -> SquareSet {
        targets
            .iter()
            .filter(|&sq| self.get(sq).map_or(true, |p| p.color() != color))
            .collect()
    }

    /// Every (from, to) pair available to `color`, from squares a1..h8
    #[must_use]
    pub fn all_destinations(&self, color: Color, ctx: &MoveContext) -> Vec<(Square, SquareSet)> {
        self.pieces_of(color)
            .map(|p| (p.square(), self.piece_destinations(p, ctx)))
            .filter(|(_, targets)| !targets.is_empty())
            .collect()
    }
}
