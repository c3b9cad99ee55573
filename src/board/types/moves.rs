//! Move log entries.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, PieceKind};
use super::square::Square;

/// One entry of a position's move log.
///
/// Ordinary moves (captures and promotions included) are recorded as a
/// from/to pair; castling is recorded as a tag carrying the color and side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveRecord {
    Step {
        from: Square,
        to: Square,
        /// Set when a pawn reached the far rank and was replaced
        promotion: Option<PieceKind>,
    },
    Castle {
        color: Color,
        side: CastleSide,
    },
}

impl MoveRecord {
    /// A plain from/to move
    #[inline]
    #[must_use]
    pub const fn step(from: Square, to: Square) -> Self {
        MoveRecord::Step {
            from,
            to,
            promotion: None,
        }
    }

    /// Returns true if this entry is a castling tag
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveRecord::Castle { .. })
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRecord::Step {
                from,
                to,
                promotion: None,
            } => write!(f, "{from}{to}"),
            MoveRecord::Step {
                from,
                to,
                promotion: Some(kind),
            } => write!(f, "{from}{to}{}", kind.to_char()),
            MoveRecord::Castle { side, .. } => write!(f, "{side}"),
        }
    }
}
