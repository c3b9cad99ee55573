//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    CastleSide, CastlingRights, Color, FenError, MoveContext, MoveError, MoveRecord, Piece,
    PieceKind, Position, PositionBuilder, Square, SquareError, SquareSet,
};
