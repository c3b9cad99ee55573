//! Core chess types.
//!
//! This module contains the value types used throughout the rules engine:
//! - `PieceKind` and `Color` - piece identities
//! - `Square` - checked board coordinate
//! - `SquareSet` - destination sets returned by move generation
//! - `MoveRecord` - move log entries
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;
mod square_set;

pub use castling::{CastleSide, CastlingRights};
pub use moves::MoveRecord;
pub use piece::{Color, PieceKind};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
