//! Chess board representation and move generation.
//!
//! A `Position` owns an 8x8 grid of pieces together with the move log and
//! the captured-piece lists. Move generation answers "where may the piece on
//! this square go?" for every piece kind, including castling, double pawn
//! pushes and promotion squares. Check and pins are not considered.
//!
//! # Example
//! ```
//! use chess_rules::board::{MoveContext, PositionBuilder, Color, Square};
//!
//! let position = PositionBuilder::starting_position(Color::White).build();
//! let e2: Square = "e2".parse().unwrap();
//! let targets = position.destinations(e2, &MoveContext::default());
//! println!("e2 pawn has {} destinations", targets.len());
//! ```

mod builder;
mod debug;
mod error;
mod fen;
mod movegen;
mod piece;
pub mod prelude;
mod position;
mod tables;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, PieceError, SquareError};
pub use movegen::{legal_destinations, MoveContext};
pub use piece::Piece;
pub use position::Position;
pub use types::{
    CastleSide, CastlingRights, Color, MoveRecord, PieceKind, Square, SquareSet, SquareSetIter,
};

pub(crate) use movegen::castle_side_for;
