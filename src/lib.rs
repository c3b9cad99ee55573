//! Chess rules engine.
//!
//! Models a chess position, generates candidate destinations for a selected
//! piece (castling, double pawn pushes and promotion included) and applies
//! moves through a select-then-move game controller. Rendering and input
//! handling are left to the host.

#[macro_use]
mod macros;

pub mod board;
pub mod game;
pub mod sync;

pub use board::{Color, MoveRecord, Piece, PieceKind, Position, Square, SquareSet};
pub use game::{Game, GameConfig};
pub use sync::SharedGame;
