//! Game controller for managing selection, moves and game state.
//!
//! A `Game` owns the canonical `Position` and applies the side effects of a
//! move (captures, castling, promotion, castling-right bookkeeping) after
//! checking it against the move generator.

mod config;
mod controller;

pub use config::GameConfig;
pub use controller::{Game, GameState, Phase};
