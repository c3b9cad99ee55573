//! Game configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Color;

/// Configuration for a new game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// Army placed on ranks 1-2
    pub player_color: Color,
    /// Only let the side to move make moves
    pub enforce_turn: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player_color: Color::White,
            enforce_turn: false,
        }
    }
}

impl GameConfig {
    /// Config with the given army at the bottom and defaults otherwise
    #[must_use]
    pub const fn new(player_color: Color) -> Self {
        GameConfig {
            player_color,
            enforce_turn: false,
        }
    }

    /// Set the bottom army
    #[must_use]
    pub const fn with_player_color(mut self, player_color: Color) -> Self {
        self.player_color = player_color;
        self
    }

    /// Set whether moves are restricted to the side to move
    #[must_use]
    pub const fn with_enforce_turn(mut self, enforce_turn: bool) -> Self {
        self.enforce_turn = enforce_turn;
        self
    }
}
