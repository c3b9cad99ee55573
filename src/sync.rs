//! Synchronization primitives for hosting games on several threads.
//!
//! The rules engine itself is single-threaded; a host that touches one game
//! from more than one thread wraps it in a `SharedGame`.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::game::{Game, GameConfig};

/// A game behind one mutex, cheap to clone and share.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<Game>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self::new(Game::with_config(config))
    }

    /// Lock the game for exclusive access.
    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, Game> {
        self.0.lock()
    }

    /// Run `f` with the game locked.
    #[inline]
    pub fn with<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.0.lock())
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        Self::new(game)
    }
}
