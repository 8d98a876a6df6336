//! Shared state between the runner and the game-loop thread.

use std::sync::{Arc, Mutex};

use bulwark_core::commands::GameCommand;
use bulwark_core::state::GameStateSnapshot;

/// Commands sent from the runner to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Command(GameCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot slot, updated by the game loop thread after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Fresh, empty snapshot slot.
pub fn new_shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
