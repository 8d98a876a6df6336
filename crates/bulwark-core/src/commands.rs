//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick
//! boundary. Invalid commands are no-ops, never errors.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameCommand {
    /// Begin a session from the idle state.
    StartGame,
    /// Start the next wave. Ignored while a wave is still in progress.
    StartNextWave,
    /// Place a tower of the given kind at a board pixel coordinate.
    /// The target cell must be empty and the kind unlocked and affordable.
    PlaceTower { kind: TowerKind, x: f32, y: f32 },
    /// Buy a range upgrade for the identified tower.
    UpgradeTowerRange { tower: u32 },
    /// Buy a damage upgrade for the identified tower.
    UpgradeTowerDamage { tower: u32 },
    /// Freeze the simulation.
    Pause,
    /// Unfreeze the simulation.
    Resume,
    /// Reinitialize the whole session, including a fresh board layout.
    Restart,
}
