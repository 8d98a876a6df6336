//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session running yet.
    #[default]
    Idle,
    /// Simulation advancing each tick.
    Active,
    /// Pipeline frozen, resume restores instantly.
    Paused,
    /// Lives hit zero; only Restart leaves this state.
    GameOver,
}

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Tower,
    Path,
}

/// Tower catalog, in unlock order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Baseline single-target gun.
    Cannon,
    /// Slows targets instead of damaging them.
    Frost,
    /// Fast-cycling single-target gun.
    Gatling,
    /// Long range, heavy single hits.
    Sniper,
    /// Short range, splash damage around the target.
    Mortar,
    /// Board-spanning range and the heaviest single hit.
    Prism,
}

/// Enemy catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Normal,
    Fast,
    Tank,
    Boss,
    Elite,
}

/// What a damage flash displays over an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FlashLabel {
    /// A damage number.
    Damage(i32),
    /// The "slowed" marker.
    Slowed,
}
