//! Game state snapshot — the complete visible state handed to the frontend
//! each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{Cell, EnemyKind, FlashLabel, GamePhase, TowerKind};
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state built after each tick. Sufficient for a renderer and
/// HUD to reproduce the visible game with no simulation logic of their own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub gold: u32,
    pub lives: u32,
    pub grid: GridView,
    /// Enemy path waypoints in pixel space, spawn point first.
    pub path: Vec<Vec2>,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub shots: Vec<ShotView>,
    pub explosions: Vec<ExplosionView>,
    pub death_animations: Vec<DeathAnimationView>,
    pub unlocks: UnlocksView,
    /// Cues collected during the tick that produced this snapshot.
    pub events: Vec<GameEvent>,
}

/// Wave progress for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub number: u32,
    /// Total enemies this wave will spawn.
    pub quota: u32,
    pub spawned: u32,
    pub in_progress: bool,
    /// True when StartNextWave would be accepted.
    pub next_wave_ready: bool,
}

/// Board contents, row-major.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridView {
    pub cols: usize,
    pub rows: usize,
    pub cell_size: f32,
    pub cells: Vec<Cell>,
}

/// A visible enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub speed: f32,
    /// True while a slow effect is active (drives the "slowed" marker).
    pub slowed: bool,
    pub flash: Option<FlashView>,
}

/// A visible damage/slow marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlashView {
    pub label: FlashLabel,
    pub ticks_remaining: u32,
}

/// A visible tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub id: u32,
    pub kind: TowerKind,
    pub position: Vec2,
    pub range: f32,
    pub damage: i32,
    pub cooldown: u32,
    pub max_cooldown: u32,
    pub splash_radius: Option<f32>,
    /// True while the range-upgrade ring should render.
    pub range_flash: bool,
    /// True while the damage-upgrade ring should render.
    pub damage_flash: bool,
}

/// A travelling shot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotView {
    pub id: u32,
    pub kind: TowerKind,
    pub position: Vec2,
    pub target: Vec2,
}

/// An explosion effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub id: u32,
    pub position: Vec2,
    pub frame: u32,
    pub max_frames: u32,
    pub scale: f32,
}

/// A death animation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeathAnimationView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub frame: u32,
    pub max_frames: u32,
}

/// What the player has unlocked so far. Monotonic across a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnlocksView {
    /// Placeable tower kinds, in catalog order.
    pub towers: Vec<TowerKind>,
    /// Range upgrades available.
    pub upgrades: bool,
    /// Damage upgrades available.
    pub damage_upgrade: bool,
}
