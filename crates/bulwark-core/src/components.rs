//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, FlashLabel, TowerKind};

/// Pixel-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Stable identifier assigned at creation, strictly increasing.
/// Doubles as the creation-order key for targeting and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// Marks an entity as an enemy following the path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks an entity as a player-placed tower.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower;

/// Hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Which catalog entry an enemy was spawned as.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyClass {
    pub kind: EnemyKind,
}

/// Waypoint-following movement state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathFollower {
    /// Current speed in pixels per tick.
    pub speed: f32,
    /// Speed restored when a slow effect expires.
    pub base_speed: f32,
    /// Ticks remaining under a slow effect (0 = unaffected).
    pub slow_ticks: u32,
    /// Index of the next waypoint to move toward.
    pub waypoint: usize,
}

/// Transient damage/slow marker shown over an enemy.
/// Presentation only — never read by gameplay systems.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DamageFlash {
    pub label: FlashLabel,
    /// Ticks until the marker disappears (0 = hidden).
    pub ticks_remaining: u32,
}

impl Default for DamageFlash {
    fn default() -> Self {
        Self {
            label: FlashLabel::Damage(0),
            ticks_remaining: 0,
        }
    }
}

/// Combat state of a tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerState {
    pub kind: TowerKind,
    /// Attack range in pixels (grows with range upgrades).
    pub range: f32,
    /// Damage per hit (grows with damage upgrades).
    pub damage: i32,
    /// Ticks until the next attack is allowed.
    pub cooldown: u32,
    /// Cooldown reset value after each attack.
    pub max_cooldown: u32,
    /// Splash damage radius, for splash towers.
    pub splash_radius: Option<f32>,
}

/// Transient upgrade markers shown on a tower. Presentation only.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UpgradeFlash {
    /// Ticks the range-upgrade ring stays visible.
    pub range_ticks: u32,
    /// Ticks the damage-upgrade ring stays visible.
    pub damage_ticks: u32,
}

/// A travelling shot. Purely cosmetic — damage was applied at fire time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shot {
    /// Tower kind that fired it (selects the sprite).
    pub kind: TowerKind,
    /// Point the shot travels toward.
    pub target: Vec2,
    /// Pixels per tick.
    pub speed: f32,
}

/// An expanding explosion effect. Purely cosmetic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub frame: u32,
    pub max_frames: u32,
    pub scale: f32,
}

/// A fading death animation. Purely cosmetic.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeathAnimation {
    /// Enemy kind that died (selects the sprite).
    pub kind: EnemyKind,
    pub frame: u32,
    pub max_frames: u32,
}
