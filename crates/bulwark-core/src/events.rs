//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, TowerKind};

/// One tick's worth of cues for the frontend sound/HUD layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave began spawning.
    WaveStarted { wave: u32, quota: u32 },
    /// Every enemy of the wave was spawned and destroyed or broke through.
    WaveCleared { wave: u32 },
    /// A tower was placed.
    TowerPlaced { tower: u32, kind: TowerKind },
    /// A tower attacked.
    TowerFired { tower: u32, kind: TowerKind },
    /// A tower's range was upgraded.
    RangeUpgraded { tower: u32 },
    /// A tower's damage was upgraded.
    DamageUpgraded { tower: u32 },
    /// An enemy died and paid out its bounty.
    EnemyDied {
        enemy: u32,
        kind: EnemyKind,
        bounty: u32,
    },
    /// An enemy reached the path end and cost lives.
    EnemyBreached {
        enemy: u32,
        kind: EnemyKind,
        damage: u32,
    },
    /// Lives hit zero.
    GameOver { wave: u32 },
}
