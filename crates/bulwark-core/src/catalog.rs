//! Static unit catalogs: per-kind stats and unlock gates.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, TowerKind};

/// Slow-effect parameters for towers that apply one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlowSpec {
    /// Multiplier applied to the target's base speed.
    pub factor: f32,
    /// Ticks the effect lasts.
    pub duration_ticks: u32,
}

/// Static stats for one tower kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerSpec {
    pub cost: u32,
    /// Attack range in pixels.
    pub range: f32,
    pub damage: i32,
    /// Ticks between attacks.
    pub cooldown: u32,
    /// Present on slowing towers.
    pub slow: Option<SlowSpec>,
    /// Present on splash towers: damage radius around the target.
    pub splash_radius: Option<f32>,
}

/// Static stats for one enemy kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpec {
    pub health: i32,
    /// Pixels per tick.
    pub speed: f32,
    /// Gold awarded on kill.
    pub bounty: u32,
    /// Lives lost when this enemy reaches the path end.
    pub breach_damage: u32,
}

impl TowerKind {
    /// All kinds in catalog (unlock) order.
    pub const ALL: [TowerKind; 6] = [
        TowerKind::Cannon,
        TowerKind::Frost,
        TowerKind::Gatling,
        TowerKind::Sniper,
        TowerKind::Mortar,
        TowerKind::Prism,
    ];

    /// Static stats for this kind.
    pub const fn spec(self) -> TowerSpec {
        match self {
            TowerKind::Cannon => TowerSpec {
                cost: 50,
                range: 100.0,
                damage: 6,
                cooldown: 30,
                slow: None,
                splash_radius: None,
            },
            TowerKind::Frost => TowerSpec {
                cost: 75,
                range: 80.0,
                damage: 0,
                cooldown: 50,
                slow: Some(SlowSpec {
                    factor: 0.5,
                    duration_ticks: 90,
                }),
                splash_radius: None,
            },
            TowerKind::Gatling => TowerSpec {
                cost: 150,
                range: 120.0,
                damage: 8,
                cooldown: 20,
                slow: None,
                splash_radius: None,
            },
            TowerKind::Sniper => TowerSpec {
                cost: 200,
                range: 200.0,
                damage: 15,
                cooldown: 45,
                slow: None,
                splash_radius: None,
            },
            TowerKind::Mortar => TowerSpec {
                cost: 500,
                range: 80.0,
                damage: 22,
                cooldown: 70,
                slow: None,
                splash_radius: Some(50.0),
            },
            TowerKind::Prism => TowerSpec {
                cost: 750,
                range: 1000.0,
                damage: 50,
                cooldown: 90,
                slow: None,
                splash_radius: None,
            },
        }
    }

    /// Wave number at which this kind becomes placeable.
    pub const fn unlock_wave(self) -> u32 {
        match self {
            TowerKind::Cannon => 0,
            TowerKind::Frost => 5,
            TowerKind::Gatling => 10,
            TowerKind::Sniper => 15,
            TowerKind::Mortar => 20,
            TowerKind::Prism => 30,
        }
    }
}

impl EnemyKind {
    /// All kinds.
    pub const ALL: [EnemyKind; 5] = [
        EnemyKind::Normal,
        EnemyKind::Fast,
        EnemyKind::Tank,
        EnemyKind::Boss,
        EnemyKind::Elite,
    ];

    /// Static stats for this kind.
    pub const fn spec(self) -> EnemySpec {
        match self {
            EnemyKind::Normal => EnemySpec {
                health: 12,
                speed: 1.4,
                bounty: 5,
                breach_damage: 2,
            },
            EnemyKind::Fast => EnemySpec {
                health: 6,
                speed: 2.0,
                bounty: 7,
                breach_damage: 2,
            },
            EnemyKind::Tank => EnemySpec {
                health: 30,
                speed: 1.0,
                bounty: 8,
                breach_damage: 3,
            },
            EnemyKind::Boss => EnemySpec {
                health: 50,
                speed: 0.8,
                bounty: 10,
                breach_damage: 5,
            },
            EnemyKind::Elite => EnemySpec {
                health: 1000,
                speed: 1.1,
                bounty: 15,
                breach_damage: 10,
            },
        }
    }
}
