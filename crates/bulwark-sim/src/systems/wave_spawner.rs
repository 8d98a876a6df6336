//! Wave control system — spawn cadence, enemy kind rolls, wave completion.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::components::Enemy;
use bulwark_core::constants::*;
use bulwark_core::enums::EnemyKind;
use bulwark_core::events::GameEvent;

use crate::world_setup;

/// Progress of the current wave.
#[derive(Debug, Clone, Default)]
pub struct WaveState {
    /// Current wave number; 0 before the first wave.
    pub number: u32,
    /// Enemies this wave will spawn in total.
    pub quota: u32,
    /// Enemies spawned so far.
    pub spawned: u32,
    /// Ticks since the last spawn.
    pub spawn_timer: u32,
    /// True from wave start until the quota is spawned and cleared.
    pub in_progress: bool,
}

impl WaveState {
    /// Spawn quota for a wave number.
    pub fn quota_for(number: u32) -> u32 {
        WAVE_BASE_QUOTA + WAVE_QUOTA_PER_LEVEL * number
    }

    /// Reset counters and begin the given wave.
    pub fn begin(&mut self, number: u32) {
        self.number = number;
        self.quota = Self::quota_for(number);
        self.spawned = 0;
        self.spawn_timer = 0;
        self.in_progress = true;
    }

    /// True once every enemy of the wave has been spawned.
    pub fn all_spawned(&self) -> bool {
        self.spawned >= self.quota
    }
}

/// Advance the spawn gate one tick and detect wave completion.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: &mut WaveState,
    path: &[Vec2],
    id_counter: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    if !wave.in_progress {
        return;
    }

    if !wave.all_spawned() {
        wave.spawn_timer += 1;
        if wave.spawn_timer >= SPAWN_INTERVAL_TICKS {
            wave.spawn_timer = 0;
            wave.spawned += 1;
            let kind = roll_enemy_kind(rng, wave.number);
            world_setup::spawn_enemy(world, kind, wave.number, path, id_counter);
        }
    } else if alive_enemies(world) == 0 {
        wave.in_progress = false;
        events.push(GameEvent::WaveCleared { wave: wave.number });
    }
}

/// Pick the enemy kind for one spawn, evaluated at spawn time.
///
/// Every fifth wave is an unconditional boss wave. Otherwise the roll table
/// widens as waves progress: normals only, then a normal/fast/tank mix,
/// then elites join from wave 50.
pub fn roll_enemy_kind(rng: &mut ChaCha8Rng, wave: u32) -> EnemyKind {
    if wave % BOSS_WAVE_INTERVAL == 0 {
        return EnemyKind::Boss;
    }
    if wave >= ELITE_SPAWNS_START_WAVE {
        let roll: f32 = rng.gen();
        if roll < 0.3 {
            EnemyKind::Elite
        } else if roll < 0.5 {
            EnemyKind::Normal
        } else if roll < 0.7 {
            EnemyKind::Fast
        } else {
            EnemyKind::Tank
        }
    } else if wave >= MIXED_SPAWNS_START_WAVE {
        let roll: f32 = rng.gen();
        if roll < 0.4 {
            EnemyKind::Normal
        } else if roll < 0.7 {
            EnemyKind::Fast
        } else {
            EnemyKind::Tank
        }
    } else {
        EnemyKind::Normal
    }
}

fn alive_enemies(world: &World) -> usize {
    let mut query = world.query::<&Enemy>();
    query.iter().count()
}
