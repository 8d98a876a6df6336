//! Entity spawn factories and spawn-time difficulty scaling.
//!
//! Every entity gets a `UnitId` from the engine's shared counter, so
//! creation order is recoverable anywhere ids are compared.

use glam::Vec2;
use hecs::World;

use bulwark_core::components::*;
use bulwark_core::constants::*;
use bulwark_core::enums::{EnemyKind, TowerKind};

fn next_id(counter: &mut u32) -> u32 {
    let id = *counter;
    *counter += 1;
    id
}

/// Health for an enemy of the given base health spawning in the given wave:
/// flat growth per wave plus a multiplicative bonus every ten waves.
pub fn scaled_health(base: i32, wave: u32) -> i32 {
    let flat = base + HEALTH_GROWTH_PER_WAVE * wave.saturating_sub(1) as i32;
    let bonus = 1.0 + HEALTH_BONUS_PER_STEP * (wave / HEALTH_BONUS_STEP_WAVES) as f32;
    (flat as f32 * bonus).floor() as i32
}

/// Speed multiplier for the given wave: 1.0 until wave 30, then +10% per
/// ten waves past it.
pub fn speed_multiplier(wave: u32) -> f32 {
    if wave >= SPEED_BONUS_START_WAVE {
        1.0 + SPEED_BONUS_PER_STEP
            * ((wave - SPEED_BONUS_START_WAVE) / SPEED_BONUS_STEP_WAVES) as f32
    } else {
        1.0
    }
}

/// Spawn an enemy at the path start, scaled for the given wave.
/// Returns its assigned id.
pub fn spawn_enemy(
    world: &mut World,
    kind: EnemyKind,
    wave: u32,
    path: &[Vec2],
    id_counter: &mut u32,
) -> u32 {
    let spec = kind.spec();
    let health = scaled_health(spec.health, wave);
    let speed = spec.speed * speed_multiplier(wave);
    let id = next_id(id_counter);

    world.spawn((
        Enemy,
        UnitId(id),
        Position(path[0]),
        Health {
            current: health,
            max: health,
        },
        EnemyClass { kind },
        PathFollower {
            speed,
            base_speed: speed,
            slow_ticks: 0,
            waypoint: 0,
        },
        DamageFlash::default(),
    ));
    id
}

/// Spawn a tower at a cell center. Returns its assigned id.
pub fn spawn_tower(
    world: &mut World,
    kind: TowerKind,
    position: Vec2,
    id_counter: &mut u32,
) -> u32 {
    let spec = kind.spec();
    let id = next_id(id_counter);

    world.spawn((
        Tower,
        UnitId(id),
        Position(position),
        TowerState {
            kind,
            range: spec.range,
            damage: spec.damage,
            cooldown: 0,
            max_cooldown: spec.cooldown,
            splash_radius: spec.splash_radius,
        },
        UpgradeFlash::default(),
    ));
    id
}

/// Spawn a cosmetic travelling shot from a tower toward a point.
pub fn spawn_shot(
    world: &mut World,
    kind: TowerKind,
    from: Vec2,
    target: Vec2,
    id_counter: &mut u32,
) -> u32 {
    let id = next_id(id_counter);
    world.spawn((
        UnitId(id),
        Position(from),
        Shot {
            kind,
            target,
            speed: SHOT_SPEED,
        },
    ));
    id
}

/// Spawn a cosmetic explosion at a point.
pub fn spawn_explosion(world: &mut World, at: Vec2, id_counter: &mut u32) -> u32 {
    let id = next_id(id_counter);
    world.spawn((
        UnitId(id),
        Position(at),
        Explosion {
            frame: 0,
            max_frames: EXPLOSION_FRAMES,
            scale: 1.0,
        },
    ));
    id
}

/// Spawn a death animation at a point.
pub fn spawn_death_animation(
    world: &mut World,
    kind: EnemyKind,
    at: Vec2,
    id_counter: &mut u32,
) -> u32 {
    let id = next_id(id_counter);
    world.spawn((
        UnitId(id),
        Position(at),
        DeathAnimation {
            kind,
            frame: 0,
            max_frames: DEATH_ANIMATION_FRAMES,
        },
    ));
    id
}
