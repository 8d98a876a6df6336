//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world. Views are sorted
//! by unit id so identical state always serializes identically.

use hecs::World;

use bulwark_core::components::*;
use bulwark_core::enums::{GamePhase, TowerKind};
use bulwark_core::events::GameEvent;
use bulwark_core::state::*;
use bulwark_core::types::SimTime;
use bulwark_grid::Layout;

use crate::systems::wave_spawner::WaveState;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave: &WaveState,
    gold: u32,
    lives: u32,
    layout: &Layout,
    upgrades_unlocked: bool,
    damage_upgrade_unlocked: bool,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        wave: build_wave(wave, phase),
        gold,
        lives,
        grid: build_grid(layout),
        path: layout.waypoints.clone(),
        enemies: build_enemies(world),
        towers: build_towers(world),
        shots: build_shots(world),
        explosions: build_explosions(world),
        death_animations: build_death_animations(world),
        unlocks: build_unlocks(wave.number, upgrades_unlocked, damage_upgrade_unlocked),
        events,
    }
}

fn build_wave(wave: &WaveState, phase: GamePhase) -> WaveView {
    WaveView {
        number: wave.number,
        quota: wave.quota,
        spawned: wave.spawned,
        in_progress: wave.in_progress,
        next_wave_ready: phase == GamePhase::Active && !wave.in_progress,
    }
}

fn build_grid(layout: &Layout) -> GridView {
    GridView {
        cols: layout.grid.cols,
        rows: layout.grid.rows,
        cell_size: layout.grid.cell_size,
        cells: layout.grid.cells.clone(),
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut views: Vec<EnemyView> = {
        let mut query = world.query::<(
            &Enemy,
            &UnitId,
            &Position,
            &Health,
            &EnemyClass,
            &PathFollower,
            &DamageFlash,
        )>();
        query
            .iter()
            .map(
                |(_, (_, id, pos, health, class, follower, flash))| EnemyView {
                    id: id.0,
                    kind: class.kind,
                    position: pos.0,
                    health: health.current,
                    max_health: health.max,
                    speed: follower.speed,
                    slowed: follower.slow_ticks > 0,
                    flash: (flash.ticks_remaining > 0).then_some(FlashView {
                        label: flash.label,
                        ticks_remaining: flash.ticks_remaining,
                    }),
                },
            )
            .collect()
    };
    views.sort_by_key(|view| view.id);
    views
}

fn build_towers(world: &World) -> Vec<TowerView> {
    let mut views: Vec<TowerView> = {
        let mut query = world.query::<(&Tower, &UnitId, &Position, &TowerState, &UpgradeFlash)>();
        query
            .iter()
            .map(|(_, (_, id, pos, state, flash))| TowerView {
                id: id.0,
                kind: state.kind,
                position: pos.0,
                range: state.range,
                damage: state.damage,
                cooldown: state.cooldown,
                max_cooldown: state.max_cooldown,
                splash_radius: state.splash_radius,
                range_flash: flash.range_ticks > 0,
                damage_flash: flash.damage_ticks > 0,
            })
            .collect()
    };
    views.sort_by_key(|view| view.id);
    views
}

fn build_shots(world: &World) -> Vec<ShotView> {
    let mut views: Vec<ShotView> = {
        let mut query = world.query::<(&UnitId, &Position, &Shot)>();
        query
            .iter()
            .map(|(_, (id, pos, shot))| ShotView {
                id: id.0,
                kind: shot.kind,
                position: pos.0,
                target: shot.target,
            })
            .collect()
    };
    views.sort_by_key(|view| view.id);
    views
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    let mut views: Vec<ExplosionView> = {
        let mut query = world.query::<(&UnitId, &Position, &Explosion)>();
        query
            .iter()
            .map(|(_, (id, pos, explosion))| ExplosionView {
                id: id.0,
                position: pos.0,
                frame: explosion.frame,
                max_frames: explosion.max_frames,
                scale: explosion.scale,
            })
            .collect()
    };
    views.sort_by_key(|view| view.id);
    views
}

fn build_death_animations(world: &World) -> Vec<DeathAnimationView> {
    let mut views: Vec<DeathAnimationView> = {
        let mut query = world.query::<(&UnitId, &Position, &DeathAnimation)>();
        query
            .iter()
            .map(|(_, (id, pos, animation))| DeathAnimationView {
                id: id.0,
                kind: animation.kind,
                position: pos.0,
                frame: animation.frame,
                max_frames: animation.max_frames,
            })
            .collect()
    };
    views.sort_by_key(|view| view.id);
    views
}

fn build_unlocks(wave: u32, upgrades: bool, damage_upgrade: bool) -> UnlocksView {
    UnlocksView {
        towers: TowerKind::ALL
            .iter()
            .copied()
            .filter(|kind| kind.unlock_wave() <= wave)
            .collect(),
        upgrades,
        damage_upgrade,
    }
}
