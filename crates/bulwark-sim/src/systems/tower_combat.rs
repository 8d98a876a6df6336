//! Tower combat system — cooldowns, targeting, and attack effects.
//!
//! Targeting picks the first enemy in spawn order inside range, not the
//! nearest. Damage is applied immediately at fire time; the travelling shot
//! spawned alongside is purely cosmetic.

use glam::Vec2;
use hecs::{Entity, World};

use bulwark_core::components::*;
use bulwark_core::constants::DAMAGE_FLASH_TICKS;
use bulwark_core::enums::{FlashLabel, TowerKind};
use bulwark_core::events::GameEvent;

use crate::world_setup;

struct ReadyTower {
    id: u32,
    entity: Entity,
    kind: TowerKind,
    range: f32,
    damage: i32,
    splash_radius: Option<f32>,
    position: Vec2,
}

/// Advance every tower one tick.
pub fn run(world: &mut World, id_counter: &mut u32, events: &mut Vec<GameEvent>) {
    let mut towers: Vec<(UnitId, Entity)> = {
        let mut query = world.query::<(&Tower, &UnitId)>();
        query.iter().map(|(entity, (_, id))| (*id, entity)).collect()
    };
    towers.sort_by_key(|(id, _)| *id);

    // Enemy list in spawn order, captured once: positions do not change
    // during the tower phase, and an enemy at zero health still occupies
    // its slot until the next motion pass.
    let mut enemies: Vec<(UnitId, Entity, Vec2)> = {
        let mut query = world.query::<(&Enemy, &UnitId, &Position)>();
        query
            .iter()
            .map(|(entity, (_, id, pos))| (*id, entity, pos.0))
            .collect()
    };
    enemies.sort_by_key(|(id, _, _)| *id);

    let mut ready: Vec<ReadyTower> = Vec::new();
    for (id, entity) in towers {
        let position = match world.get::<&Position>(entity) {
            Ok(pos) => pos.0,
            Err(_) => continue,
        };
        let mut state = match world.get::<&mut TowerState>(entity) {
            Ok(state) => state,
            Err(_) => continue,
        };
        if state.cooldown > 0 {
            state.cooldown -= 1;
            continue;
        }
        ready.push(ReadyTower {
            id: id.0,
            entity,
            kind: state.kind,
            range: state.range,
            damage: state.damage,
            splash_radius: state.splash_radius,
            position,
        });
    }

    for tower in ready {
        let target = enemies
            .iter()
            .find(|(_, _, enemy_pos)| enemy_pos.distance(tower.position) <= tower.range);
        let Some(&(_, target_entity, target_pos)) = target else {
            continue;
        };

        let spec = tower.kind.spec();
        if let Some(slow) = spec.slow {
            if let Ok(mut follower) = world.get::<&mut PathFollower>(target_entity) {
                follower.speed = follower.base_speed * slow.factor;
                follower.slow_ticks = slow.duration_ticks;
            }
            mark_flash(world, target_entity, FlashLabel::Slowed);
        } else if let Some(radius) = tower.splash_radius {
            // One radius scan covers the primary target too, so each enemy
            // takes the hit exactly once.
            for &(_, enemy_entity, enemy_pos) in &enemies {
                if enemy_pos.distance(target_pos) <= radius {
                    if let Ok(mut health) = world.get::<&mut Health>(enemy_entity) {
                        health.current -= tower.damage;
                    }
                    mark_flash(world, enemy_entity, FlashLabel::Damage(tower.damage));
                }
            }
        } else {
            if let Ok(mut health) = world.get::<&mut Health>(target_entity) {
                health.current -= tower.damage;
            }
            mark_flash(world, target_entity, FlashLabel::Damage(tower.damage));
        }

        if let Ok(mut state) = world.get::<&mut TowerState>(tower.entity) {
            state.cooldown = state.max_cooldown;
        }
        world_setup::spawn_shot(world, tower.kind, tower.position, target_pos, id_counter);
        events.push(GameEvent::TowerFired {
            tower: tower.id,
            kind: tower.kind,
        });
    }
}

fn mark_flash(world: &mut World, entity: Entity, label: FlashLabel) {
    if let Ok(mut flash) = world.get::<&mut DamageFlash>(entity) {
        flash.label = label;
        flash.ticks_remaining = DAMAGE_FLASH_TICKS;
    }
}
