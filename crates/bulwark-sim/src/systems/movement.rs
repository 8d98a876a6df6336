//! Enemy motion system — slow-effect expiry, waypoint following, breaches,
//! and the post-movement death check.
//!
//! Enemies are processed in spawn order. Updates that add or remove entities
//! are buffered and applied after the scan to keep hecs borrows simple.

use glam::Vec2;
use hecs::{Entity, World};

use bulwark_core::components::*;
use bulwark_core::enums::EnemyKind;
use bulwark_core::events::GameEvent;

use crate::world_setup;

/// What the motion pass decided for the whole tick.
pub struct MotionOutcome {
    /// Lives hit zero; the engine must end the session.
    pub game_over: bool,
}

enum Step {
    /// Still on the path; position after this tick's move.
    Moving(Vec2),
    /// Walked off the end of the path.
    Breached,
}

/// Advance every enemy one tick.
pub fn run(
    world: &mut World,
    path: &[Vec2],
    gold: &mut u32,
    lives: &mut u32,
    id_counter: &mut u32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> MotionOutcome {
    // Slow effects tick down first; speed is restored exactly at zero.
    for (_entity, (_enemy, follower)) in world.query_mut::<(&Enemy, &mut PathFollower)>() {
        if follower.slow_ticks > 0 {
            follower.slow_ticks -= 1;
            if follower.slow_ticks == 0 {
                follower.speed = follower.base_speed;
            }
        }
    }

    let mut order: Vec<(UnitId, Entity)> = {
        let mut query = world.query::<(&Enemy, &UnitId)>();
        query.iter().map(|(entity, (_, id))| (*id, entity)).collect()
    };
    order.sort_by_key(|(id, _)| *id);

    despawn_buffer.clear();
    let mut breached: Vec<(Entity, u32, EnemyKind)> = Vec::new();
    let mut died: Vec<(Entity, u32, EnemyKind, Vec2)> = Vec::new();

    for (id, entity) in order {
        let kind = match world.get::<&EnemyClass>(entity) {
            Ok(class) => class.kind,
            Err(_) => continue,
        };

        let step = {
            let mut follower = match world.get::<&mut PathFollower>(entity) {
                Ok(f) => f,
                Err(_) => continue,
            };
            let mut pos = match world.get::<&mut Position>(entity) {
                Ok(p) => p,
                Err(_) => continue,
            };

            match path.get(follower.waypoint) {
                None => Step::Breached,
                Some(&target) => {
                    let delta = target - pos.0;
                    let distance = delta.length();
                    if distance < follower.speed {
                        follower.waypoint += 1;
                        if follower.waypoint >= path.len() {
                            Step::Breached
                        } else {
                            Step::Moving(pos.0)
                        }
                    } else {
                        pos.0 += delta / distance * follower.speed;
                        Step::Moving(pos.0)
                    }
                }
            }
        };

        match step {
            Step::Breached => breached.push((entity, id.0, kind)),
            Step::Moving(position) => {
                // The death check runs after movement so an enemy killed
                // last tower phase leaves in the same motion pass.
                let dead = world
                    .get::<&Health>(entity)
                    .map(|h| h.current <= 0)
                    .unwrap_or(false);
                if dead {
                    died.push((entity, id.0, kind, position));
                }
            }
        }
    }

    let mut game_over = false;
    for (entity, id, kind) in breached {
        let damage = kind.spec().breach_damage;
        *lives = lives.saturating_sub(damage);
        events.push(GameEvent::EnemyBreached {
            enemy: id,
            kind,
            damage,
        });
        despawn_buffer.push(entity);
        if *lives == 0 {
            game_over = true;
        }
    }

    if game_over {
        // Session is over; the engine clears the rest of the board.
        for entity in despawn_buffer.drain(..) {
            let _ = world.despawn(entity);
        }
        return MotionOutcome { game_over: true };
    }

    for (entity, id, kind, position) in died {
        let bounty = kind.spec().bounty;
        *gold += bounty;
        world_setup::spawn_death_animation(world, kind, position, id_counter);
        world_setup::spawn_explosion(world, position, id_counter);
        events.push(GameEvent::EnemyDied {
            enemy: id,
            kind,
            bounty,
        });
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    MotionOutcome { game_over: false }
}
