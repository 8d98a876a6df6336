//! Projectile system — advances cosmetic shots and explosions.
//!
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use bulwark_core::components::{Explosion, Position, Shot};

/// Advance shots toward their targets and explosions through their frames.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (shot, pos)) in world.query_mut::<(&Shot, &mut Position)>() {
        let delta = shot.target - pos.0;
        let distance = delta.length();
        if distance < shot.speed {
            despawn_buffer.push(entity);
        } else {
            pos.0 += delta / distance * shot.speed;
        }
    }

    for (entity, explosion) in world.query_mut::<&mut Explosion>() {
        explosion.frame += 1;
        explosion.scale = 1.0 + explosion.frame as f32 / explosion.max_frames as f32;
        if explosion.frame >= explosion.max_frames {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
