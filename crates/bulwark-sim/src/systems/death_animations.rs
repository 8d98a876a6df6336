//! Death animation system — frame advance and retirement.

use hecs::{Entity, World};

use bulwark_core::components::DeathAnimation;

/// Advance every death animation one frame; retire finished ones.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, animation) in world.query_mut::<&mut DeathAnimation>() {
        animation.frame += 1;
        if animation.frame >= animation.max_frames {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
