//! Flash expiry system.
//!
//! Damage and upgrade markers expire on tick counters, not wall-clock
//! timers, so they can never race the tick pipeline. Only presentation
//! fields live here; gameplay state is untouched.

use hecs::World;

use bulwark_core::components::{DamageFlash, UpgradeFlash};

/// Tick down every visible flash.
pub fn run(world: &mut World) {
    for (_entity, flash) in world.query_mut::<&mut DamageFlash>() {
        if flash.ticks_remaining > 0 {
            flash.ticks_remaining -= 1;
        }
    }

    for (_entity, flash) in world.query_mut::<&mut UpgradeFlash>() {
        if flash.range_ticks > 0 {
            flash.range_ticks -= 1;
        }
        if flash.damage_ticks > 0 {
            flash.damage_ticks -= 1;
        }
    }
}
