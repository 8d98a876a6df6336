//! Per-tick simulation systems.
//!
//! The engine runs these in a fixed order each tick:
//! wave spawning, enemy motion, tower combat, projectiles,
//! death animations, flash expiry, then the snapshot build.

pub mod death_animations;
pub mod flashes;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
pub mod tower_combat;
pub mod wave_spawner;
