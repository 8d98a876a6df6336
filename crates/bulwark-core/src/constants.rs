//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Board ---

/// Board width in pixels.
pub const BOARD_WIDTH: f32 = 800.0;

/// Board height in pixels.
pub const BOARD_HEIGHT: f32 = 600.0;

/// Side length of one grid cell in pixels.
pub const CELL_SIZE: f32 = 40.0;

/// Number of grid columns.
pub const GRID_COLS: usize = (BOARD_WIDTH / CELL_SIZE) as usize;

/// Number of grid rows.
pub const GRID_ROWS: usize = (BOARD_HEIGHT / CELL_SIZE) as usize;

// --- Economy ---

/// Gold at the start of a session.
pub const STARTING_GOLD: u32 = 100;

/// Lives at the start of a session.
pub const STARTING_LIVES: u32 = 100;

// --- Waves ---

/// Ticks between enemy spawns while a wave has quota remaining.
pub const SPAWN_INTERVAL_TICKS: u32 = 30;

/// Enemies in wave 1 before per-wave growth.
pub const WAVE_BASE_QUOTA: u32 = 10;

/// Additional enemies per wave number.
pub const WAVE_QUOTA_PER_LEVEL: u32 = 2;

/// Every Nth wave spawns bosses exclusively.
pub const BOSS_WAVE_INTERVAL: u32 = 5;

/// First wave that rolls mixed enemy kinds instead of normals only.
pub const MIXED_SPAWNS_START_WAVE: u32 = 3;

/// First wave that can roll elite enemies.
pub const ELITE_SPAWNS_START_WAVE: u32 = 50;

// --- Difficulty scaling ---

/// Flat health added per wave past the first.
pub const HEALTH_GROWTH_PER_WAVE: i32 = 8;

/// Wave-count step for the multiplicative health bonus.
pub const HEALTH_BONUS_STEP_WAVES: u32 = 10;

/// Multiplicative health bonus per step.
pub const HEALTH_BONUS_PER_STEP: f32 = 0.25;

/// First wave at which enemy speed starts scaling up.
pub const SPEED_BONUS_START_WAVE: u32 = 30;

/// Wave-count step for the speed bonus past the start wave.
pub const SPEED_BONUS_STEP_WAVES: u32 = 10;

/// Speed multiplier gained per step.
pub const SPEED_BONUS_PER_STEP: f32 = 0.1;

// --- Upgrades ---

/// Wave at which the upgrade system unlocks.
pub const UPGRADE_UNLOCK_WAVE: u32 = 40;

/// Wave at which the damage upgrade unlocks.
pub const DAMAGE_UPGRADE_UNLOCK_WAVE: u32 = 50;

/// Gold cost of a range upgrade.
pub const RANGE_UPGRADE_COST: u32 = 500;

/// Range gained per upgrade (one grid cell).
pub const RANGE_UPGRADE_INCREASE: f32 = CELL_SIZE;

// --- Presentation ---

/// Travelling shot speed (pixels per tick).
pub const SHOT_SPEED: f32 = 10.0;

/// Explosion effect lifetime in frames.
pub const EXPLOSION_FRAMES: u32 = 15;

/// Death animation lifetime in frames.
pub const DEATH_ANIMATION_FRAMES: u32 = 30;

/// Ticks a damage/slow flash stays visible (~1 second).
pub const DAMAGE_FLASH_TICKS: u32 = TICK_RATE;

/// Ticks an upgrade flash stays visible (~1 second).
pub const UPGRADE_FLASH_TICKS: u32 = TICK_RATE;
