//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the board layout, the wave
//! and economy state, processes player commands at tick boundaries, runs
//! all systems in a fixed order, and produces `GameStateSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::commands::GameCommand;
use bulwark_core::components::{Enemy, Tower, TowerState, UnitId, UpgradeFlash};
use bulwark_core::constants::*;
use bulwark_core::enums::{GamePhase, TowerKind};
use bulwark_core::events::GameEvent;
use bulwark_core::state::GameStateSnapshot;
use bulwark_core::types::SimTime;
use bulwark_grid::Layout;

use crate::systems;
use crate::systems::wave_spawner::WaveState;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same commands = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    layout: Layout,
    wave: WaveState,
    gold: u32,
    lives: u32,
    upgrades_unlocked: bool,
    damage_upgrade_unlocked: bool,
    next_unit_id: u32,
    command_queue: VecDeque<GameCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let layout = bulwark_grid::generate(&mut rng);
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            layout,
            wave: WaveState::default(),
            gold: STARTING_GOLD,
            lives: STARTING_LIVES,
            upgrades_unlocked: false,
            damage_upgrade_unlocked: false,
            next_unit_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: GameCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = GameCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Build a snapshot of the current state without advancing anything.
    /// Pure: repeated calls yield identical output.
    pub fn snapshot(&self) -> GameStateSnapshot {
        self.build_snapshot(self.events.clone())
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current gold balance.
    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// Get the current lives count.
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Get the current wave number.
    pub fn wave_number(&self) -> u32 {
        self.wave.number
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the board layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Jump the wave counter (for tests that exercise late-game unlocks).
    #[cfg(test)]
    pub fn force_wave(&mut self, number: u32) {
        self.wave.number = number;
        self.refresh_unlocks();
    }

    /// Override the gold balance (for tests).
    #[cfg(test)]
    pub fn set_gold(&mut self, gold: u32) {
        self.gold = gold;
    }

    /// Override the lives count (for tests).
    #[cfg(test)]
    pub fn set_lives(&mut self, lives: u32) {
        self.lives = lives;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Invalid commands are no-ops.
    fn handle_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::StartGame => {
                if self.phase == GamePhase::Idle {
                    self.phase = GamePhase::Active;
                }
            }
            GameCommand::StartNextWave => {
                if self.phase == GamePhase::Active && !self.wave.in_progress {
                    self.start_next_wave();
                }
            }
            GameCommand::PlaceTower { kind, x, y } => self.place_tower(kind, x, y),
            GameCommand::UpgradeTowerRange { tower } => self.upgrade_tower_range(tower),
            GameCommand::UpgradeTowerDamage { tower } => self.upgrade_tower_damage(tower),
            GameCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            GameCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            GameCommand::Restart => self.restart(),
        }
    }

    /// Begin the next wave and roll unlocks forward.
    fn start_next_wave(&mut self) {
        self.wave.begin(self.wave.number + 1);
        self.refresh_unlocks();
        self.events.push(GameEvent::WaveStarted {
            wave: self.wave.number,
            quota: self.wave.quota,
        });
    }

    /// Unlocks are monotonic: thresholds only ever switch flags on.
    fn refresh_unlocks(&mut self) {
        if self.wave.number >= UPGRADE_UNLOCK_WAVE {
            self.upgrades_unlocked = true;
        }
        if self.wave.number >= DAMAGE_UPGRADE_UNLOCK_WAVE {
            self.damage_upgrade_unlocked = true;
        }
    }

    /// Attempt a tower placement. Silently rejects a locked kind, an
    /// occupied or off-board cell, and insufficient gold.
    fn place_tower(&mut self, kind: TowerKind, x: f32, y: f32) {
        if self.phase != GamePhase::Active {
            return;
        }
        if kind.unlock_wave() > self.wave.number {
            return;
        }
        let spec = kind.spec();
        if self.gold < spec.cost {
            return;
        }
        let Some((col, row)) = self.layout.grid.cell_at(x, y) else {
            return;
        };
        if !self.layout.grid.place_tower(col, row) {
            return;
        }

        let center = self.layout.grid.cell_center(col as i32, row as i32);
        let tower = world_setup::spawn_tower(&mut self.world, kind, center, &mut self.next_unit_id);
        self.gold -= spec.cost;
        self.events.push(GameEvent::TowerPlaced { tower, kind });
    }

    /// Buy a range upgrade: +1 cell of range for a flat cost.
    fn upgrade_tower_range(&mut self, tower: u32) {
        if self.phase != GamePhase::Active || !self.upgrades_unlocked {
            return;
        }
        if self.gold < RANGE_UPGRADE_COST {
            return;
        }
        let Some(entity) = self.find_tower(tower) else {
            return;
        };
        if let Ok(mut state) = self.world.get::<&mut TowerState>(entity) {
            state.range += RANGE_UPGRADE_INCREASE;
        } else {
            return;
        }
        if let Ok(mut flash) = self.world.get::<&mut UpgradeFlash>(entity) {
            flash.range_ticks = UPGRADE_FLASH_TICKS;
        }
        self.gold -= RANGE_UPGRADE_COST;
        self.events.push(GameEvent::RangeUpgraded { tower });
    }

    /// Buy a damage upgrade: +base damage for the kind's base cost.
    fn upgrade_tower_damage(&mut self, tower: u32) {
        if self.phase != GamePhase::Active || !self.damage_upgrade_unlocked {
            return;
        }
        let Some(entity) = self.find_tower(tower) else {
            return;
        };
        let (cost, increase) = match self.world.get::<&TowerState>(entity) {
            Ok(state) => {
                let spec = state.kind.spec();
                (spec.cost, spec.damage)
            }
            Err(_) => return,
        };
        if self.gold < cost {
            return;
        }
        if let Ok(mut state) = self.world.get::<&mut TowerState>(entity) {
            state.damage += increase;
        }
        if let Ok(mut flash) = self.world.get::<&mut UpgradeFlash>(entity) {
            flash.damage_ticks = UPGRADE_FLASH_TICKS;
        }
        self.gold -= cost;
        self.events.push(GameEvent::DamageUpgraded { tower });
    }

    fn find_tower(&self, tower: u32) -> Option<hecs::Entity> {
        let mut query = self.world.query::<(&Tower, &UnitId)>();
        query
            .iter()
            .find(|(_, (_, id))| id.0 == tower)
            .map(|(entity, _)| entity)
    }

    /// Reinitialize the whole session: fresh layout, counters, economy.
    fn restart(&mut self) {
        self.world.clear();
        self.layout = bulwark_grid::generate(&mut self.rng);
        self.wave = WaveState::default();
        self.gold = STARTING_GOLD;
        self.lives = STARTING_LIVES;
        self.upgrades_unlocked = false;
        self.damage_upgrade_unlocked = false;
        self.next_unit_id = 0;
        self.time = SimTime::default();
        self.events.clear();
        self.phase = GamePhase::Active;
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Wave spawning and completion.
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.wave,
            &self.layout.waypoints,
            &mut self.next_unit_id,
            &mut self.events,
        );
        // 2. Enemy motion, breaches, deaths.
        let outcome = systems::movement::run(
            &mut self.world,
            &self.layout.waypoints,
            &mut self.gold,
            &mut self.lives,
            &mut self.next_unit_id,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        if outcome.game_over {
            self.handle_game_over();
            return;
        }
        // 3. Tower cooldowns, targeting, attacks.
        systems::tower_combat::run(&mut self.world, &mut self.next_unit_id, &mut self.events);
        // 4. Cosmetic shots and explosions.
        systems::projectiles::run(&mut self.world, &mut self.despawn_buffer);
        // 5. Death animations.
        systems::death_animations::run(&mut self.world, &mut self.despawn_buffer);
        // 6. Presentation flash expiry.
        systems::flashes::run(&mut self.world);
    }

    /// Lives hit zero: clear the board of enemies and end the session.
    fn handle_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.wave.in_progress = false;

        self.despawn_buffer.clear();
        for (entity, _enemy) in self.world.query_mut::<&Enemy>() {
            self.despawn_buffer.push(entity);
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }

        self.events.push(GameEvent::GameOver {
            wave: self.wave.number,
        });
    }

    fn build_snapshot(&self, events: Vec<GameEvent>) -> GameStateSnapshot {
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            &self.wave,
            self.gold,
            self.lives,
            &self.layout,
            self.upgrades_unlocked,
            self.damage_upgrade_unlocked,
            events,
        )
    }
}
