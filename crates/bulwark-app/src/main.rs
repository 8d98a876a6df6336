//! BULWARK headless runner.
//!
//! Spawns the fixed-step game loop and lets the autopilot play a short
//! session, logging the HUD once per simulated second.
//!
//! Usage: `bulwark-app [config.toml]`

use std::path::PathBuf;

use anyhow::Result;
use log::info;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use bulwark_app::autopilot;
use bulwark_app::config::RunnerConfig;
use bulwark_app::game_loop;
use bulwark_app::state::{self, GameLoopCommand};
use bulwark_sim::engine::SimConfig;

fn main() -> Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = RunnerConfig::load(config_path.as_deref())?;

    TermLogger::init(
        config.level_filter(),
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    info!(
        "starting session: seed={} target waves={}",
        config.seed, config.waves
    );

    let latest = state::new_shared_snapshot();
    let cmd_tx = game_loop::spawn_game_loop(SimConfig { seed: config.seed }, latest.clone())?;

    let summary = autopilot::drive(&cmd_tx, &latest, config.waves)?;
    let _ = cmd_tx.send(GameLoopCommand::Shutdown);

    if summary.game_over {
        info!(
            "defeated on wave {} with {} gold",
            summary.wave_reached, summary.gold
        );
    } else {
        info!(
            "survived {} waves with {} gold and {} lives",
            summary.wave_reached, summary.gold, summary.lives
        );
    }
    Ok(())
}
