//! Scripted operator for headless runs.
//!
//! Polls the latest snapshot, buys towers along the path before each wave,
//! and requests waves until the target count clears or the session ends.

use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use anyhow::bail;
use log::{debug, info};

use bulwark_core::commands::GameCommand;
use bulwark_core::enums::{Cell, GamePhase, TowerKind};
use bulwark_core::state::GameStateSnapshot;

use crate::state::{GameLoopCommand, SharedSnapshot};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Wall-clock cap on a run; a healthy session clears waves well inside it.
const RUN_DEADLINE: Duration = Duration::from_secs(600);

/// Result of a completed run.
#[derive(Debug)]
pub struct RunSummary {
    /// Highest wave number reached.
    pub wave_reached: u32,
    pub gold: u32,
    pub lives: u32,
    pub game_over: bool,
}

/// Drive the game loop until `target_waves` are cleared or the session ends.
pub fn drive(
    cmd_tx: &Sender<GameLoopCommand>,
    latest: &SharedSnapshot,
    target_waves: u32,
) -> anyhow::Result<RunSummary> {
    send(cmd_tx, GameCommand::StartGame)?;

    let deadline = Instant::now() + RUN_DEADLINE;
    let mut last_logged_sec = u64::MAX;
    let mut requested_wave = 0u32;

    loop {
        if Instant::now() > deadline {
            bail!("run did not finish within {RUN_DEADLINE:?}");
        }
        std::thread::sleep(POLL_INTERVAL);

        let snapshot = match latest.lock() {
            Ok(slot) => slot.clone(),
            Err(_) => bail!("game loop thread poisoned the snapshot slot"),
        };
        let Some(snapshot) = snapshot else {
            continue;
        };

        log_hud(&snapshot, &mut last_logged_sec);

        if snapshot.phase == GamePhase::GameOver {
            info!("game over on wave {}", snapshot.wave.number);
            return Ok(summarize(&snapshot, true));
        }

        if snapshot.wave.next_wave_ready {
            if snapshot.wave.number >= target_waves {
                debug!(
                    "final snapshot: {}",
                    serde_json::to_string(&snapshot).unwrap_or_default()
                );
                return Ok(summarize(&snapshot, false));
            }
            // Guard against re-sending while the previous request is still
            // in flight to the loop thread.
            if snapshot.wave.number >= requested_wave {
                buy_towers(cmd_tx, &snapshot)?;
                send(cmd_tx, GameCommand::StartNextWave)?;
                requested_wave = snapshot.wave.number + 1;
            }
        }
    }
}

fn summarize(snapshot: &GameStateSnapshot, game_over: bool) -> RunSummary {
    RunSummary {
        wave_reached: snapshot.wave.number,
        gold: snapshot.gold,
        lives: snapshot.lives,
        game_over,
    }
}

fn log_hud(snapshot: &GameStateSnapshot, last_logged_sec: &mut u64) {
    let sec = snapshot.time.elapsed_secs as u64;
    if snapshot.phase == GamePhase::Active && *last_logged_sec != sec {
        *last_logged_sec = sec;
        info!(
            "t={sec:>4}s wave {} gold {} lives {} enemies {} towers {}",
            snapshot.wave.number,
            snapshot.gold,
            snapshot.lives,
            snapshot.enemies.len(),
            snapshot.towers.len(),
        );
    }
}

/// Spend the visible gold on cannons next to the path.
fn buy_towers(
    cmd_tx: &Sender<GameLoopCommand>,
    snapshot: &GameStateSnapshot,
) -> anyhow::Result<()> {
    let kind = TowerKind::Cannon;
    let cost = kind.spec().cost;
    let mut budget = snapshot.gold;

    for (x, y) in placement_spots(snapshot) {
        if budget < cost {
            break;
        }
        send(cmd_tx, GameCommand::PlaceTower { kind, x, y })?;
        budget -= cost;
    }
    Ok(())
}

/// Pixel centers of empty cells orthogonally adjacent to the path.
fn placement_spots(snapshot: &GameStateSnapshot) -> Vec<(f32, f32)> {
    let grid = &snapshot.grid;
    let cell = |col: i64, row: i64| -> Option<Cell> {
        if col < 0 || row < 0 || col >= grid.cols as i64 || row >= grid.rows as i64 {
            return None;
        }
        Some(grid.cells[row as usize * grid.cols + col as usize])
    };

    let mut spots = Vec::new();
    for row in 0..grid.rows as i64 {
        for col in 0..grid.cols as i64 {
            if cell(col, row) != Some(Cell::Empty) {
                continue;
            }
            let near_path = [(1i64, 0i64), (-1, 0), (0, 1), (0, -1)]
                .into_iter()
                .any(|(dc, dr)| cell(col + dc, row + dr) == Some(Cell::Path));
            if near_path {
                spots.push((
                    col as f32 * grid.cell_size + grid.cell_size / 2.0,
                    row as f32 * grid.cell_size + grid.cell_size / 2.0,
                ));
            }
        }
    }
    spots
}

fn send(cmd_tx: &Sender<GameLoopCommand>, command: GameCommand) -> anyhow::Result<()> {
    cmd_tx
        .send(GameLoopCommand::Command(command))
        .map_err(|_| anyhow::anyhow!("game loop thread is gone"))
}
