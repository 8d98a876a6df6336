//! Runner configuration, loaded from an optional TOML file.

use std::fs;
use std::path::Path;

use anyhow::Context;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Settings for one headless run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Simulation RNG seed.
    pub seed: u64,
    /// Stop after clearing this many waves.
    pub waves: u32,
    /// Log level: off, error, warn, info, debug, trace.
    pub log_level: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            waves: 3,
            log_level: "info".into(),
        }
    }
}

impl RunnerConfig {
    /// Load from a TOML file, or fall back to defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Log level filter for the logger setup.
    pub fn level_filter(&self) -> LevelFilter {
        match self.log_level.to_lowercase().as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        }
    }
}
