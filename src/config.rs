//! Tunables for the policy and the turn loop.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::drones::RadarVertical;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub policy: PolicyConfig,
    pub timing: TimingConfig,
    /// Seed for drone display names.
    pub name_seed: u64,
}

/// Thresholds driving the scan-then-surface cycle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Memory size at which a drone stops exploring and heads up to save.
    pub memory_threshold: usize,
    /// Depth at or above which scans are saved.
    pub surface_y: i32,
    /// Per-axis distance of a radar-guided move.
    pub step: i32,
    /// Light is switched on while battery is strictly above this.
    pub light_battery_threshold: i32,
    pub radar_vertical: RadarVertical,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub max_turns: u32,
    pub first_turn_budget_ms: u64,
    pub turn_budget_ms: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            policy: PolicyConfig::default(),
            timing: TimingConfig::default(),
            name_seed: 42,
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            memory_threshold: 3,
            surface_y: 500,
            step: 600,
            light_battery_threshold: 5,
            radar_vertical: RadarVertical::TopPositive,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            max_turns: 200,
            first_turn_budget_ms: 1000,
            turn_budget_ms: 50,
        }
    }
}

impl TimingConfig {
    /// Budget for the `turn`-th turn, counting from 1.
    pub fn budget_for(&self, turn: u32) -> Duration {
        if turn <= 1 {
            Duration::from_millis(self.first_turn_budget_ms)
        } else {
            Duration::from_millis(self.turn_budget_ms)
        }
    }
}

impl BotConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}
