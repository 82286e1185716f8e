use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::state::Position;

/// Largest board that still fits a reasonable terminal
pub const MAX_GRID_SIZE: usize = 64;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square game grid
    pub grid_size: usize,
    /// Milliseconds between two simulation ticks
    pub tick_interval_ms: u64,
    /// Head position of the one-cell snake at start and after a reset
    pub initial_head: Position,
    /// Food position at start and after a reset
    pub initial_food: Position,

    // Engagement gate
    /// Minimum final score that makes a run eligible
    pub eligibility_threshold: u32,
    /// Code revealed to eligible runs
    pub redemption_code: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            tick_interval_ms: 150,
            initial_head: Position::new(10, 10),
            initial_food: Position::new(5, 5),
            eligibility_threshold: 10,
            redemption_code: "W3W0KD3T0K".to_string(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject configurations the engine cannot start from
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_size >= 2,
            "grid_size must be at least 2, got {}",
            self.grid_size
        );
        ensure!(
            self.grid_size <= MAX_GRID_SIZE,
            "grid_size must be at most {}, got {}",
            MAX_GRID_SIZE,
            self.grid_size
        );
        ensure!(self.tick_interval_ms > 0, "tick_interval_ms must be positive");
        ensure!(
            self.initial_head.is_within(self.grid_size),
            "initial_head {:?} is outside a {}x{} grid",
            self.initial_head,
            self.grid_size,
            self.grid_size
        );
        ensure!(
            self.initial_food.is_within(self.grid_size),
            "initial_food {:?} is outside a {}x{} grid",
            self.initial_food,
            self.grid_size,
            self.grid_size
        );
        ensure!(
            self.initial_head != self.initial_food,
            "initial_food must not start under the snake"
        );
        Ok(())
    }
}
