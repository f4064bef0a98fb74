//! Session configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gridfall_core::Shape;

/// Well height of the standard game.
pub const DEFAULT_ROWS: usize = 20;
/// Well width of the standard game.
pub const DEFAULT_COLS: usize = 10;
/// Milliseconds between gravity ticks in the standard game.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The well must be able to hold a full piece frame.
    #[error("grid must be at least {min}x{min} cells, got {rows}x{cols}", min = Shape::SIZE)]
    GridTooSmall { rows: usize, cols: usize },
    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,
}

/// Dimensions and pacing for one game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    /// How long the driving loop should wait between `tick` calls. The
    /// session itself advances only when told to; this is advisory pacing.
    pub tick_interval_ms: u64,
}

impl SessionConfig {
    /// The classic 20x10 well at one tick per second.
    pub fn standard() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < Shape::SIZE || self.cols < Shape::SIZE {
            return Err(ConfigError::GridTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::standard()
    }
}
