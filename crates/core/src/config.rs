//! Engine construction parameters

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{GameMode, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

pub const MIN_WIDTH: u16 = 6;
pub const MIN_HEIGHT: u16 = 4;
pub const MAX_DIMENSION: u16 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub mode: GameMode,
    pub width: u16,
    pub height: u16,
    /// Fixed seed for a reproducible game; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_WIDTH..=MAX_DIMENSION).contains(&self.width) {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        if !(MIN_HEIGHT..=MAX_DIMENSION).contains(&self.height) {
            return Err(ConfigError::InvalidHeight(self.height));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Normal,
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            seed: None,
        }
    }
}
