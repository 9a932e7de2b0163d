//! Runtime configuration loaded from `~/.dino-runner/config.json`.
//!
//! Every field has a default, so a partial file only overrides what it names
//! and a missing file yields [`GameConfig::default`].

use super::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What a jump request does while a jump arc is already in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpRetrigger {
    /// Taps are ignored until the player lands.
    #[default]
    Ignore,
    /// Start a fresh arc from the current height.
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub frame_interval_ms: u64,
    pub jump_duration_ms: u64,
    pub obstacle_cycle_ms: u64,
    pub obstacle_delay_ms: u64,
    /// Hold the obstacle for `obstacle_delay_ms` before every sweep instead
    /// of only the first one.
    pub obstacle_delay_each_cycle: bool,
    pub jump_retrigger: JumpRetrigger,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: FRAME_INTERVAL_MS,
            jump_duration_ms: JUMP_DURATION_MS,
            obstacle_cycle_ms: OBSTACLE_CYCLE_MS,
            obstacle_delay_ms: OBSTACLE_DELAY_MS,
            obstacle_delay_each_cycle: false,
            jump_retrigger: JumpRetrigger::Ignore,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("`{field}` must be greater than zero")]
    ZeroDuration { field: &'static str },
    #[error(
        "frame interval {0}ms is outside {min}..={max}ms",
        min = MIN_FRAME_INTERVAL_MS,
        max = MAX_FRAME_INTERVAL_MS
    )]
    FrameIntervalOutOfRange(u64),
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FRAME_INTERVAL_MS..=MAX_FRAME_INTERVAL_MS).contains(&self.frame_interval_ms) {
            return Err(ConfigError::FrameIntervalOutOfRange(self.frame_interval_ms));
        }
        if self.jump_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "jump_duration_ms",
            });
        }
        if self.obstacle_cycle_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "obstacle_cycle_ms",
            });
        }
        Ok(())
    }

    /// Return this config if it validates, otherwise log why and fall back
    /// to the defaults.
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Invalid config ({}), using defaults", e);
                Self::default()
            }
        }
    }
}
