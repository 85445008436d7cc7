//! Round configuration
//!
//! Only the round's objective is configurable; the arena layout and tuning
//! live in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::COLLECTIBLE_COUNT;
use crate::error::ConfigError;

/// Objective for a single round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Seconds before the dust storm ends the round
    pub time_limit: f32,
    /// Number of collectibles to harvest
    pub goal: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            time_limit: 120.0,
            goal: 3,
        }
    }
}

impl RoundConfig {
    /// Check that the round can be started and won
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.goal == 0 {
            return Err(ConfigError::NonPositiveGoal);
        }
        if !self.time_limit.is_finite() || self.time_limit <= 0.0 {
            return Err(ConfigError::InvalidTimeLimit(self.time_limit));
        }
        if self.goal > COLLECTIBLE_COUNT {
            return Err(ConfigError::GoalUnreachable {
                goal: self.goal,
                available: COLLECTIBLE_COUNT,
            });
        }
        Ok(())
    }

    /// Parse and validate a config from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded round config from {}: goal={} time_limit={}s",
            path.display(),
            config.goal,
            config.time_limit
        );
        Ok(config)
    }

    /// Human-readable objective line
    pub fn objective(&self) -> String {
        format!("collect {} mushrooms in {}s", self.goal, self.time_limit)
    }
}
