//! Error types
//!
//! Gameplay never fails: bad harvests and restarts are silent no-ops and
//! win/loss are state. The only hard errors come from round configuration.

use thiserror::Error;

/// Errors raised while loading or validating a [`RoundConfig`](crate::RoundConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Goal must require at least one harvest
    #[error("goal must be at least 1")]
    NonPositiveGoal,
    /// Time limit must be a positive, finite number of seconds
    #[error("time limit must be positive and finite, got {0}")]
    InvalidTimeLimit(f32),
    /// Goal asks for more collectibles than a round generates
    #[error("goal of {goal} exceeds the {available} collectibles in a round")]
    GoalUnreachable { goal: u32, available: u32 },
    /// JSON parsing failed
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// File I/O error
    #[error("config IO error: {0}")]
    Io(#[from] std::io::Error),
}
