//! Mesa Harvest - A desert mushroom-harvesting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level generation, motion, hazards, scoring)
//! - `platform`: Input adapters and time drivers (real-time and headless)
//! - `settings`: Round configuration
//! - `snapshot`: Structured state export for tooling and tests

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use error::ConfigError;
pub use settings::RoundConfig;
pub use snapshot::Snapshot;

use glam::Vec2;

/// Game tuning constants
pub mod consts {
    /// Arena dimensions (pixels, origin top-left)
    pub const ARENA_WIDTH: f32 = 960.0;
    pub const ARENA_HEIGHT: f32 = 540.0;

    /// Seed used for every round so layouts are reproducible run-to-run
    pub const ROUND_SEED: u32 = 20_260_212;
    /// Collectibles generated per round (hand-placed ones included)
    pub const COLLECTIBLE_COUNT: u32 = 18;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 14.0;
    pub const PLAYER_SPEED: f32 = 230.0;
    pub const PLAYER_SPRINT_SPEED: f32 = 340.0;
    /// Velocity smoothing rate toward the target velocity (1/s)
    pub const PLAYER_ACCEL: f32 = 14.0;
    /// Damping coefficient applied as `1 / (1 + friction * dt)`
    pub const PLAYER_FRICTION: f32 = 2.0;
    /// Extra clearance kept between the player and the arena edge
    pub const PLAYER_EDGE_MARGIN: f32 = 16.0;

    /// Stamina drain/regen per second while sprinting/not sprinting
    pub const STAMINA_DRAIN: f32 = 0.45;
    pub const STAMINA_REGEN: f32 = 0.25;
    /// Sprint is refused at or below this stamina
    pub const STAMINA_SPRINT_THRESHOLD: f32 = 0.02;

    /// Hazard contact response
    pub const HAZARD_PUSH_STEP: f32 = 3.0;
    pub const HAZARD_VELOCITY_DAMPING: f32 = 0.5;
    /// Seconds added to `elapsed` per second spent inside a hazard
    pub const HAZARD_TIME_PENALTY_RATE: f32 = 1.5;
    pub const HAZARD_SHAKE: f32 = 0.35;

    /// Tumbleweed contact uses a shrunken radius (the sprite is mostly air)
    pub const TUMBLEWEED_CONTACT_SCALE: f32 = 0.68;
    /// Velocity nudge per unit of separation, per second
    pub const TUMBLEWEED_NUDGE: f32 = 18.0;
    pub const TUMBLEWEED_WRAP_MARGIN: f32 = 40.0;
    pub const TUMBLEWEED_SPIN_RATE: f32 = 4.0;

    /// Maximum distance at which a collectible can be harvested
    pub const HARVEST_RANGE: f32 = 42.0;
    pub const HARVEST_SHAKE: f32 = 0.14;

    /// Combo window after each harvest (seconds)
    pub const COMBO_WINDOW: f32 = 4.0;
    /// Seconds refunded from `elapsed` on a combo of 2+
    pub const COMBO_TIME_REFUND: f32 = 0.8;

    /// Camera shake decay per second
    pub const SHAKE_DECAY: f32 = 2.0;

    /// Largest delta the real-time driver forwards to the simulation
    pub const MAX_FRAME_DT: f32 = 0.033;
    /// Fixed sub-step used by the headless driver
    pub const HEADLESS_STEP_MS: f32 = 1000.0 / 60.0;
    /// Headless requests are clamped to this range (milliseconds)
    pub const HEADLESS_MIN_MS: f32 = 1.0;
    pub const HEADLESS_MAX_MS: f32 = 1000.0;
}

/// Eight-way compass name for a direction in screen space (+y down)
pub fn compass_heading(dir: Vec2) -> &'static str {
    const NAMES: [&str; 8] = [
        "east",
        "south-east",
        "south",
        "south-west",
        "west",
        "north-west",
        "north",
        "north-east",
    ];
    if dir.length_squared() == 0.0 {
        return "here";
    }
    let angle = dir.y.atan2(dir.x).rem_euclid(std::f32::consts::TAU);
    let sector = (angle / (std::f32::consts::TAU / 8.0)).round() as usize % 8;
    NAMES[sector]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_heading_screen_space() {
        assert_eq!(compass_heading(Vec2::new(1.0, 0.0)), "east");
        assert_eq!(compass_heading(Vec2::new(0.0, -1.0)), "north");
        assert_eq!(compass_heading(Vec2::new(0.0, 1.0)), "south");
        assert_eq!(compass_heading(Vec2::new(-1.0, -1.0)), "north-west");
        assert_eq!(compass_heading(Vec2::new(1.0, 0.1)), "east");
        assert_eq!(compass_heading(Vec2::ZERO), "here");
    }
}
