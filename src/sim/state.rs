//! Game state and core simulation types
//!
//! `GameState` is the single aggregate the simulation owns. It is created in
//! `Start` mode, replaced wholesale on every restart, and only mutated through
//! the functions in this module's siblings.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::settings::RoundConfig;

/// Current mode of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Title screen, waiting for a start request
    Start,
    /// Active gameplay
    Playing,
    /// Goal reached
    Won,
    /// Time ran out
    Lost,
}

impl GameMode {
    /// Whether a restart request is honoured in this mode
    pub fn accepts_restart(&self) -> bool {
        !matches!(self, GameMode::Playing)
    }
}

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Walking speed (pixels/s)
    pub speed: f32,
    /// Speed while sprinting (pixels/s)
    pub sprint_speed: f32,
    /// Velocity smoothing rate (1/s)
    pub accel: f32,
    /// Damping coefficient
    pub friction: f32,
    /// Sprint resource in [0, 1]
    pub stamina: f32,
    /// Whether the last tick was spent sprinting
    pub sprinting: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Self::spawn_point(),
            vel: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            speed: PLAYER_SPEED,
            sprint_speed: PLAYER_SPRINT_SPEED,
            accel: PLAYER_ACCEL,
            friction: PLAYER_FRICTION,
            stamina: 1.0,
            sprinting: false,
        }
    }
}

impl Player {
    /// Bottom-centre of the wash
    pub fn spawn_point() -> Vec2 {
        Vec2::new(ARENA_WIDTH * 0.5, ARENA_HEIGHT * 0.87)
    }

    /// Smallest and largest allowed centre position
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let inset = self.radius + PLAYER_EDGE_MARGIN;
        (
            Vec2::splat(inset),
            Vec2::new(ARENA_WIDTH - inset, ARENA_HEIGHT - inset),
        )
    }
}

/// Mushroom varieties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    #[serde(rename = "blue-veil")]
    BlueVeil,
    #[serde(rename = "sun-cap")]
    SunCap,
}

impl CollectibleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectibleKind::BlueVeil => "blue-veil",
            CollectibleKind::SunCap => "sun-cap",
        }
    }
}

/// A harvestable mushroom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    /// Unique within a round, never reused
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub kind: CollectibleKind,
    /// Only ever goes false -> true
    pub collected: bool,
}

/// Static toxic patch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub pos: Vec2,
    pub radius: f32,
}

/// Rolling tumbleweed that drifts horizontally and wraps around the arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tumbleweed {
    pub pos: Vec2,
    /// Horizontal velocity (pixels/s)
    pub vel_x: f32,
    pub radius: f32,
    /// Spin phase, cosmetic only
    pub phase: f32,
}

impl Tumbleweed {
    /// Roll forward and wrap past either side of the arena
    pub fn advance(&mut self, dt: f32) {
        self.phase += dt * TUMBLEWEED_SPIN_RATE;
        self.pos.x += self.vel_x * dt;
        if self.pos.x < -TUMBLEWEED_WRAP_MARGIN {
            self.pos.x = ARENA_WIDTH + TUMBLEWEED_WRAP_MARGIN;
        }
        if self.pos.x > ARENA_WIDTH + TUMBLEWEED_WRAP_MARGIN {
            self.pos.x = -TUMBLEWEED_WRAP_MARGIN;
        }
    }
}

/// Complete round state (deterministic, serializable)
///
/// Only constructed through [`GameState::new`], which validates the config.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Current mode
    pub mode: GameMode,
    /// Validated round objective
    pub config: RoundConfig,
    /// Seconds since round start (penalties add, combo refunds subtract)
    pub elapsed: f32,
    /// Harvested collectibles this round
    pub score: u32,
    /// Nearest uncollected collectible if within harvest range
    pub near_target_id: Option<u32>,
    /// Nearest uncollected collectible regardless of range
    pub nearest_target_id: Option<u32>,
    /// Consecutive harvests inside the combo window
    pub combo: u32,
    /// Seconds left before the combo lapses
    pub combo_timer: f32,
    /// Cosmetic shake magnitude
    pub camera_shake: f32,
    /// Advisory line for the HUD
    pub message: String,
    pub player: Player,
    /// Ordered by id (generation order)
    pub collectibles: Vec<Collectible>,
    pub hazards: Vec<Hazard>,
    pub tumbleweeds: Vec<Tumbleweed>,
}

impl GameState {
    /// Create an idle state on the title screen
    pub fn new(config: RoundConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::idle(config))
    }

    /// Build a `Start` state from an already-validated config
    pub(crate) fn idle(config: RoundConfig) -> Self {
        Self {
            mode: GameMode::Start,
            config,
            elapsed: 0.0,
            score: 0,
            near_target_id: None,
            nearest_target_id: None,
            combo: 0,
            combo_timer: 0.0,
            camera_shake: 0.0,
            message: String::new(),
            player: Player::default(),
            collectibles: Vec::new(),
            hazards: Vec::new(),
            tumbleweeds: Vec::new(),
        }
    }

    pub fn goal(&self) -> u32 {
        self.config.goal
    }

    pub fn time_limit(&self) -> f32 {
        self.config.time_limit
    }

    /// Seconds left on the clock, floored at 0
    pub fn time_remaining(&self) -> f32 {
        (self.config.time_limit - self.elapsed).max(0.0)
    }

    /// Uncollected collectibles in generation order
    pub fn active_collectibles(&self) -> impl Iterator<Item = &Collectible> {
        self.collectibles.iter().filter(|c| !c.collected)
    }

    pub fn collected_count(&self) -> u32 {
        self.collectibles.iter().filter(|c| c.collected).count() as u32
    }

    pub fn collectible(&self, id: u32) -> Option<&Collectible> {
        self.collectibles.iter().find(|c| c.id == id)
    }

    /// Add a time penalty
    pub fn add_time(&mut self, seconds: f32) {
        self.elapsed += seconds.max(0.0);
    }

    /// Refund time, never taking `elapsed` below 0
    pub fn refund_time(&mut self, seconds: f32) {
        self.elapsed = (self.elapsed - seconds.max(0.0)).max(0.0);
    }

    /// Decay camera shake linearly toward 0
    pub fn decay_shake(&mut self, dt: f32) {
        self.camera_shake = (self.camera_shake - dt * SHAKE_DECAY).max(0.0);
    }
}
