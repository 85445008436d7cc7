//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through an explicit `dt`
//! - Seeded RNG only, and only at round start
//! - Stable iteration order (collectibles in generation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod harvest;
pub mod level;
pub mod motion;
pub mod rng;
pub mod state;
pub mod targeting;
pub mod tick;

pub use collision::{HazardContact, resolve_hazards, resolve_tumbleweeds};
pub use harvest::{HarvestOutcome, harvest};
pub use level::{Level, generate_level};
pub use rng::SeededRng;
pub use state::{
    Collectible, CollectibleKind, GameMode, GameState, Hazard, Player, Tumbleweed,
};
pub use targeting::{Acquisition, guidance_direction};
pub use tick::{Command, CommandOutcome, TickInput, apply_command, request_restart, start_round, tick};
