//! Simulation tick and round lifecycle
//!
//! `tick` is the single entry point that advances a round. Harvest and
//! restart requests are applied between ticks through [`apply_command`].

use serde::{Deserialize, Serialize};

use super::collision::{advance_tumbleweeds, resolve_hazards, resolve_tumbleweeds};
use super::harvest::{HarvestOutcome, decay_combo, harvest};
use super::level::generate_level;
use super::motion;
use super::state::{GameMode, GameState, Player};
use super::targeting::{guidance_message, update_targets};
use crate::consts::*;

pub const MSG_HAZARD: &str = "Toxic patch! You lost time.";

/// Movement intent for a single tick, already merged from all input devices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Sprint while moving (costs stamina)
    pub sprint: bool,
}

impl TickInput {
    /// Combine two intents (a flag held on either device counts)
    pub fn merge(self, other: TickInput) -> TickInput {
        TickInput {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
            sprint: self.sprint || other.sprint,
        }
    }

    /// Closest 8-way intent for a direction vector
    pub fn toward(dir: glam::Vec2, sprint: bool) -> TickInput {
        const DEADZONE: f32 = 0.38;
        let dir = dir.normalize_or_zero();
        TickInput {
            up: dir.y < -DEADZONE,
            down: dir.y > DEADZONE,
            left: dir.x < -DEADZONE,
            right: dir.x > DEADZONE,
            sprint,
        }
    }
}

/// Discrete requests delivered between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Harvest,
    Restart,
}

/// Result of applying a [`Command`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandOutcome {
    Harvest(HarvestOutcome),
    /// Whether a new round actually started
    Restart(bool),
}

/// Apply a discrete request synchronously
pub fn apply_command(state: &mut GameState, command: Command) -> CommandOutcome {
    match command {
        Command::Harvest => CommandOutcome::Harvest(harvest(state)),
        Command::Restart => CommandOutcome::Restart(request_restart(state)),
    }
}

/// Start a fresh round if the current mode allows it
///
/// Ignored while a round is in progress.
pub fn request_restart(state: &mut GameState) -> bool {
    if !state.mode.accepts_restart() {
        return false;
    }
    start_round(state);
    true
}

/// Replace the whole aggregate with a new round on the fixed seed
pub fn start_round(state: &mut GameState) {
    let config = state.config;
    let level = generate_level(ROUND_SEED);

    *state = GameState::idle(config);
    state.mode = GameMode::Playing;
    state.message = format!("Harvest {} mushrooms before the storm rolls in.", config.goal);
    state.player = Player::default();
    state.hazards = level.hazards;
    state.tumbleweeds = level.tumbleweeds;
    state.collectibles = level.collectibles;

    log::info!(
        "Round started: goal={} time_limit={}s mushrooms={}",
        config.goal,
        config.time_limit,
        state.collectibles.len()
    );
}

/// Evaluate win/loss; win takes priority over loss
pub fn check_outcome(state: &mut GameState) {
    if state.mode != GameMode::Playing {
        return;
    }
    if state.score >= state.goal() {
        state.mode = GameMode::Won;
        state.message.clear();
        log::info!("Round won: score={} elapsed={:.2}s", state.score, state.elapsed);
        return;
    }
    if state.elapsed >= state.time_limit() {
        state.mode = GameMode::Lost;
        state.message.clear();
        log::info!("Round lost: score={}/{}", state.score, state.goal());
    }
}

/// Advance the round by `dt` seconds
///
/// Does nothing outside `Playing`. Negative or non-finite deltas are treated
/// as zero.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if state.mode != GameMode::Playing {
        return;
    }
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    state.elapsed += dt;
    state.decay_shake(dt);
    decay_combo(state, dt);

    motion::integrate(&mut state.player, input, dt);

    advance_tumbleweeds(&mut state.tumbleweeds, dt);
    resolve_tumbleweeds(&mut state.player, &state.tumbleweeds, dt);
    let contact = resolve_hazards(&mut state.player, &state.hazards, dt);
    if contact.any() {
        motion::clamp_to_arena(&mut state.player);
        state.add_time(contact.time_penalty);
        state.camera_shake = HAZARD_SHAKE;
        log::trace!("Hazard contact x{} (+{:.3}s)", contact.hits, contact.time_penalty);
    }

    update_targets(state);
    state.message = if contact.any() {
        MSG_HAZARD.to_string()
    } else {
        guidance_message(state)
    };

    check_outcome(state);
}
