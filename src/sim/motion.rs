//! Player motion integration
//!
//! Velocity eases toward the input's target velocity (bounded so it never
//! overshoots in one tick), is damped by `1 / (1 + friction * dt)`, and then
//! integrates into position clamped to the arena.

use glam::Vec2;

use super::state::Player;
use super::tick::TickInput;
use crate::consts::*;

/// Unit movement direction from the four directional flags (zero when idle)
pub fn input_direction(input: &TickInput) -> Vec2 {
    let x = f32::from(u8::from(input.right)) - f32::from(u8::from(input.left));
    let y = f32::from(u8::from(input.down)) - f32::from(u8::from(input.up));
    Vec2::new(x, y).normalize_or_zero()
}

/// Update stamina and decide whether this tick is a sprint
pub fn update_stamina(player: &mut Player, wants_sprint: bool, moving: bool, dt: f32) -> bool {
    let sprinting = wants_sprint && moving && player.stamina > STAMINA_SPRINT_THRESHOLD;
    if sprinting {
        player.stamina -= STAMINA_DRAIN * dt;
    } else {
        player.stamina += STAMINA_REGEN * dt;
    }
    player.stamina = player.stamina.clamp(0.0, 1.0);
    player.sprinting = sprinting;
    sprinting
}

/// Advance the player one tick
pub fn integrate(player: &mut Player, input: &TickInput, dt: f32) {
    let dir = input_direction(input);
    let moving = dir != Vec2::ZERO;
    let sprinting = update_stamina(player, input.sprint, moving, dt);

    let speed = if sprinting {
        player.sprint_speed
    } else {
        player.speed
    };
    let target_vel = dir * speed;

    let blend = (player.accel * dt).min(1.0);
    player.vel += (target_vel - player.vel) * blend;
    player.vel /= 1.0 + player.friction * dt;

    player.pos += player.vel * dt;
    clamp_to_arena(player);
}

/// Keep the player's body inside the arena
pub fn clamp_to_arena(player: &mut Player) {
    let (min, max) = player.bounds();
    player.pos = player.pos.clamp(min, max);
}
