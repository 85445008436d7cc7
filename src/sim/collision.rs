//! Hazard and tumbleweed contact resolution
//!
//! Not a rigid-body solver: hazards push the player out a fixed step per tick
//! and bleed off velocity, tumbleweeds only deflect velocity.

use glam::Vec2;

use super::state::{Hazard, Player, Tumbleweed};
use crate::consts::*;

/// Whether two circles overlap (touching does not count)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

/// Outcome of hazard resolution for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HazardContact {
    /// Number of hazards overlapped this tick
    pub hits: u32,
    /// Seconds to add to the round clock
    pub time_penalty: f32,
}

impl HazardContact {
    pub fn any(&self) -> bool {
        self.hits > 0
    }
}

/// Apply every overlapping hazard's penalty to the player
///
/// Each overlap applies independently, so standing in two patches at once
/// costs twice as much.
pub fn resolve_hazards(player: &mut Player, hazards: &[Hazard], dt: f32) -> HazardContact {
    let mut contact = HazardContact::default();
    for hazard in hazards {
        if !circles_overlap(player.pos, player.radius, hazard.pos, hazard.radius) {
            continue;
        }
        let away = (player.pos - hazard.pos).normalize_or_zero();
        player.pos += away * HAZARD_PUSH_STEP;
        player.vel *= HAZARD_VELOCITY_DAMPING;
        contact.hits += 1;
        contact.time_penalty += dt * HAZARD_TIME_PENALTY_RATE;
    }
    contact
}

/// Roll all tumbleweeds forward
pub fn advance_tumbleweeds(tumbleweeds: &mut [Tumbleweed], dt: f32) {
    for tumbleweed in tumbleweeds {
        tumbleweed.advance(dt);
    }
}

/// Deflect the player's velocity away from touching tumbleweeds
///
/// Returns the number of tumbleweeds touched.
pub fn resolve_tumbleweeds(player: &mut Player, tumbleweeds: &[Tumbleweed], dt: f32) -> u32 {
    let mut touched = 0;
    for tumbleweed in tumbleweeds {
        let contact_radius = tumbleweed.radius * TUMBLEWEED_CONTACT_SCALE;
        if !circles_overlap(player.pos, player.radius, tumbleweed.pos, contact_radius) {
            continue;
        }
        let separation = player.pos - tumbleweed.pos;
        player.vel += separation * TUMBLEWEED_NUDGE * dt;
        touched += 1;
    }
    touched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hazard_at(x: f32, y: f32, radius: f32) -> Hazard {
        Hazard {
            pos: Vec2::new(x, y),
            radius,
        }
    }

    #[test]
    fn test_no_contact_outside_radius() {
        let mut player = Player::default();
        player.pos = Vec2::new(100.0, 100.0);
        let hazards = [hazard_at(150.0, 100.0, 36.0)]; // distance 50 == 36 + 14
        let contact = resolve_hazards(&mut player, &hazards, 0.1);
        assert!(!contact.any());
        assert_eq!(player.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_hazard_pushes_and_slows() {
        let mut player = Player::default();
        player.pos = Vec2::new(100.0, 100.0);
        player.vel = Vec2::new(200.0, 0.0);
        let hazards = [hazard_at(130.0, 100.0, 36.0)];

        let contact = resolve_hazards(&mut player, &hazards, 0.1);
        assert_eq!(contact.hits, 1);
        assert!((contact.time_penalty - 0.15).abs() < 1e-6);
        // Pushed directly away from the hazard centre
        assert_eq!(player.pos, Vec2::new(100.0 - HAZARD_PUSH_STEP, 100.0));
        assert_eq!(player.vel, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_overlapping_hazards_stack() {
        let mut player = Player::default();
        player.pos = Vec2::new(100.0, 100.0);
        player.vel = Vec2::new(80.0, 0.0);
        let hazards = [hazard_at(120.0, 100.0, 30.0), hazard_at(80.0, 100.0, 30.0)];

        let contact = resolve_hazards(&mut player, &hazards, 0.1);
        assert_eq!(contact.hits, 2);
        assert!((contact.time_penalty - 0.3).abs() < 1e-6);
        assert_eq!(player.vel, Vec2::new(20.0, 0.0));
        // Opposing pushes cancel out
        assert!((player.pos.x - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_centred_on_hazard_is_not_pushed() {
        let mut player = Player::default();
        player.pos = Vec2::new(50.0, 50.0);
        let contact = resolve_hazards(&mut player, &[hazard_at(50.0, 50.0, 20.0)], 0.1);
        assert_eq!(contact.hits, 1);
        assert_eq!(player.pos, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_tumbleweed_nudges_without_blocking() {
        let mut player = Player::default();
        player.pos = Vec2::new(100.0, 100.0);
        player.vel = Vec2::ZERO;
        let tumbleweeds = [Tumbleweed {
            pos: Vec2::new(110.0, 100.0),
            vel_x: 90.0,
            radius: 18.0,
            phase: 0.0,
        }];
        let touched = resolve_tumbleweeds(&mut player, &tumbleweeds, 0.1);
        assert_eq!(touched, 1);
        assert!(player.vel.x < 0.0);
        assert_eq!(player.vel.y, 0.0);
        assert_eq!(player.pos, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_tumbleweed_contact_uses_shrunken_radius() {
        let mut player = Player::default();
        player.pos = Vec2::new(100.0, 100.0);
        // 14 + 18 = 32 would touch, 14 + 18 * 0.68 = 26.24 does not
        let tumbleweeds = [Tumbleweed {
            pos: Vec2::new(130.0, 100.0),
            vel_x: 0.0,
            radius: 18.0,
            phase: 0.0,
        }];
        assert_eq!(resolve_tumbleweeds(&mut player, &tumbleweeds, 0.1), 0);
        assert_eq!(player.vel, Vec2::ZERO);
    }
}
