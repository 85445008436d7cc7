//! Procedural level generation
//!
//! Hazards and tumbleweeds have fixed hand-authored positions so the arena's
//! layout stays readable. Mushrooms beyond the first three are scattered with
//! the seeded RNG and rejection-sampled away from hazards.

use glam::Vec2;

use super::rng::SeededRng;
use super::state::{Collectible, CollectibleKind, Hazard, Tumbleweed};
use crate::consts::*;

/// Inset from every arena edge for generated mushrooms
pub const PLACEMENT_MARGIN: f32 = 90.0;
/// Extra clearance between a generated mushroom and a hazard edge
pub const HAZARD_BUFFER: f32 = 24.0;
/// Resamples allowed after the first candidate before it is accepted anyway
pub const MAX_PLACEMENT_RETRIES: u32 = 14;
/// Draws above this pick a blue-veil, otherwise a sun-cap
pub const BLUE_VEIL_THRESHOLD: f32 = 0.35;

/// Everything a round needs that is placed at round start
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub hazards: Vec<Hazard>,
    pub tumbleweeds: Vec<Tumbleweed>,
    pub collectibles: Vec<Collectible>,
}

/// The three toxic patches
pub fn hazards() -> Vec<Hazard> {
    vec![
        Hazard {
            pos: Vec2::new(200.0, 160.0),
            radius: 36.0,
        },
        Hazard {
            pos: Vec2::new(760.0, 280.0),
            radius: 40.0,
        },
        Hazard {
            pos: Vec2::new(480.0, 410.0),
            radius: 42.0,
        },
    ]
}

pub fn tumbleweeds() -> Vec<Tumbleweed> {
    vec![
        Tumbleweed {
            pos: Vec2::new(130.0, 220.0),
            vel_x: 90.0,
            radius: 18.0,
            phase: 0.3,
        },
        Tumbleweed {
            pos: Vec2::new(840.0, 360.0),
            vel_x: -110.0,
            radius: 14.0,
            phase: 1.4,
        },
    ]
}

/// Mushrooms near the spawn point so the first harvests are quick
fn starter_collectibles() -> Vec<Collectible> {
    let starter = |id, x, y, radius, kind| Collectible {
        id,
        pos: Vec2::new(x, y),
        radius,
        kind,
        collected: false,
    };
    vec![
        starter(1, 422.0, 462.0, 14.0, CollectibleKind::BlueVeil),
        starter(2, 520.0, 452.0, 13.0, CollectibleKind::SunCap),
        starter(3, 580.0, 418.0, 12.5, CollectibleKind::BlueVeil),
    ]
}

/// Whether a point is inside any hazard's exclusion buffer
pub fn is_near_hazard(pos: Vec2, hazards: &[Hazard], clearance: f32) -> bool {
    hazards
        .iter()
        .any(|h| pos.distance(h.pos) < h.radius + clearance)
}

fn sample_position(rng: &mut SeededRng) -> Vec2 {
    let x = rng.range(PLACEMENT_MARGIN, ARENA_WIDTH - PLACEMENT_MARGIN);
    let y = rng.range(PLACEMENT_MARGIN, ARENA_HEIGHT - PLACEMENT_MARGIN);
    Vec2::new(x, y)
}

/// Pick a position away from hazards
///
/// After `MAX_PLACEMENT_RETRIES` rejected resamples the last candidate is
/// kept even if it sits inside a hazard buffer.
pub fn place_position(rng: &mut SeededRng, hazards: &[Hazard], player_radius: f32) -> Vec2 {
    let clearance = player_radius + HAZARD_BUFFER;
    let mut pos = sample_position(rng);
    let mut tries = 0;
    while is_near_hazard(pos, hazards, clearance) && tries < MAX_PLACEMENT_RETRIES {
        pos = sample_position(rng);
        tries += 1;
    }
    if tries == MAX_PLACEMENT_RETRIES && is_near_hazard(pos, hazards, clearance) {
        log::debug!("Placement retries exhausted, accepting ({:.1}, {:.1})", pos.x, pos.y);
    }
    pos
}

/// Generate one mushroom: position, then radius, then kind
pub fn generate_collectible(
    id: u32,
    rng: &mut SeededRng,
    hazards: &[Hazard],
    player_radius: f32,
) -> Collectible {
    let pos = place_position(rng, hazards, player_radius);
    let radius = 12.0 + rng.next_f32() * 4.0;
    let kind = if rng.next_f32() > BLUE_VEIL_THRESHOLD {
        CollectibleKind::BlueVeil
    } else {
        CollectibleKind::SunCap
    };
    Collectible {
        id,
        pos,
        radius,
        kind,
        collected: false,
    }
}

/// Build the full level for a round
pub fn generate_level(seed: u32) -> Level {
    let mut rng = SeededRng::new(seed);
    let hazards = hazards();
    let tumbleweeds = tumbleweeds();

    let mut collectibles = starter_collectibles();
    let first_generated = collectibles.len() as u32 + 1;
    for id in first_generated..=COLLECTIBLE_COUNT {
        collectibles.push(generate_collectible(id, &mut rng, &hazards, PLAYER_RADIUS));
    }

    log::debug!(
        "Generated level (seed {}): {} hazards, {} tumbleweeds, {} mushrooms",
        rng.seed(),
        hazards.len(),
        tumbleweeds.len(),
        collectibles.len()
    );

    Level {
        hazards,
        tumbleweeds,
        collectibles,
    }
}
