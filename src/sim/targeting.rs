//! Nearest-collectible acquisition and guidance

use glam::Vec2;

use super::state::{Collectible, GameState};
use crate::compass_heading;
use crate::consts::HARVEST_RANGE;

pub const MSG_IN_RANGE: &str = "Press E to harvest nearby mushroom.";
pub const MSG_SEARCH: &str = "Search the wash for rare mushrooms.";

/// Result of a nearest-target scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Acquisition {
    /// Closest uncollected collectible
    pub nearest_id: Option<u32>,
    /// Same collectible if it is within harvest range
    pub near_id: Option<u32>,
    pub distance: f32,
}

/// Find the closest uncollected collectible to `pos`
///
/// Ties keep the earliest collectible in generation order.
pub fn find_nearest(pos: Vec2, collectibles: &[Collectible]) -> Option<(&Collectible, f32)> {
    let mut best: Option<(&Collectible, f32)> = None;
    for c in collectibles.iter().filter(|c| !c.collected) {
        let dist = pos.distance(c.pos);
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((c, dist));
        }
    }
    best
}

/// Classify the nearest collectible as in range or only nearest
pub fn acquire(pos: Vec2, collectibles: &[Collectible]) -> Acquisition {
    match find_nearest(pos, collectibles) {
        Some((c, dist)) => Acquisition {
            nearest_id: Some(c.id),
            near_id: (dist <= HARVEST_RANGE).then_some(c.id),
            distance: dist,
        },
        None => Acquisition {
            nearest_id: None,
            near_id: None,
            distance: f32::INFINITY,
        },
    }
}

/// Unit vector from the player toward the nearest collectible, if any remain
pub fn guidance_direction(state: &GameState) -> Option<Vec2> {
    let id = state.nearest_target_id?;
    let target = state.collectible(id)?;
    Some((target.pos - state.player.pos).normalize_or_zero())
}

/// Advisory line for the current targeting state
pub fn guidance_message(state: &GameState) -> String {
    if state.near_target_id.is_some() {
        return MSG_IN_RANGE.to_string();
    }
    match guidance_direction(state) {
        Some(dir) => format!(
            "Search the wash: nearest mushroom lies {}.",
            compass_heading(dir)
        ),
        None => MSG_SEARCH.to_string(),
    }
}

/// Refresh `near_target_id`/`nearest_target_id` from the player's position
pub fn update_targets(state: &mut GameState) -> Acquisition {
    let acquisition = acquire(state.player.pos, &state.collectibles);
    state.nearest_target_id = acquisition.nearest_id;
    state.near_target_id = acquisition.near_id;
    acquisition
}
