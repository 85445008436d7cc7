//! Harvesting and combo scoring

use serde::{Deserialize, Serialize};

use super::state::{CollectibleKind, GameMode, GameState};
use crate::consts::*;

/// What a harvest request did
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HarvestOutcome {
    /// Wrong mode, nothing in range, or already collected
    Ignored,
    /// Plain harvest
    Harvested { id: u32, kind: CollectibleKind },
    /// Harvest that extended a combo and refunded time
    ComboBoost {
        id: u32,
        kind: CollectibleKind,
        combo: u32,
    },
}

impl HarvestOutcome {
    pub fn succeeded(&self) -> bool {
        !matches!(self, HarvestOutcome::Ignored)
    }
}

/// Try to harvest the collectible currently in range
pub fn harvest(state: &mut GameState) -> HarvestOutcome {
    if state.mode != GameMode::Playing {
        return HarvestOutcome::Ignored;
    }
    let Some(id) = state.near_target_id else {
        return HarvestOutcome::Ignored;
    };
    let Some(target) = state
        .collectibles
        .iter_mut()
        .find(|c| c.id == id && !c.collected)
    else {
        return HarvestOutcome::Ignored;
    };

    target.collected = true;
    let kind = target.kind;
    state.score += 1;
    state.camera_shake = HARVEST_SHAKE;
    state.combo += 1;
    state.combo_timer = COMBO_WINDOW;

    let outcome = if state.combo >= 2 {
        state.refund_time(COMBO_TIME_REFUND);
        state.message = format!("Combo x{}! +{}s", state.combo, COMBO_TIME_REFUND);
        log::debug!("Combo x{} on mushroom {}", state.combo, id);
        HarvestOutcome::ComboBoost {
            id,
            kind,
            combo: state.combo,
        }
    } else {
        state.message = format!("{} harvested!", kind.as_str());
        log::debug!("Harvested mushroom {} ({})", id, kind.as_str());
        HarvestOutcome::Harvested { id, kind }
    };

    // The harvested mushroom can no longer be the target
    super::targeting::update_targets(state);
    super::tick::check_outcome(state);
    outcome
}

/// Count down the combo window, dropping the combo when it lapses
pub fn decay_combo(state: &mut GameState, dt: f32) {
    if state.combo_timer <= 0.0 {
        return;
    }
    state.combo_timer = (state.combo_timer - dt).max(0.0);
    if state.combo_timer == 0.0 {
        state.combo = 0;
    }
}
