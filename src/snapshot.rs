//! Structured state export
//!
//! A `Snapshot` is derived purely from `GameState` and is what external
//! tooling (tests, bots, the headless runner) reads instead of poking at the
//! simulation directly.

use serde::{Deserialize, Serialize};

use crate::sim::{CollectibleKind, GameMode, GameState};

pub const COORDINATE_SYSTEM: &str = "origin=(0,0) top-left; +x right; +y down; units pixels";
pub const CONTROLS: &str =
    "Move=Arrow/WASD; Sprint=Shift; Harvest=E (or B); Start/Restart=Enter/Space; Fullscreen=F";
/// Number of active mushrooms listed in a snapshot
pub const MAX_LISTED_COLLECTIBLES: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub stamina: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardView {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectibleView {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    #[serde(rename = "type")]
    pub kind: CollectibleKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub mode: GameMode,
    pub coordinate_system: String,
    pub objective: String,
    pub player: PlayerView,
    pub score: u32,
    pub goal: u32,
    pub combo: u32,
    pub timer_remaining: f64,
    pub near_collectible_id: Option<u32>,
    pub nearest_collectible_id: Option<u32>,
    pub hazards: Vec<HazardView>,
    pub active_mushrooms: Vec<CollectibleView>,
    pub active_mushroom_count: usize,
    pub message: String,
    pub controls: String,
}

/// Round to a fixed number of decimal places
fn round_to(value: f32, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (f64::from(value) * scale).round() / scale
}

impl Snapshot {
    pub fn from_state(state: &GameState) -> Self {
        let p = &state.player;
        Self {
            mode: state.mode,
            coordinate_system: COORDINATE_SYSTEM.to_string(),
            objective: state.config.objective(),
            player: PlayerView {
                x: round_to(p.pos.x, 1),
                y: round_to(p.pos.y, 1),
                vx: round_to(p.vel.x, 1),
                vy: round_to(p.vel.y, 1),
                radius: f64::from(p.radius),
                stamina: round_to(p.stamina, 2),
            },
            score: state.score,
            goal: state.goal(),
            combo: state.combo,
            timer_remaining: round_to(state.time_remaining(), 2),
            near_collectible_id: state.near_target_id,
            nearest_collectible_id: state.nearest_target_id,
            hazards: state
                .hazards
                .iter()
                .map(|h| HazardView {
                    x: f64::from(h.pos.x),
                    y: f64::from(h.pos.y),
                    radius: f64::from(h.radius),
                })
                .collect(),
            active_mushrooms: state
                .active_collectibles()
                .take(MAX_LISTED_COLLECTIBLES)
                .map(|c| CollectibleView {
                    id: c.id,
                    x: round_to(c.pos.x, 1),
                    y: round_to(c.pos.y, 1),
                    radius: round_to(c.radius, 1),
                    kind: c.kind,
                })
                .collect(),
            active_mushroom_count: state.active_collectibles().count(),
            message: state.message.clone(),
            controls: CONTROLS.to_string(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// One-shot JSON export of the current state
pub fn render_game_to_text(state: &GameState) -> serde_json::Result<String> {
    Snapshot::from_state(state).to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::RoundConfig;
    use crate::sim::{TickInput, start_round, tick};

    fn playing() -> GameState {
        let mut state = GameState::new(RoundConfig::default()).unwrap();
        start_round(&mut state);
        state
    }

    #[test]
    fn test_start_snapshot() {
        let state = GameState::new(RoundConfig::default()).unwrap();
        let snap = Snapshot::from_state(&state);
        assert_eq!(snap.mode, GameMode::Start);
        assert_eq!(snap.active_mushroom_count, 0);
        assert!(snap.hazards.is_empty());
        assert_eq!(snap.timer_remaining, 120.0);
        assert_eq!(snap.player.x, 480.0);
        assert_eq!(snap.player.y, 469.8);
    }

    #[test]
    fn test_playing_snapshot_contents() {
        let state = playing();
        let snap = Snapshot::from_state(&state);
        assert_eq!(snap.mode, GameMode::Playing);
        assert_eq!(snap.objective, "collect 3 mushrooms in 120s");
        assert_eq!(snap.hazards.len(), 3);
        assert_eq!(snap.active_mushrooms.len(), MAX_LISTED_COLLECTIBLES);
        assert_eq!(snap.active_mushroom_count, 18);
        assert_eq!(snap.active_mushrooms[0].id, 1);
        assert_eq!(snap.active_mushrooms[2].radius, 12.5);
        assert_eq!(snap.player.stamina, 1.0);
    }

    #[test]
    fn test_collected_are_hidden() {
        let mut state = playing();
        state.collectibles[0].collected = true;
        state.score = 1;
        let snap = Snapshot::from_state(&state);
        assert_eq!(snap.active_mushroom_count, 17);
        assert_eq!(snap.active_mushrooms[0].id, 2);
    }

    #[test]
    fn test_rounding() {
        let mut state = playing();
        tick(&mut state, &TickInput::default(), 0.123_456);
        let snap = Snapshot::from_state(&state);
        assert_eq!(snap.timer_remaining, 119.88);
        assert_eq!(round_to(1.26, 1), 1.3);
        assert_eq!(round_to(0.456, 2), 0.46);
    }

    #[test]
    fn test_json_field_names() {
        let json = render_game_to_text(&playing()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "playing");
        assert_eq!(value["active_mushrooms"][1]["type"], "sun-cap");
        assert!(value["near_collectible_id"].is_null());
        assert!(value["nearest_collectible_id"].is_null());
        assert_eq!(value["controls"], CONTROLS);
        assert_eq!(value["coordinate_system"], COORDINATE_SYSTEM);
    }
}
