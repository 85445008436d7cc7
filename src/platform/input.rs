//! Input adapters
//!
//! Each device keeps its own held-state and produces a `TickInput`; the
//! driver merges them once per tick. Edge-triggered keys come back as
//! [`Command`]s for the caller to apply between ticks.

use std::collections::HashSet;

use crate::sim::{Command, TickInput};

/// Normalise a key name: single characters are case-folded
fn normalize_key(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_lowercase().collect(),
        _ => key.to_string(),
    }
}

/// Held keys, using DOM-style key names ("ArrowLeft", "a", "Shift", " ")
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<String>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; returns a command for edge-triggered keys
    pub fn key_down(&mut self, key: &str) -> Option<Command> {
        let key = normalize_key(key);
        let command = match key.as_str() {
            "e" | "b" => Some(Command::Harvest),
            "Enter" | " " => Some(Command::Restart),
            _ => None,
        };
        self.held.insert(key);
        command
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(&normalize_key(key));
    }

    /// Drop all held keys (focus lost, tab hidden)
    pub fn clear(&mut self) {
        if !self.held.is_empty() {
            log::debug!("Clearing {} held keys", self.held.len());
        }
        self.held.clear();
    }

    fn any(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.held.contains(*k))
    }

    pub fn intent(&self) -> TickInput {
        TickInput {
            up: self.any(&["ArrowUp", "w"]),
            down: self.any(&["ArrowDown", "s"]),
            left: self.any(&["ArrowLeft", "a"]),
            right: self.any(&["ArrowRight", "d"]),
            sprint: self.any(&["Shift"]),
        }
    }
}

/// On-screen controls: a virtual d-pad plus a sprint button
///
/// Harvest/start buttons map straight to [`Command`]s and hold no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
}

impl TouchState {
    /// Set the d-pad from a stick offset (screen space, +y down)
    pub fn set_stick(&mut self, dx: f32, dy: f32) {
        let intent = TickInput::toward(glam::Vec2::new(dx, dy), self.sprint);
        self.up = intent.up;
        self.down = intent.down;
        self.left = intent.left;
        self.right = intent.right;
    }

    pub fn release_stick(&mut self) {
        self.up = false;
        self.down = false;
        self.left = false;
        self.right = false;
    }

    pub fn intent(&self) -> TickInput {
        TickInput {
            up: self.up,
            down: self.down,
            left: self.left,
            right: self.right,
            sprint: self.sprint,
        }
    }
}

/// Merged intent from every device
pub fn merged_intent(keyboard: &KeyboardState, touch: &TouchState) -> TickInput {
    keyboard.intent().merge(touch.intent())
}
