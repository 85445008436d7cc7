//! Time drivers
//!
//! Both drivers feed the same [`tick`]:
//! - real-time: one tick per frame with the delta clamped to `MAX_FRAME_DT`
//! - headless: a millisecond request split into whole ~1/60 s sub-steps, so
//!   the result does not depend on how the caller chunks time

use crate::consts::*;
use crate::sim::{GameState, TickInput, tick};

/// Advance one real-time frame; returns the delta actually applied
pub fn step_realtime(state: &mut GameState, input: &TickInput, dt: f32) -> f32 {
    let dt = if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    };
    tick(state, input, dt);
    dt
}

/// Advance by `ms` milliseconds in fixed sub-steps; returns the step count
///
/// The request is clamped to `[HEADLESS_MIN_MS, HEADLESS_MAX_MS]`.
pub fn advance_time(state: &mut GameState, input: &TickInput, ms: f32) -> u32 {
    let ms = if ms.is_nan() { HEADLESS_MIN_MS } else { ms };
    let clamped = ms.clamp(HEADLESS_MIN_MS, HEADLESS_MAX_MS);
    let steps = ((clamped / HEADLESS_STEP_MS).round() as u32).max(1);
    // Dividing once keeps dt bit-identical for every request that is a whole
    // number of 1/60 s steps
    let dt = clamped / (steps as f32 * 1000.0);
    for _ in 0..steps {
        tick(state, input, dt);
    }
    steps
}

/// Turns frame timestamps into clamped deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta in seconds since the previous frame, clamped to `MAX_FRAME_DT`
    pub fn frame(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => HEADLESS_STEP_MS / 1000.0,
        };
        self.last_ms = Some(now_ms);
        dt.clamp(0.0, MAX_FRAME_DT)
    }

    /// Forget the last timestamp (e.g. after the tab was hidden)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::RoundConfig;
    use crate::sim::{GameMode, start_round};
    use proptest::prelude::*;

    fn playing() -> GameState {
        let mut state = GameState::new(RoundConfig::default()).unwrap();
        start_round(&mut state);
        state
    }

    fn walk_right_up() -> TickInput {
        TickInput {
            right: true,
            up: true,
            ..Default::default()
        }
    }

    fn assert_same(a: &GameState, b: &GameState) {
        assert!((a.elapsed - b.elapsed).abs() < 1e-4);
        assert!(a.player.pos.distance(b.player.pos) < 1e-3);
        assert!(a.player.vel.distance(b.player.vel) < 1e-3);
        assert_eq!(a.mode, b.mode);
        assert_eq!(a.nearest_target_id, b.nearest_target_id);
    }

    #[test]
    fn test_one_second_headless_equals_sixty_frames() {
        let input = walk_right_up();
        let mut headless = playing();
        let mut realtime = playing();

        assert_eq!(advance_time(&mut headless, &input, 1000.0), 60);
        for _ in 0..60 {
            step_realtime(&mut realtime, &input, 1.0 / 60.0);
        }
        assert_same(&headless, &realtime);
        assert!(headless.elapsed >= 1.0 - 1e-4);
    }

    #[test]
    fn test_request_is_clamped() {
        let mut state = playing();
        assert_eq!(advance_time(&mut state, &TickInput::default(), 0.0), 1);
        assert!((state.elapsed - 0.001).abs() < 1e-6);

        let mut state = playing();
        assert_eq!(advance_time(&mut state, &TickInput::default(), 5000.0), 60);
        assert!((state.elapsed - 1.0).abs() < 1e-4);

        let mut state = playing();
        assert_eq!(advance_time(&mut state, &TickInput::default(), f32::NAN), 1);
    }

    #[test]
    fn test_realtime_clamps_delta() {
        let mut state = playing();
        assert_eq!(step_realtime(&mut state, &TickInput::default(), 0.5), MAX_FRAME_DT);
        assert_eq!(step_realtime(&mut state, &TickInput::default(), -0.5), 0.0);
        assert!((state.elapsed - MAX_FRAME_DT).abs() < 1e-6);
    }

    #[test]
    fn test_headless_does_nothing_outside_play() {
        let mut state = GameState::new(RoundConfig::default()).unwrap();
        advance_time(&mut state, &walk_right_up(), 1000.0);
        assert_eq!(state.mode, GameMode::Start);
        assert_eq!(state.elapsed, 0.0);
    }

    #[test]
    fn test_frame_clock() {
        let mut clock = FrameClock::new();
        assert!((clock.frame(1000.0) - 1.0 / 60.0).abs() < 1e-6);
        assert!((clock.frame(1016.0) - 0.016).abs() < 1e-6);
        // Stalled frame is clamped
        assert_eq!(clock.frame(3000.0), MAX_FRAME_DT);
        // Clock going backwards never yields a negative delta
        assert_eq!(clock.frame(2000.0), 0.0);
        clock.reset();
        assert!((clock.frame(9000.0) - 1.0 / 60.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_chunking_does_not_matter(chunks in prop::collection::vec(1u32..=20, 1..12)) {
            // Requests in whole multiples of 50 ms are whole multiples of 1/60 s
            let input = walk_right_up();
            let mut chunked = playing();
            let mut total_steps = 0;
            for chunk in &chunks {
                total_steps += advance_time(&mut chunked, &input, *chunk as f32 * 50.0);
            }

            let mut stepped = playing();
            for _ in 0..total_steps {
                step_realtime(&mut stepped, &input, 1.0 / 60.0);
            }

            prop_assert_eq!(chunked.elapsed.to_bits(), stepped.elapsed.to_bits());
            prop_assert_eq!(chunked.player.pos, stepped.player.pos);
            prop_assert_eq!(chunked.player.vel, stepped.player.vel);
        }
    }
}
