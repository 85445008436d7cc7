//! Platform abstraction layer
//!
//! Everything device- or clock-specific stays here so the simulation only
//! ever sees a merged [`TickInput`](crate::sim::TickInput) and an explicit `dt`:
//! - `input`: keyboard and touch adapters
//! - `time`: real-time frame clock and headless fixed-step driver

pub mod input;
pub mod time;

pub use input::{KeyboardState, TouchState};
pub use time::{FrameClock, advance_time, step_realtime};
