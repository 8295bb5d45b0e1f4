//! Frame timing.
//!
//! One `FrameClock` lives next to each window; the runtime ticks it once per
//! redraw and hands the resulting `FrameTime` to the app.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
