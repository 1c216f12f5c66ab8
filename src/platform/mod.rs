//! Platform abstraction layer
//!
//! Handles windowing-library differences for:
//! - Time/ticks
//! - Input events

pub mod input;
pub mod time;

pub use input::{Command, Key, window_to_render};
pub use time::{Clock, ManualClock, SystemClock};
