//! Platform abstraction layer
//!
//! Host-side plumbing that stays testable off the browser:
//! - Frame timing (timestamps → frame deltas)
//! - Keyboard events → per-frame input

pub mod input;
pub mod time;

pub use input::KeyboardAdapter;
pub use time::FrameClock;
