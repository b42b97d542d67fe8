//! Simulation module
//!
//! All gameplay logic lives here. This module must stay host-agnostic:
//! - Frame deltas are passed in, never read from a clock
//! - Randomness is injected or seeded
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{WallHits, circles_collide, reflect_off_walls};
pub use state::{Ball, Bounds, GamePhase, GameState, Paddle};
pub use tick::{RunSummary, TickInput, run, tick};
