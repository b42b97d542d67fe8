//! Gravity Dodge - a falling ball and a paddle that must not touch it
//!
//! Core modules:
//! - `sim`: Simulation (kinematics, wall bounces, paddle contact)
//! - `renderer`: Immediate-mode 2D drawing of the current state
//! - `platform`: Frame clock and keyboard adapter for the host page
//! - `settings`: User-tunable configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{KeyBindings, Settings};

/// Game configuration constants
///
/// Units are canvas pixels and milliseconds. Y grows upward from the bottom edge.
pub mod consts {
    /// Gravitational acceleration (pixels/ms²)
    pub const GRAVITY: f64 = 0.0098;

    /// Ball radius range at spawn
    pub const BALL_RADIUS_MIN: f64 = 10.0;
    pub const BALL_RADIUS_MAX: f64 = 20.0;
    /// Horizontal spawn velocity is drawn from [-BALL_MAX_SPAWN_VX, BALL_MAX_SPAWN_VX]
    pub const BALL_MAX_SPAWN_VX: f64 = 5.0;
    /// Speed scale applied to the velocity terms during integration
    pub const BALL_SPEED: f64 = 10.0;
    /// Velocity divisors; X and Y are tuned independently
    pub const BALL_X_SPEED_DIVISOR: f64 = 25.0;
    pub const BALL_Y_SPEED_DIVISOR: f64 = 100.0;
    /// Ball spawns in this top fraction of the height
    pub const BALL_SPAWN_BAND: f64 = 0.2;

    /// Paddle defaults - centered, hovering above the bottom edge
    pub const PADDLE_Y: f64 = 50.0;
    pub const PADDLE_RADIUS: f64 = 50.0;
    /// Paddle speed (pixels/ms)
    pub const PADDLE_SPEED: f64 = 0.5;
}
