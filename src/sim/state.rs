//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives here. A state is spawned once per
//! page session and advanced in place until the ball touches the paddle.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Frames keep coming
    Running,
    /// Ball touched the paddle. Terminal.
    GameOver,
}

/// Size of the drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The falling ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Center, y measured from the bottom edge
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    /// Scale applied to `vel` during integration
    pub speed: f64,
}

impl Ball {
    /// Spawn a ball somewhere in the top band of `bounds`
    ///
    /// Draws radius, horizontal velocity, x and y from `rng` in that order.
    pub fn spawn<R: Rng>(bounds: Bounds, rng: &mut R) -> Self {
        let radius = BALL_RADIUS_MIN + (BALL_RADIUS_MAX - BALL_RADIUS_MIN) * rng.random::<f64>();
        let vx = -BALL_MAX_SPAWN_VX + 2.0 * BALL_MAX_SPAWN_VX * rng.random::<f64>();
        let x = radius + (bounds.width - 2.0 * radius) * rng.random::<f64>();
        let y = bounds.height * (1.0 - BALL_SPAWN_BAND)
            + bounds.height * BALL_SPAWN_BAND * rng.random::<f64>();

        Self {
            pos: DVec2::new(x, y),
            vel: DVec2::new(vx, 0.0),
            radius,
            speed: BALL_SPEED,
        }
    }
}

/// The player's paddle. Only `pos.x` ever changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub pos: DVec2,
    pub radius: f64,
    /// Horizontal speed (pixels/ms)
    pub speed: f64,
}

impl Paddle {
    /// Paddle centered horizontally at its fixed height
    pub fn centered(bounds: Bounds) -> Self {
        Self {
            pos: DVec2::new(bounds.width / 2.0, PADDLE_Y),
            radius: PADDLE_RADIUS,
            speed: PADDLE_SPEED,
        }
    }

    /// Lowest legal x
    pub fn min_x(&self) -> f64 {
        self.radius
    }

    /// Highest legal x for the given surface
    pub fn max_x(&self, bounds: Bounds) -> f64 {
        bounds.width - self.radius
    }

    /// Shift left by `distance`, stopping at the left edge
    pub fn move_left(&mut self, distance: f64) {
        self.pos.x = (self.pos.x - distance).max(self.min_x());
    }

    /// Shift right by `distance`, stopping at the right edge
    pub fn move_right(&mut self, distance: f64, bounds: Bounds) {
        self.pos.x = (self.pos.x + distance).min(self.max_x(bounds));
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Seed used for the spawn, if spawned from one
    pub seed: Option<u64>,
    pub bounds: Bounds,
    pub ball: Ball,
    pub paddle: Paddle,
    pub phase: GamePhase,
    /// Frames simulated so far
    pub frames: u64,
    /// Simulated time survived (ms)
    pub elapsed_ms: f64,
    /// Velocity reflections so far
    pub wall_bounces: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, bounds: Bounds) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = Self::spawn(bounds, &mut rng);
        state.seed = Some(seed);
        state
    }

    /// Create a new game state drawing the ball's spawn from `rng`
    pub fn spawn<R: Rng>(bounds: Bounds, rng: &mut R) -> Self {
        Self::with_entities(bounds, Ball::spawn(bounds, rng), Paddle::centered(bounds))
    }

    /// Assemble a running state from explicit entities
    pub fn with_entities(bounds: Bounds, ball: Ball, paddle: Paddle) -> Self {
        Self {
            seed: None,
            bounds,
            ball,
            paddle,
            phase: GamePhase::Running,
            frames: 0,
            elapsed_ms: 0.0,
            wall_bounces: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
