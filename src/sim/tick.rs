//! Per-frame simulation tick
//!
//! Core game loop: one call advances the state by one variable-length frame.

use super::collision::{circles_collide, reflect_off_walls};
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Held-key state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move-left key held
    pub move_left: bool,
    /// Move-right key held
    pub move_right: bool,
}

/// Advance the game state by `dt` milliseconds and return the resulting phase
///
/// A zero-length frame only re-evaluates contact, leaving positions and
/// velocities as they were.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f64) -> GamePhase {
    if state.phase == GamePhase::GameOver {
        return GamePhase::GameOver;
    }

    let dt = dt.max(0.0);

    if dt > 0.0 {
        integrate_ball(state, dt);
        move_paddle(state, input, dt);

        let hits = reflect_off_walls(&mut state.ball, state.bounds);
        if hits.any() {
            state.wall_bounces += hits.count();
            log::trace!("Wall bounce {:?} at {:?}", hits, state.ball.pos);
        }
    }

    state.frames += 1;
    state.elapsed_ms += dt;

    let ball = &state.ball;
    let paddle = &state.paddle;
    if circles_collide(ball.pos, ball.radius, paddle.pos, paddle.radius) {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over after {} frames ({:.0} ms, {} bounces)",
            state.frames,
            state.elapsed_ms,
            state.wall_bounces
        );
    }

    state.phase
}

/// Gravity, then position update
///
/// X and Y use different velocity divisors, and only Y gets the `½·g·dt²`
/// term.
fn integrate_ball(state: &mut GameState, dt: f64) {
    let ball = &mut state.ball;

    // v = v0 + g·t
    ball.vel.y -= GRAVITY * dt;

    ball.pos.x += ball.vel.x * dt * (ball.speed / BALL_X_SPEED_DIVISOR);
    // s = v0·t + ½·g·t²
    ball.pos.y += ball.vel.y * dt * (ball.speed / BALL_Y_SPEED_DIVISOR) + 0.5 * GRAVITY * dt * dt;
}

/// Both directions apply when both keys are held
fn move_paddle(state: &mut GameState, input: &TickInput, dt: f64) {
    let distance = state.paddle.speed * dt;
    if input.move_left {
        state.paddle.move_left(distance);
    }
    if input.move_right {
        state.paddle.move_right(distance, state.bounds);
    }
}

/// Outcome of [`run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Phase when the loop stopped
    pub phase: GamePhase,
    /// Frames consumed from the iterator
    pub frames: u64,
}

/// Drive `tick` over a sequence of frame deltas until the game ends or the
/// deltas run out
pub fn run<I>(state: &mut GameState, input: &TickInput, deltas: I) -> RunSummary
where
    I: IntoIterator<Item = f64>,
{
    let mut deltas = deltas.into_iter();
    let mut frames = 0;
    let mut phase = state.phase;

    while phase == GamePhase::Running {
        let Some(dt) = deltas.next() else { break };
        phase = tick(state, input, dt);
        frames += 1;
    }

    RunSummary { phase, frames }
}
