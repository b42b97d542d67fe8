//! 2D immediate-mode rendering
//!
//! The simulation's Y axis grows upward; canvas Y grows downward. Everything
//! drawn here is flipped with `height - y`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::DVec2;

use crate::settings::Settings;
use crate::sim::GameState;

/// The handful of drawing calls a frame needs
pub trait DrawSurface {
    type Error;

    fn set_fill_color(&mut self, color: &str);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn begin_path(&mut self);
    /// Add a full ellipse centered at `center` to the current path
    fn ellipse(&mut self, center: DVec2, radius_x: f64, radius_y: f64) -> Result<(), Self::Error>;
    fn fill(&mut self);
}

/// Fill colors for the two shapes
#[derive(Debug, Clone, Copy)]
pub struct Palette<'a> {
    pub paddle: &'a str,
    pub ball: &'a str,
}

impl<'a> From<&'a Settings> for Palette<'a> {
    fn from(settings: &'a Settings) -> Self {
        Self {
            paddle: &settings.paddle_color,
            ball: &settings.ball_color,
        }
    }
}

/// Clear the surface and draw the paddle, then the ball
pub fn render<S: DrawSurface>(
    surface: &mut S,
    state: &GameState,
    palette: Palette<'_>,
) -> Result<(), S::Error> {
    let height = state.bounds.height;
    surface.clear_rect(0.0, 0.0, state.bounds.width, height);

    let paddle = &state.paddle;
    fill_circle(surface, palette.paddle, to_screen(paddle.pos, height), paddle.radius)?;

    let ball = &state.ball;
    fill_circle(surface, palette.ball, to_screen(ball.pos, height), ball.radius)?;

    Ok(())
}

/// Simulation coordinates (y up) to canvas coordinates (y down)
#[inline]
pub fn to_screen(pos: DVec2, height: f64) -> DVec2 {
    DVec2::new(pos.x, height - pos.y)
}

fn fill_circle<S: DrawSurface>(
    surface: &mut S,
    color: &str,
    center: DVec2,
    radius: f64,
) -> Result<(), S::Error> {
    surface.set_fill_color(color);
    surface.begin_path();
    surface.ellipse(center, radius, radius)?;
    surface.fill();
    Ok(())
}
