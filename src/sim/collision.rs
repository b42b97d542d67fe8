//! Collision detection and response
//!
//! The ball bounces elastically off the four edges of the surface. The
//! paddle never bounces anything: touching it ends the game.

use glam::DVec2;

use super::state::{Ball, Bounds};

/// Which edges reflected the ball this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
    pub top: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.bottom || self.top
    }

    /// Number of velocity components flipped
    pub fn count(&self) -> u32 {
        [self.left, self.right, self.bottom, self.top]
            .iter()
            .filter(|&&hit| hit)
            .count() as u32
    }
}

/// Reflect the ball off any edge it has reached while still heading outward
///
/// A velocity component is negated only when the ball is at or past the edge
/// and moving further out; the orthogonal component is left alone. The
/// position is then pulled back inside `[radius, dimension - radius]`.
pub fn reflect_off_walls(ball: &mut Ball, bounds: Bounds) -> WallHits {
    let mut hits = WallHits::default();
    let r = ball.radius;

    if ball.pos.x <= r && ball.vel.x < 0.0 {
        ball.vel.x = -ball.vel.x;
        hits.left = true;
    }
    if ball.pos.x >= bounds.width - r && ball.vel.x > 0.0 {
        ball.vel.x = -ball.vel.x;
        hits.right = true;
    }
    if ball.pos.y <= r && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        hits.bottom = true;
    }
    if ball.pos.y >= bounds.height - r && ball.vel.y > 0.0 {
        ball.vel.y = -ball.vel.y;
        hits.top = true;
    }

    ball.pos.x = clamp_axis(ball.pos.x, r, bounds.width - r);
    ball.pos.y = clamp_axis(ball.pos.y, r, bounds.height - r);

    hits
}

/// Clamp without panicking when the surface is narrower than the ball
#[inline]
fn clamp_axis(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Circle-circle overlap. Touching (distance equal to the radius sum) counts.
#[inline]
pub fn circles_collide(a_pos: DVec2, a_radius: f64, b_pos: DVec2, b_radius: f64) -> bool {
    a_pos.distance(b_pos) <= a_radius + b_radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::BALL_SPEED;

    fn ball_at(x: f64, y: f64, vx: f64, vy: f64) -> Ball {
        Ball {
            pos: DVec2::new(x, y),
            vel: DVec2::new(vx, vy),
            radius: 10.0,
            speed: BALL_SPEED,
        }
    }

    #[test]
    fn test_reflect_left_wall() {
        let bounds = Bounds::new(400.0, 300.0);
        let mut ball = ball_at(10.0, 150.0, -3.0, 1.5);

        let hits = reflect_off_walls(&mut ball, bounds);
        assert!(hits.left);
        assert_eq!(hits.count(), 1);
        assert_eq!(ball.vel, DVec2::new(3.0, 1.5));
    }

    #[test]
    fn test_reflect_right_wall_pulls_ball_back() {
        let bounds = Bounds::new(400.0, 300.0);
        let mut ball = ball_at(405.0, 150.0, 2.0, -1.0);

        let hits = reflect_off_walls(&mut ball, bounds);
        assert!(hits.right);
        assert_eq!(ball.vel, DVec2::new(-2.0, -1.0));
        assert_eq!(ball.pos.x, 390.0);
    }

    #[test]
    fn test_reflect_floor_and_ceiling() {
        let bounds = Bounds::new(400.0, 300.0);

        let mut falling = ball_at(200.0, 4.0, 0.5, -2.0);
        let hits = reflect_off_walls(&mut falling, bounds);
        assert!(hits.bottom && !hits.top);
        assert_eq!(falling.vel, DVec2::new(0.5, 2.0));
        assert_eq!(falling.pos.y, 10.0);

        let mut rising = ball_at(200.0, 295.0, 0.5, 2.0);
        let hits = reflect_off_walls(&mut rising, bounds);
        assert!(hits.top && !hits.bottom);
        assert_eq!(rising.vel, DVec2::new(0.5, -2.0));
        assert_eq!(rising.pos.y, 290.0);
    }

    #[test]
    fn test_no_reflection_when_heading_inward() {
        let bounds = Bounds::new(400.0, 300.0);
        // At the left edge but already moving right
        let mut ball = ball_at(10.0, 150.0, 3.0, 0.0);

        let hits = reflect_off_walls(&mut ball, bounds);
        assert!(!hits.any());
        assert_eq!(ball.vel, DVec2::new(3.0, 0.0));
    }

    #[test]
    fn test_corner_flips_both_components() {
        let bounds = Bounds::new(400.0, 300.0);
        let mut ball = ball_at(5.0, 5.0, -1.0, -1.0);

        let hits = reflect_off_walls(&mut ball, bounds);
        assert_eq!(hits.count(), 2);
        assert_eq!(ball.vel, DVec2::new(1.0, 1.0));
        assert_eq!(ball.pos, DVec2::new(10.0, 10.0));
    }

    #[test]
    fn test_circles_collide_coincident() {
        let p = DVec2::new(120.0, 50.0);
        assert!(circles_collide(p, 10.0, p, 50.0));
    }

    #[test]
    fn test_circles_collide_exact_boundary() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(60.0, 0.0);
        assert!(circles_collide(a, 10.0, b, 50.0));
        assert!(circles_collide(b, 50.0, a, 10.0));
    }

    #[test]
    fn test_circles_just_apart() {
        let a = DVec2::new(0.0, 0.0);
        let b = DVec2::new(60.001, 0.0);
        assert!(!circles_collide(a, 10.0, b, 50.0));
    }
}
