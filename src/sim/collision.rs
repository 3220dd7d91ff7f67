//! Paddle/ball collision response

use super::geom::Magnitude;
use super::state::{Ball, Paddle};

/// Bounce `ball` off `paddle` if their boxes overlap.
///
/// The horizontal component is reflected and multiplied by `hit_boost`; the
/// resulting speed is then kept while a share (`spin_transfer`) of the paddle's
/// vertical velocity bends the direction. The boost compounds on every hit and
/// is deliberately not capped.
///
/// Returns whether the ball was hit.
pub fn collide(paddle: &Paddle, ball: &mut Ball, hit_boost: f32, spin_transfer: f32) -> bool {
    if !paddle.body.overlaps(&ball.body) {
        return false;
    }

    ball.vel.x = -ball.vel.x * hit_boost;
    let speed = ball.vel.magnitude();
    ball.vel.y += paddle.vel().y * spin_transfer;
    ball.vel.set_magnitude(speed);
    true
}
