//! Per-frame simulation step
//!
//! Advances the session by a variable timestep supplied by the frame driver.

use super::collision::collide;
use super::geom::Magnitude;
use super::state::{GameEvent, Side, Simulation};

impl Simulation {
    /// Advance the session by `dt` seconds (`dt > 0`).
    ///
    /// Phases run in a fixed order: integrate the ball, score and reset if it
    /// left the field, bounce off the top/bottom walls, snap the right paddle
    /// to the ball, then for each paddle derive its velocity and resolve its
    /// collision with the ball.
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let field = self.field();

        self.ball.body.pos += self.ball.vel * dt;

        if self.ball.body.right() < 0.0 || self.ball.body.left() > field.x {
            // Leaving to the left scores for the right player and vice versa
            let scorer = if self.ball.vel.x < 0.0 {
                Side::Right
            } else {
                Side::Left
            };
            let paddle = &mut self.paddles[scorer.index()];
            paddle.score += 1;
            let score = paddle.score;

            log::info!(
                "{:?} player scores ({} - {})",
                scorer,
                self.paddles[0].score,
                self.paddles[1].score
            );
            events.push(GameEvent::Scored { scorer, score });
            self.reset();
        }

        let ball = &mut self.ball;
        if (ball.vel.y < 0.0 && ball.body.top() < 0.0)
            || (ball.vel.y > 0.0 && ball.body.bottom() > field.y)
        {
            ball.vel.y = -ball.vel.y;
            log::trace!("Wall bounce at y={:.1}", ball.body.pos.y);
            events.push(GameEvent::WallBounce);
        }

        // Right paddle follows the ball
        self.paddles[Side::Right.index()].body.pos.y = self.ball.body.pos.y;

        let hit_boost = self.tuning().paddle_hit_boost;
        let spin_transfer = self.tuning().paddle_spin_transfer;
        for side in Side::BOTH {
            let paddle = &mut self.paddles[side.index()];
            paddle.track_velocity(dt);
            if collide(paddle, &mut self.ball, hit_boost, spin_transfer) {
                let speed = self.ball.vel.magnitude();
                log::debug!("{:?} paddle hit, ball speed {:.1}", side, speed);
                events.push(GameEvent::PaddleHit { side, speed });
            }
        }

        events
    }
}
