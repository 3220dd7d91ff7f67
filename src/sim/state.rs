//! Game state and core simulation types
//!
//! Entities are created once per session; afterwards only their numeric
//! fields change.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::{Aabb, Magnitude};
use crate::tuning::Tuning;

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Pointer-controlled player
    Left,
    /// Tracks the ball
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Index into [`Simulation::paddles`]
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball left the field; `scorer` gained a point and the ball was reset
    Scored { scorer: Side, score: u32 },
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball bounced off a paddle; `speed` is the ball speed afterwards
    PaddleHit { side: Side, speed: f32 },
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub body: Aabb,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(size: Vec2) -> Self {
        Self {
            body: Aabb::new(size),
            vel: Vec2::ZERO,
        }
    }

    /// True while waiting at center for a launch
    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.vel.x == 0.0 && self.vel.y == 0.0
    }
}

/// A player's paddle
///
/// Velocity is never set directly: it is derived each tick from how far the
/// paddle moved since the previous tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Aabb,
    vel: Vec2,
    pub score: u32,
    last_pos: Vec2,
}

impl Paddle {
    /// Paddle centered on `pos`.
    ///
    /// Motion history starts at `pos` rather than the origin, so the first
    /// tick derives zero velocity instead of a spike toward the spawn point.
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            body: Aabb::at(pos, size),
            vel: Vec2::ZERO,
            score: 0,
            last_pos: pos,
        }
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    /// Derive vertical velocity from a single-frame finite difference
    pub fn track_velocity(&mut self, dt: f32) {
        self.vel.y = (self.body.pos.y - self.last_pos.y) / dt;
        self.last_pos = self.body.pos;
    }
}

/// One Pong session: a ball, two paddles and the field they live on
#[derive(Debug, Clone)]
pub struct Simulation {
    pub ball: Ball,
    /// `[left, right]`, see [`Side::index`]
    pub paddles: [Paddle; 2],
    field: Vec2,
    tuning: Tuning,
    rng: Pcg32,
}

impl Simulation {
    /// Classic-tuned session on a `width` x `height` field
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::with_tuning(width, height, Tuning::default(), seed)
    }

    pub fn with_tuning(width: f32, height: f32, tuning: Tuning, seed: u64) -> Self {
        let field = Vec2::new(width, height);
        let mid_y = height / 2.0;
        let paddles = [
            Paddle::new(Vec2::new(tuning.paddle_inset, mid_y), tuning.paddle_size),
            Paddle::new(
                Vec2::new(width - tuning.paddle_inset, mid_y),
                tuning.paddle_size,
            ),
        ];

        let mut sim = Self {
            ball: Ball::new(tuning.ball_size),
            paddles,
            field,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
        };
        sim.reset();
        sim
    }

    /// Field `(width, height)`, fixed for the session
    #[inline]
    pub fn field(&self) -> Vec2 {
        self.field
    }

    #[inline]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    #[inline]
    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn scores(&self) -> [u32; 2] {
        [self.paddles[0].score, self.paddles[1].score]
    }

    /// External position write (pointer, touch, ...). Read by the next tick.
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        self.paddles[side.index()].body.pos.y = y;
    }

    /// Launch the ball in a random direction if it is at rest.
    ///
    /// Returns whether a launch happened; calling this mid-rally does nothing.
    pub fn play(&mut self, two_players: bool) -> bool {
        if two_players {
            log::debug!("Two-player launch: keyboard control of paddles is not wired");
        }
        if !self.ball.is_at_rest() {
            return false;
        }

        let spread = self.tuning.launch_spread;
        let dir_x = if self.rng.random::<f32>() > 0.5 { 1.0 } else { -1.0 };
        let mut vel = Vec2::new(
            spread * dir_x,
            spread * (self.rng.random::<f32>() * 2.0 - 1.0),
        );
        vel.set_magnitude(self.tuning.initial_speed);
        self.ball.vel = vel;

        log::info!("Ball launched with velocity ({:.1}, {:.1})", vel.x, vel.y);
        true
    }

    /// Stop the ball and put it back at the center of the field
    pub fn reset(&mut self) {
        self.ball.vel = Vec2::ZERO;
        self.ball.body.pos = self.field / 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_entities() {
        let sim = Simulation::new(640.0, 400.0, 1);
        assert_eq!(sim.ball.body.pos, Vec2::new(320.0, 200.0));
        assert!(sim.ball.is_at_rest());
        assert_eq!(sim.ball.body.size(), Vec2::splat(10.0));

        let left = sim.paddle(Side::Left);
        let right = sim.paddle(Side::Right);
        assert_eq!(left.body.pos, Vec2::new(40.0, 200.0));
        assert_eq!(right.body.pos, Vec2::new(600.0, 200.0));
        assert_eq!(left.body.size(), Vec2::new(20.0, 100.0));
        assert_eq!(sim.scores(), [0, 0]);
    }

    #[test]
    fn test_play_launches_at_initial_speed() {
        let mut sim = Simulation::new(640.0, 400.0, 42);
        assert!(sim.play(false));

        let vel = sim.ball.vel;
        assert!((vel.magnitude() - 250.0).abs() < 1e-3);
        assert!(vel.x != 0.0);
        // |y| <= |x| since y was drawn from [-spread, spread] and x = ±spread
        assert!(vel.y.abs() <= vel.x.abs() + 1e-3);
    }

    #[test]
    fn test_play_is_idempotent_while_moving() {
        let mut sim = Simulation::new(640.0, 400.0, 7);
        assert!(sim.play(false));
        let vel = sim.ball.vel;

        assert!(!sim.play(false));
        assert!(!sim.play(true));
        assert_eq!(sim.ball.vel, vel);
    }

    #[test]
    fn test_launch_direction_varies_with_seed() {
        let signs: Vec<bool> = (0..32)
            .map(|seed| {
                let mut sim = Simulation::new(640.0, 400.0, seed);
                sim.play(false);
                sim.ball.vel.x > 0.0
            })
            .collect();
        assert!(signs.iter().any(|&s| s));
        assert!(signs.iter().any(|&s| !s));
    }

    #[test]
    fn test_same_seed_same_launch() {
        let mut a = Simulation::new(640.0, 400.0, 99);
        let mut b = Simulation::new(640.0, 400.0, 99);
        a.play(false);
        b.play(false);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_reset_recenters_and_stops() {
        let mut sim = Simulation::new(640.0, 400.0, 3);
        sim.play(false);
        sim.ball.body.pos = Vec2::new(12.0, 34.0);

        sim.reset();
        assert!(sim.ball.is_at_rest());
        assert_eq!(sim.ball.body.pos, Vec2::new(320.0, 200.0));
        assert!(sim.play(false));
    }

    #[test]
    fn test_paddle_velocity_from_motion() {
        let mut paddle = Paddle::new(Vec2::new(40.0, 200.0), Vec2::new(20.0, 100.0));
        paddle.track_velocity(0.5);
        assert_eq!(paddle.vel(), Vec2::ZERO);

        paddle.body.pos.y = 230.0;
        paddle.track_velocity(0.5);
        assert_eq!(paddle.vel().y, 60.0);

        // No motion since the last tick
        paddle.track_velocity(0.5);
        assert_eq!(paddle.vel().y, 0.0);
    }

    #[test]
    fn test_first_tick_after_spawn_is_still() {
        let mut sim = Simulation::new(640.0, 400.0, 1);
        for paddle in &mut sim.paddles {
            paddle.track_velocity(1.0 / 60.0);
            assert_eq!(paddle.vel(), Vec2::ZERO);
        }
    }

    #[test]
    fn test_launch_speed_comes_from_tuning() {
        let tuning = Tuning {
            initial_speed: 320.0,
            ..Default::default()
        };
        let mut sim = Simulation::with_tuning(640.0, 400.0, tuning, 11);
        assert_eq!(sim.tuning().initial_speed, 320.0);
        sim.play(false);
        assert!((sim.ball.vel.magnitude() - sim.tuning().initial_speed).abs() < 1e-2);
    }

    #[test]
    fn test_custom_tuning_applies() {
        let tuning = Tuning {
            initial_speed: 500.0,
            paddle_inset: 10.0,
            ..Default::default()
        };
        let mut sim = Simulation::with_tuning(300.0, 200.0, tuning, 5);
        assert_eq!(sim.paddle(Side::Right).body.pos.x, 290.0);
        sim.play(false);
        assert!((sim.ball.vel.magnitude() - 500.0).abs() < 1e-2);
    }
}
