//! Canvas Pong - classic two-paddle Pong on a 2D canvas
//!
//! Core modules:
//! - `sim`: Simulation core (geometry, entities, collisions, per-frame update)
//! - `renderer`: Frame snapshots and the draw list a canvas backend executes
//! - `platform`: Frame clock, frame driver and input mapping
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use platform::{FrameClock, FrameDriver, InputState, Key};
pub use renderer::{Frame, FrameSink};
pub use sim::{GameEvent, Side, Simulation};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Ball speed right after launch (units/sec)
    pub const INITIAL_SPEED: f32 = 250.0;
    /// Launch direction is drawn from `(±SPREAD, [-SPREAD, SPREAD])` before rescaling
    pub const LAUNCH_SPREAD: f32 = 200.0;

    /// Ball is a square
    pub const BALL_SIZE: f32 = 10.0;

    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Paddle center distance from its side wall
    pub const PADDLE_INSET: f32 = 40.0;

    /// Horizontal speed multiplier per paddle hit (no cap, compounds)
    pub const PADDLE_HIT_BOOST: f32 = 1.05;
    /// Share of paddle vertical velocity transferred to the ball
    pub const PADDLE_SPIN_TRANSFER: f32 = 0.2;
}
