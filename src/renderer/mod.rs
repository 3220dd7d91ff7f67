//! Rendering front half
//!
//! The simulation never draws. Each frame it is captured into a [`Frame`]
//! and handed to a [`FrameSink`]; [`draw::draw_list`] turns a frame into the
//! fill rectangles a 2D canvas backend executes.

pub mod draw;
pub mod font;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Aabb, Simulation};

pub use draw::{Color, FillRect, draw_list};

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub field: Vec2,
    pub ball: Aabb,
    /// `[left, right]`
    pub paddles: [Aabb; 2],
    pub scores: [u32; 2],
}

impl Frame {
    pub fn capture(sim: &Simulation) -> Self {
        Self {
            field: sim.field(),
            ball: sim.ball.body,
            paddles: [sim.paddles[0].body, sim.paddles[1].body],
            scores: sim.scores(),
        }
    }
}

/// Render collaborator: receives a frame after every simulation step
pub trait FrameSink {
    fn present(&mut self, frame: &Frame);
}
