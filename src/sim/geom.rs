//! Planar geometry for the playfield
//!
//! Vectors are plain `glam::Vec2`; [`Magnitude`] adds the get/set length pair
//! the physics code leans on. [`Aabb`] is a center + size rectangle whose edges
//! are derived on every access.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Length accessors for velocities
pub trait Magnitude {
    /// Euclidean length. Zero for the zero vector.
    fn magnitude(self) -> f32;

    /// Rescale to `target` length, keeping direction.
    ///
    /// A zero vector has no direction and is left as is.
    fn set_magnitude(&mut self, target: f32);
}

impl Magnitude for Vec2 {
    #[inline]
    fn magnitude(self) -> f32 {
        self.length()
    }

    fn set_magnitude(&mut self, target: f32) {
        *self = self.normalize_or_zero() * target;
    }
}

/// Axis-aligned box, positioned by its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Center point
    pub pos: Vec2,
    /// Width and height (non-negative, fixed after construction)
    size: Vec2,
}

impl Aabb {
    /// Box of the given size centered on the origin
    pub fn new(size: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            size: size.abs(),
        }
    }

    pub fn at(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size: size.abs(),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// Strict overlap test; boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
