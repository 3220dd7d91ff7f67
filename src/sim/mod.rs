//! Simulation core
//!
//! All gameplay logic lives here: geometry, entities, collision response and
//! the per-frame update. No rendering or platform dependencies.

pub mod collision;
pub mod geom;
pub mod state;
pub mod tick;

pub use collision::collide;
pub use geom::{Aabb, Magnitude};
pub use state::{Ball, GameEvent, Paddle, Side, Simulation};
