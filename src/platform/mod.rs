//! Platform glue shared by the browser and native front-ends
//!
//! - `clock`: animation-frame timestamps to simulation steps
//! - `input`: pointer and keyboard events to simulation calls

pub mod clock;
pub mod input;

pub use clock::{FrameClock, FrameDriver};
pub use input::{InputState, Key};
