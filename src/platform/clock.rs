//! Frame timing
//!
//! The host calls [`FrameDriver::on_frame`] once per display refresh with a
//! millisecond timestamp (as `requestAnimationFrame` provides). Each call after
//! the first advances the simulation by the elapsed time and presents a frame.

use crate::renderer::{Frame, FrameSink};
use crate::sim::{GameEvent, Simulation};

/// Turns successive frame timestamps into step lengths
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_millis: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `millis` and return seconds since the previous call.
    ///
    /// The first call only primes the clock and returns `None`. A repeated,
    /// backwards or non-finite timestamp also yields `None`; it is still
    /// recorded, so the next frame measures from it.
    pub fn advance(&mut self, millis: f64) -> Option<f32> {
        let last = self.last_millis.replace(millis)?;
        let dt = ((millis - last) / 1000.0) as f32;
        (dt.is_finite() && dt > 0.0).then_some(dt)
    }
}

/// Owns the session and steps it from animation-frame callbacks
pub struct FrameDriver<S: FrameSink> {
    sim: Simulation,
    clock: FrameClock,
    sink: S,
    frames: u64,
}

impl<S: FrameSink> FrameDriver<S> {
    pub fn new(sim: Simulation, sink: S) -> Self {
        Self {
            sim,
            clock: FrameClock::new(),
            sink,
            frames: 0,
        }
    }

    /// Handle one animation-frame callback
    pub fn on_frame(&mut self, millis: f64) -> Vec<GameEvent> {
        let Some(dt) = self.clock.advance(millis) else {
            log::debug!("No elapsed time at {:.1}ms, frame skipped", millis);
            return Vec::new();
        };

        let events = self.sim.update(dt);
        self.sink.present(&Frame::capture(&self.sim));
        self.frames += 1;
        events
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    /// For launch controls and input handlers between frames
    pub fn sim_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Frames stepped and presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
