//! Input mapping
//!
//! Browser events arrive between frames and write straight into the
//! simulation; the next `update` picks up whatever was written last.

use crate::sim::{Side, Simulation};

/// Keys reserved for two-player paddle control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Arrow up (38)
    Up,
    /// Arrow down (40)
    Down,
    /// W (87)
    W,
    /// S (83)
    S,
}

impl Key {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            38 => Some(Key::Up),
            40 => Some(Key::Down),
            87 => Some(Key::W),
            83 => Some(Key::S),
            _ => None,
        }
    }
}

/// Session-level input mode
#[derive(Debug, Clone, Default)]
pub struct InputState {
    two_players: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn two_players(&self) -> bool {
        self.two_players
    }

    /// Launch button. Choosing two players latches for the rest of the session.
    pub fn launch(&mut self, sim: &mut Simulation, two_players: bool) -> bool {
        if two_players && !self.two_players {
            log::info!("Two-player mode enabled");
            self.two_players = true;
        }
        sim.play(two_players)
    }

    /// Pointer moved over the canvas.
    ///
    /// `offset_y` is relative to the canvas' displayed box of height
    /// `client_height`; it is scaled to field units. Ignored in two-player mode.
    pub fn pointer_moved(&self, sim: &mut Simulation, offset_y: f32, client_height: f32) {
        if self.two_players || client_height <= 0.0 {
            return;
        }
        let y = sim.field().y * (offset_y / client_height);
        sim.set_paddle_y(Side::Left, y);
    }

    /// Key pressed on the canvas.
    ///
    /// Two-player keys are recognised but do not move anything yet.
    pub fn key_pressed(&self, _sim: &mut Simulation, code: u32) {
        if !self.two_players {
            return;
        }
        if let Some(key) = Key::from_code(code) {
            log::trace!("{:?} pressed, keyboard paddle control is not wired", key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_scales_to_field() {
        let mut sim = Simulation::new(640.0, 400.0, 1);
        let input = InputState::new();

        // Canvas displayed at half size
        input.pointer_moved(&mut sim, 50.0, 200.0);
        assert_eq!(sim.paddle(Side::Left).body.pos.y, 100.0);
        assert_eq!(sim.paddle(Side::Right).body.pos.y, 200.0);
    }

    #[test]
    fn test_pointer_ignored_in_two_player_mode() {
        let mut sim = Simulation::new(640.0, 400.0, 1);
        let mut input = InputState::new();
        assert!(input.launch(&mut sim, true));
        assert!(input.two_players());

        input.pointer_moved(&mut sim, 10.0, 400.0);
        assert_eq!(sim.paddle(Side::Left).body.pos.y, 200.0);
    }

    #[test]
    fn test_two_player_mode_latches() {
        let mut sim = Simulation::new(640.0, 400.0, 1);
        let mut input = InputState::new();
        input.launch(&mut sim, true);
        sim.reset();
        input.launch(&mut sim, false);
        assert!(input.two_players());
    }

    #[test]
    fn test_launch_only_when_at_rest() {
        let mut sim = Simulation::new(640.0, 400.0, 1);
        let mut input = InputState::new();
        assert!(input.launch(&mut sim, false));
        assert!(!input.launch(&mut sim, false));
        assert!(!input.two_players());
    }

    #[test]
    fn test_keys_do_not_move_paddles() {
        let mut sim = Simulation::new(640.0, 400.0, 1);
        let mut input = InputState::new();
        input.launch(&mut sim, true);
        let before = [sim.paddles[0].body.pos, sim.paddles[1].body.pos];

        for code in [38, 40, 87, 83, 65] {
            input.key_pressed(&mut sim, code);
        }
        assert_eq!([sim.paddles[0].body.pos, sim.paddles[1].body.pos], before);
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::from_code(38), Some(Key::Up));
        assert_eq!(Key::from_code(40), Some(Key::Down));
        assert_eq!(Key::from_code(87), Some(Key::W));
        assert_eq!(Key::from_code(83), Some(Key::S));
        assert_eq!(Key::from_code(32), None);
    }
}
