//! Data-driven game balance
//!
//! Every knob defaults to the classic game; a JSON document may override any
//! subset of them.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors from loading a tuning document
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("tuning JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tuning value `{field}` must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("tuning value `{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
}

pub type TuningResult<T> = Result<T, TuningError>;

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ball speed right after launch (units/sec)
    pub initial_speed: f32,
    pub ball_size: Vec2,
    pub paddle_size: Vec2,
    /// Distance from each side wall to its paddle's center
    pub paddle_inset: f32,
    /// Horizontal speed multiplier applied on every paddle hit (uncapped)
    pub paddle_hit_boost: f32,
    /// Fraction of paddle vertical velocity added to the ball on a hit
    pub paddle_spin_transfer: f32,
    /// Component scale used to pick a launch direction
    pub launch_spread: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_speed: INITIAL_SPEED,
            ball_size: Vec2::splat(BALL_SIZE),
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_inset: PADDLE_INSET,
            paddle_hit_boost: PADDLE_HIT_BOOST,
            paddle_spin_transfer: PADDLE_SPIN_TRANSFER,
            launch_spread: LAUNCH_SPREAD,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> TuningResult<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read a JSON tuning file from disk
    pub fn from_file(path: impl AsRef<Path>) -> TuningResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> TuningResult<()> {
        positive("initial_speed", self.initial_speed)?;
        positive("ball_size.x", self.ball_size.x)?;
        positive("ball_size.y", self.ball_size.y)?;
        positive("paddle_size.x", self.paddle_size.x)?;
        positive("paddle_size.y", self.paddle_size.y)?;
        positive("paddle_hit_boost", self.paddle_hit_boost)?;
        positive("launch_spread", self.launch_spread)?;
        finite("paddle_inset", self.paddle_inset)?;
        finite("paddle_spin_transfer", self.paddle_spin_transfer)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> TuningResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NotPositive { field, value })
    }
}

fn finite(field: &'static str, value: f32) -> TuningResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::NotFinite { field, value })
    }
}
