//! Game balance values
//!
//! Loaded from JSON so balance can be tweaked without rebuilding. Missing
//! fields fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::MIN_VERTICAL_SPEED;
use crate::error::TuningError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seed for pickup generation
    pub seed: u64,

    // === Ball ===
    /// Speed the ball leaves the paddle with (pixels/s)
    pub launch_speed: f32,

    // === Paddle ===
    /// Horizontal paddle speed (pixels/s)
    pub paddle_speed: f32,
    /// Share of the paddle's last movement added to the ball's x velocity
    pub paddle_velocity_gain: f32,

    // === Power-ups ===
    /// Chance a destroyed brick drops a pickup (0.0 - 1.0)
    pub powerup_chance: f64,
    /// Pickup fall speed (pixels/s)
    pub powerup_fall_speed: f32,
    /// Cannon shot speed (pixels/s)
    pub shot_speed: f32,
    /// Volleys granted by a weapon pickup
    pub ammo: u32,
    /// Hits the power-up wall takes before it breaks
    pub wall_lives: i32,

    /// Spare balls at the start of a run
    pub lives: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            launch_speed: 250.0,
            paddle_speed: 400.0,
            paddle_velocity_gain: 10.0,
            powerup_chance: 0.15,
            powerup_fall_speed: 120.0,
            shot_speed: 500.0,
            ammo: 10,
            wall_lives: 3,
            lives: 3,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning data from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning data from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if !self.launch_speed.is_finite() || self.launch_speed < MIN_VERTICAL_SPEED {
            return Err(TuningError::Invalid {
                field: "launch_speed",
                reason: format!("must be at least {MIN_VERTICAL_SPEED}, got {}", self.launch_speed),
            });
        }
        if !self.paddle_speed.is_finite() || self.paddle_speed <= 0.0 {
            return Err(TuningError::Invalid {
                field: "paddle_speed",
                reason: format!("must be positive, got {}", self.paddle_speed),
            });
        }
        if !self.paddle_velocity_gain.is_finite() || self.paddle_velocity_gain < 0.0 {
            return Err(TuningError::Invalid {
                field: "paddle_velocity_gain",
                reason: format!("must not be negative, got {}", self.paddle_velocity_gain),
            });
        }
        if !(0.0..=1.0).contains(&self.powerup_chance) {
            return Err(TuningError::Invalid {
                field: "powerup_chance",
                reason: format!("must be within [0, 1], got {}", self.powerup_chance),
            });
        }
        for (field, value) in [
            ("powerup_fall_speed", self.powerup_fall_speed),
            ("shot_speed", self.shot_speed),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::Invalid {
                    field,
                    reason: format!("must be positive, got {value}"),
                });
            }
        }
        Ok(())
    }
}
