//! Game tuning: physics and progression constants
//!
//! Defaults reproduce the built-in game. A driver may load overrides from a
//! JSON file; missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Physics and progression constants for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    /// Vertical acceleration added to every body each tick (negative = down)
    pub gravity: f32,
    /// Fraction of horizontal speed removed from scene bodies each tick
    pub friction: f32,
    /// Multiplier applied to the frame delta before integrating positions
    pub refresh_rate: f32,

    // === Controls ===
    pub move_impulse: f32,
    pub jump_impulse: f32,
    /// Fraction of current horizontal velocity added on a jump
    pub jump_carry: f32,

    // === Progression ===
    pub starting_lives: u8,
    pub starting_level: u32,
    /// Time cursor value at which the first scheduled hazard spawns
    pub initial_spawn_threshold: f64,
    pub hazard_max_size: f32,
    pub hazard_min_size: f32,
    pub hazard_max_speed: f32,

    // === Collision ===
    /// Share of the player's width that forms the hit band
    pub collision_tolerance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            refresh_rate: REFRESH_RATE,

            move_impulse: SPEED_MOVE,
            jump_impulse: SPEED_JUMP,
            jump_carry: JUMP_CARRY,

            starting_lives: STARTING_LIVES,
            starting_level: STARTING_LEVEL,
            initial_spawn_threshold: INITIAL_SPAWN_THRESHOLD,
            hazard_max_size: HAZARD_MAX_SIZE,
            hazard_min_size: HAZARD_MIN_SIZE,
            hazard_max_speed: HAZARD_MAX_SPEED,

            collision_tolerance: COLLISION_TOLERANCE,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check that every value keeps the simulation's invariants intact
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if !(0.0..=1.0).contains(&self.friction) {
            return Err(invalid("friction", "must be within [0, 1]"));
        }
        if self.starting_lives == 0 {
            return Err(invalid("starting_lives", "must be at least 1"));
        }
        if !(self.initial_spawn_threshold > 0.0) {
            return Err(invalid("initial_spawn_threshold", "must be positive"));
        }
        if !(self.hazard_min_size > 0.0) {
            return Err(invalid("hazard_min_size", "must be positive"));
        }
        if self.hazard_max_size < self.hazard_min_size {
            return Err(invalid(
                "hazard_max_size",
                format!("must be >= hazard_min_size ({})", self.hazard_min_size),
            ));
        }
        if self.hazard_max_speed < 0.0 {
            return Err(invalid("hazard_max_speed", "must not be negative"));
        }
        if !(self.collision_tolerance > 0.0 && self.collision_tolerance <= 1.0) {
            return Err(invalid("collision_tolerance", "must be within (0, 1]"));
        }
        Ok(())
    }
}
