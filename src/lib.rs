//! Yoshi Dash - A side-scrolling platform dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, boundaries, collisions, game state)
//! - `tuning`: Data-driven physics and progression constants
//! - `error`: Errors raised while setting up a game
//!
//! Rendering, keyboard capture and scene measurement live outside this crate.
//! A driver owns a [`sim::GameState`] and an [`sim::InputState`] and calls
//! [`sim::tick`] once per frame.

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, SceneError};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Multiplier applied to the frame delta before integration
    pub const REFRESH_RATE: f32 = 1.0;

    /// Downward acceleration added to every body each tick
    pub const GRAVITY: f32 = -0.5;
    /// Horizontal friction coefficient (fraction of speed removed per tick)
    pub const FRICTION: f32 = 0.16;

    /// Horizontal impulse per tick while a move signal is held
    pub const SPEED_MOVE: f32 = 0.19;
    /// Upward impulse of a grounded jump
    pub const SPEED_JUMP: f32 = 3.8;
    /// Fraction of horizontal velocity added again on jump
    pub const JUMP_CARRY: f32 = 0.19;

    pub const STARTING_LIVES: u8 = 3;
    pub const STARTING_LEVEL: u32 = 1;

    /// Time of the first scheduled spawn (same units as the frame clock)
    pub const INITIAL_SPAWN_THRESHOLD: f64 = 3000.0;
    pub const HAZARD_MAX_SIZE: f32 = 20.0;
    pub const HAZARD_MIN_SIZE: f32 = 5.0;
    pub const HAZARD_MAX_SPEED: f32 = 1.0;

    /// Share of the player's width that counts as a hit zone
    pub const COLLISION_TOLERANCE: f32 = 0.9;

    /// Reserved scene id of the player body
    pub const PLAYER_SCENE_ID: &str = "yoshi";
    /// Pre-measured player geometry (offset of the drawing origin)
    pub const PLAYER_INITIAL_OFFSET: (f32, f32) = (-10.761_391, 29.352_318);
    /// Pre-measured player geometry (bounding box)
    pub const PLAYER_DIMENSIONS: (f32, f32) = (116.800_9, 93.045_2);
}
