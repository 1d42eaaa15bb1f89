//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod body;
pub mod boundary;
pub mod collision;
pub mod control;
pub mod kinematics;
pub mod scene;
pub mod spawner;
pub mod state;
pub mod tick;

pub use body::{Body, BodyId, BodyKind, Playfield};
pub use boundary::HorizontalPolicy;
pub use collision::{hazard_overlaps, overlapping_hazards};
pub use control::{InputSignal, InputState};
pub use scene::{SceneBody, SceneGeometry, StaticScene};
pub use spawner::{HazardSpec, Spawner};
pub use state::{EndReason, FrameSnapshot, GameEvent, GameState};
pub use tick::tick;
