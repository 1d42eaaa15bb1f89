//! Static scene geometry supplied at construction
//!
//! Geometry is measured by the rendering side; the simulation only consumes
//! ids, offsets and extents.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYER_DIMENSIONS, PLAYER_INITIAL_OFFSET, PLAYER_SCENE_ID};

/// One pre-measured scene body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneBody {
    pub id: String,
    pub initial_offset: Vec2,
    pub dimensions: Vec2,
}

impl SceneBody {
    pub fn new(id: impl Into<String>, initial_offset: Vec2, dimensions: Vec2) -> Self {
        Self {
            id: id.into(),
            initial_offset,
            dimensions,
        }
    }
}

/// Provider of the initial non-hazard bodies
pub trait SceneGeometry {
    /// Scene id that marks the player body
    fn player_id(&self) -> &str {
        PLAYER_SCENE_ID
    }

    fn scene_bodies(&self) -> Vec<SceneBody>;
}

impl SceneGeometry for [SceneBody] {
    fn scene_bodies(&self) -> Vec<SceneBody> {
        self.to_vec()
    }
}

impl SceneGeometry for Vec<SceneBody> {
    fn scene_bodies(&self) -> Vec<SceneBody> {
        self.clone()
    }
}

/// The built-in scene: just the player, with its pre-measured geometry
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticScene;

impl SceneGeometry for StaticScene {
    fn scene_bodies(&self) -> Vec<SceneBody> {
        vec![SceneBody::new(
            PLAYER_SCENE_ID,
            Vec2::from(PLAYER_INITIAL_OFFSET),
            Vec2::from(PLAYER_DIMENSIONS),
        )]
    }
}
