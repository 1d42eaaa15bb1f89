//! Body entity model shared by the player, scene props and hazards

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Stable body identifier
///
/// `BodyId::PLAYER` is reserved; scene props and hazards draw ids from the
/// game state's allocator starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl BodyId {
    pub const PLAYER: BodyId = BodyId(0);
}

/// What kind of body this is
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyKind {
    /// The single input-controlled body
    Player,
    /// Non-player scene body (simulated, never collision-tested)
    Prop,
    /// Spawned enemy; `size` is both its extent and its collision margin
    Hazard { size: f32 },
}

/// A simulated axis-aligned body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: BodyId,
    pub kind: BodyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Width/height extent used by boundary and overlap tests
    pub dimensions: Vec2,
    /// Offset from the nominal anchor to the true geometric origin
    pub initial_offset: Vec2,
}

impl Body {
    /// Player body at the playfield origin, at rest
    pub fn player(dimensions: Vec2, initial_offset: Vec2) -> Self {
        Self {
            id: BodyId::PLAYER,
            kind: BodyKind::Player,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            dimensions,
            initial_offset,
        }
    }

    pub fn prop(id: BodyId, dimensions: Vec2, initial_offset: Vec2) -> Self {
        Self {
            id,
            kind: BodyKind::Prop,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            dimensions,
            initial_offset,
        }
    }

    /// Square hazard of the given size
    pub fn hazard(id: BodyId, pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            id,
            kind: BodyKind::Hazard { size },
            pos,
            vel,
            dimensions: Vec2::splat(size),
            initial_offset: Vec2::ZERO,
        }
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, BodyKind::Player)
    }

    /// Hazard size, `None` for non-hazards
    pub fn hazard_size(&self) -> Option<f32> {
        match self.kind {
            BodyKind::Hazard { size } => Some(size),
            _ => None,
        }
    }

    /// Horizontal facing for renderers that mirror sprites (1 when at rest)
    pub fn facing(&self) -> f32 {
        if self.vel.x < 0.0 { -1.0 } else { 1.0 }
    }

    pub fn is_grounded(&self) -> bool {
        self.vel.y == 0.0
    }
}

/// Playable area size, fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
