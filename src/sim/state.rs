//! Game state and core simulation types
//!
//! Everything a tick mutates lives in [`GameState`]; separate instances never
//! share anything.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::{Body, BodyId, Playfield};
use super::scene::SceneGeometry;
use super::spawner::{HazardSpec, Spawner};
use crate::consts::{PLAYER_DIMENSIONS, PLAYER_INITIAL_OFFSET};
use crate::error::SceneError;
use crate::tuning::Tuning;

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Escape signal held
    Escaped,
    /// Lives reached zero
    OutOfLives,
}

/// Things that happened during the last tick, for the rendering side
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    HazardSpawned(BodyId),
    HazardRemoved(BodyId),
    LifeLost { remaining: u8 },
    LevelUp(u32),
    Ended(EndReason),
}

/// Per-frame view handed to a renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: f64,
    pub lives: u8,
    pub level: u32,
    pub ended: Option<EndReason>,
    pub player: Body,
    pub props: Vec<Body>,
    pub hazards: Vec<Body>,
    /// Hazards added during the last tick (animate entry)
    pub spawned: Vec<BodyId>,
    /// Hazards removed during the last tick (animate exit)
    pub removed: Vec<BodyId>,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub playfield: Playfield,
    /// Player lives; zero is terminal
    pub lives: u8,
    /// Incremented once per scheduled spawn, never decreases
    pub level: u32,
    /// Frame clock value of the previous tick
    pub time: f64,
    /// Number of ticks run
    pub time_ticks: u64,
    /// The input-controlled body
    pub player: Body,
    /// Other scene bodies
    pub props: Vec<Body>,
    /// Active hazards in spawn order
    pub hazards: Vec<Body>,
    pub spawner: Spawner,
    /// Set once and never cleared
    pub ended: Option<EndReason>,
    /// Events of the last tick, plus any recorded since it (construction,
    /// manual inserts) until the next tick reports them
    pub events: Vec<GameEvent>,
    /// How many leading `events` the last tick already reported
    pub(crate) reported: usize,
    pub(crate) rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// New game with the built-in scene and default tuning
    pub fn new(seed: u64, playfield: Playfield) -> Self {
        let player = Body::player(
            Vec2::from(PLAYER_DIMENSIONS),
            Vec2::from(PLAYER_INITIAL_OFFSET),
        );
        Self::assemble(seed, Tuning::default(), playfield, player)
    }

    /// New game from a scene geometry provider
    ///
    /// The tuning must validate, the scene must contain exactly one body with
    /// the player id, and every body must have strictly positive dimensions.
    pub fn from_scene<S>(
        seed: u64,
        tuning: Tuning,
        playfield: Playfield,
        scene: &S,
    ) -> Result<Self, SceneError>
    where
        S: SceneGeometry + ?Sized,
    {
        tuning.validate()?;

        let player_id = scene.player_id();
        let mut player = None;
        let mut props = Vec::new();

        for body in scene.scene_bodies() {
            if !(body.dimensions.x > 0.0 && body.dimensions.y > 0.0) {
                return Err(SceneError::BadDimensions {
                    id: body.id,
                    width: body.dimensions.x,
                    height: body.dimensions.y,
                });
            }
            if body.id == player_id {
                if player.is_some() {
                    return Err(SceneError::DuplicatePlayer(body.id));
                }
                player = Some(Body::player(body.dimensions, body.initial_offset));
            } else {
                props.push(body);
            }
        }

        let player = player.ok_or_else(|| SceneError::MissingPlayer(player_id.to_string()))?;
        let mut state = Self::assemble(seed, tuning, playfield, player);
        for body in props {
            let id = BodyId(state.next_entity_id());
            state.props.push(Body::prop(id, body.dimensions, body.initial_offset));
        }
        Ok(state)
    }

    /// Shared constructor: starting counters plus one opening hazard
    fn assemble(seed: u64, tuning: Tuning, playfield: Playfield, player: Body) -> Self {
        let mut state = Self {
            seed,
            lives: tuning.starting_lives,
            level: tuning.starting_level,
            spawner: Spawner::new(tuning.initial_spawn_threshold),
            tuning,
            playfield,
            time: 0.0,
            time_ticks: 0,
            player,
            props: Vec::new(),
            hazards: Vec::new(),
            ended: None,
            events: Vec::new(),
            reported: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };

        // The game opens with one hazard already in play; its spawn event is
        // reported by the first tick
        let spec = HazardSpec::roll(&mut state.rng, &state.tuning);
        state.spawn_hazard(spec);

        log::info!(
            "New game: seed={} playfield={}x{} lives={}",
            seed,
            playfield.width,
            playfield.height,
            state.lives
        );
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a hazard with explicit initial state
    pub fn insert_hazard(&mut self, pos: Vec2, vel: Vec2, size: f32) -> BodyId {
        let id = BodyId(self.next_entity_id());
        self.hazards.push(Body::hazard(id, pos, vel, size));
        self.events.push(GameEvent::HazardSpawned(id));
        id
    }

    /// Add a hazard at the right edge from a rolled spec
    pub fn spawn_hazard(&mut self, spec: HazardSpec) -> BodyId {
        let id = BodyId(self.next_entity_id());
        self.hazards.push(spec.into_body(id, self.playfield));
        self.events.push(GameEvent::HazardSpawned(id));
        id
    }

    /// Remove a hazard by id. Removing an absent hazard is a no-op.
    pub fn remove_hazard(&mut self, id: BodyId) -> bool {
        let Some(index) = self.hazards.iter().position(|h| h.id == id) else {
            return false;
        };
        self.hazards.remove(index);
        self.events.push(GameEvent::HazardRemoved(id));
        true
    }

    /// Remove every hit hazard and take exactly one life for the whole set
    pub fn resolve_hits(&mut self, hits: &[BodyId]) {
        if hits.is_empty() {
            return;
        }
        for &id in hits {
            if self.remove_hazard(id) {
                log::debug!("Hazard {:?} hit the player", id);
            }
        }

        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::LifeLost {
            remaining: self.lives,
        });
        log::info!("Life lost ({} hits), {} remaining", hits.len(), self.lives);

        if self.lives == 0 {
            self.end(EndReason::OutOfLives);
        }
    }

    /// Raise the termination signal (first reason wins)
    pub fn end(&mut self, reason: EndReason) {
        if self.ended.is_none() {
            self.ended = Some(reason);
            self.events.push(GameEvent::Ended(reason));
            log::info!(
                "Game over ({:?}) at level {} after {} ticks",
                reason,
                self.level,
                self.time_ticks
            );
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.ended.is_some()
    }

    pub fn hazard(&self, id: BodyId) -> Option<&Body> {
        self.hazards.iter().find(|h| h.id == id)
    }

    /// Renderer view of the current state and the last tick's events
    pub fn snapshot(&self) -> FrameSnapshot {
        let mut spawned = Vec::new();
        let mut removed = Vec::new();
        for event in &self.events {
            match *event {
                GameEvent::HazardSpawned(id) => spawned.push(id),
                GameEvent::HazardRemoved(id) => removed.push(id),
                _ => {}
            }
        }

        FrameSnapshot {
            time: self.time,
            lives: self.lives,
            level: self.level,
            ended: self.ended,
            player: self.player.clone(),
            props: self.props.clone(),
            hazards: self.hazards.clone(),
            spawned,
            removed,
        }
    }
}
