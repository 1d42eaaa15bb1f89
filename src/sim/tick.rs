//! Per-frame simulation tick
//!
//! Rules run in a fixed order: controls, kinematics, collisions, boundaries
//! and finally spawning.

use super::boundary::{self, HorizontalPolicy};
use super::collision::overlapping_hazards;
use super::control::{InputState, apply_controls};
use super::kinematics::{apply_friction, apply_gravity, integrate};
use super::state::{EndReason, GameEvent, GameState};

/// Advance the game to frame clock value `t`
///
/// Integrates over `t - state.time` (scaled by the refresh rate), then stores
/// `t` as the new time cursor. Returns whether the game has ended; the driver
/// should stop ticking once this is true.
///
/// `state.events` afterwards holds this tick's events, preceded by any
/// recorded since the previous tick (such as the opening hazard's spawn).
pub fn tick(state: &mut GameState, input: &mut InputState, t: f64) -> bool {
    let reported = state.reported.min(state.events.len());
    state.events.drain(..reported);
    state.time_ticks += 1;

    let dt = (t - state.time) as f32 * state.tuning.refresh_rate;
    let tuning = &state.tuning;

    // Controls
    let controls = apply_controls(&mut state.player, input, tuning);
    if controls.jumped {
        log::trace!("Jump at t={:.1}", t);
    }

    // Kinematics: scene bodies feel friction, hazards only gravity
    for body in std::iter::once(&mut state.player).chain(state.props.iter_mut()) {
        apply_gravity(body, tuning.gravity);
        apply_friction(body, tuning.friction);
        integrate(body, dt);
    }
    for hazard in &mut state.hazards {
        apply_gravity(hazard, tuning.gravity);
        integrate(hazard, dt);
    }

    // Collisions
    let hits = overlapping_hazards(&state.player, &state.hazards, tuning.collision_tolerance);
    if controls.escape {
        state.end(EndReason::Escaped);
    }
    state.resolve_hits(&hits);

    // Boundaries: scene bodies stop at walls, hazards bounce
    let playfield = state.playfield;
    for body in std::iter::once(&mut state.player).chain(state.props.iter_mut()) {
        boundary::resolve(body, playfield, HorizontalPolicy::Stop);
    }
    for hazard in &mut state.hazards {
        boundary::resolve(hazard, playfield, HorizontalPolicy::Bounce);
    }

    // Spawning
    if let Some(spec) = state.spawner.poll(t, &mut state.rng, &state.tuning) {
        let id = state.spawn_hazard(spec);
        state.level += 1;
        state.events.push(GameEvent::LevelUp(state.level));
        log::info!(
            "Level {}: hazard {:?} spawned (size {:.1}), {} active",
            state.level,
            id,
            spec.size,
            state.hazards.len()
        );
    }

    state.time = t;
    state.reported = state.events.len();
    log::trace!(
        "tick {} t={:.1} dt={:.2} player=({:.1}, {:.1})",
        state.time_ticks,
        t,
        dt,
        state.player.pos.x,
        state.player.pos.y
    );

    state.is_terminated()
}
