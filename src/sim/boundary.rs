//! Playfield edge resolution
//!
//! Horizontal edges use each body's width as margin. The left margin depends
//! on the direction of travel: a body moving left is anchored at its trailing
//! edge, so its left margin is its own width. There is no ceiling.

use serde::{Deserialize, Serialize};

use super::body::{Body, Playfield};

/// How a body reacts to the left/right playfield edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalPolicy {
    /// Clamp to the edge and reverse horizontal velocity
    Bounce,
    /// Clamp to the edge, velocity untouched
    Stop,
}

/// Left margin for the body's current direction of travel
#[inline]
fn left_margin(body: &Body) -> f32 {
    if body.vel.x > 0.0 { 0.0 } else { body.dimensions.x }
}

/// Right margin (rightmost allowed anchor position)
#[inline]
fn right_margin(body: &Body, width: f32) -> f32 {
    width - body.dimensions.x
}

/// Apply a horizontal policy against the playfield width
pub fn resolve_horizontal(body: &mut Body, width: f32, policy: HorizontalPolicy) {
    match policy {
        HorizontalPolicy::Bounce => bounce(body, width),
        HorizontalPolicy::Stop => stop(body, width),
    }
}

fn bounce(body: &mut Body, width: f32) {
    let left = left_margin(body);
    if body.pos.x < left {
        body.pos.x = left;
        body.vel.x = -body.vel.x;
    }

    let right = right_margin(body, width);
    if body.pos.x > right {
        body.pos.x = right;
        body.vel.x = -body.vel.x;
    }
}

fn stop(body: &mut Body, width: f32) {
    let left = left_margin(body);
    body.pos.x = body.pos.x.max(left);

    let right = right_margin(body, width);
    body.pos.x = body.pos.x.min(right);
}

/// Lowest allowed vertical position for the body
#[inline]
pub fn floor_threshold(body: &Body, height: f32) -> f32 {
    -height * 0.5 + body.dimensions.y + body.initial_offset.y
}

/// Land the body on the floor if it fell through. Returns true on landing.
pub fn resolve_floor(body: &mut Body, height: f32) -> bool {
    let bottom = floor_threshold(body, height);
    if body.pos.y < bottom {
        body.pos.y = bottom;
        body.vel.y = 0.0;
        return true;
    }
    false
}

/// Horizontal policy followed by the floor
pub fn resolve(body: &mut Body, playfield: Playfield, policy: HorizontalPolicy) {
    resolve_horizontal(body, playfield.width, policy);
    resolve_floor(body, playfield.height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::BodyId;
    use glam::Vec2;
    use proptest::prelude::*;

    fn hazard(pos: Vec2, vel: Vec2) -> Body {
        Body::hazard(BodyId(1), pos, vel, 10.0)
    }

    #[test]
    fn test_bounce_off_left_margin() {
        // Moving left: left margin is the body's own width (10)
        let mut body = hazard(Vec2::new(4.0, 0.0), Vec2::new(-0.7, 0.0));
        resolve_horizontal(&mut body, 400.0, HorizontalPolicy::Bounce);
        assert_eq!(body.pos.x, 10.0);
        assert_eq!(body.vel.x, 0.7);
    }

    #[test]
    fn test_bounce_off_right_margin() {
        let mut body = hazard(Vec2::new(395.0, 0.0), Vec2::new(0.4, 0.0));
        resolve_horizontal(&mut body, 400.0, HorizontalPolicy::Bounce);
        assert_eq!(body.pos.x, 390.0);
        assert_eq!(body.vel.x, -0.4);
    }

    #[test]
    fn test_rightward_body_uses_zero_left_margin() {
        let mut body = hazard(Vec2::new(4.0, 0.0), Vec2::new(0.5, 0.0));
        resolve_horizontal(&mut body, 400.0, HorizontalPolicy::Bounce);
        assert_eq!(body.pos.x, 4.0);
        assert_eq!(body.vel.x, 0.5);
    }

    #[test]
    fn test_stop_keeps_velocity() {
        let mut body = hazard(Vec2::new(-50.0, 0.0), Vec2::new(-2.0, 0.0));
        resolve_horizontal(&mut body, 400.0, HorizontalPolicy::Stop);
        assert_eq!(body.pos.x, 10.0);
        assert_eq!(body.vel.x, -2.0);

        let mut body = hazard(Vec2::new(500.0, 0.0), Vec2::new(3.0, 0.0));
        resolve_horizontal(&mut body, 400.0, HorizontalPolicy::Stop);
        assert_eq!(body.pos.x, 390.0);
        assert_eq!(body.vel.x, 3.0);
    }

    #[test]
    fn test_floor_lands_body() {
        let mut body = Body::player(Vec2::new(40.0, 30.0), Vec2::new(-2.0, 5.0));
        body.pos.y = -200.0;
        body.vel.y = -4.0;
        // -300 * 0.5 + 30 + 5
        assert_eq!(floor_threshold(&body, 300.0), -115.0);
        assert!(resolve_floor(&mut body, 300.0));
        assert_eq!(body.pos.y, -115.0);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_no_ceiling() {
        let mut body = hazard(Vec2::new(100.0, 10_000.0), Vec2::new(0.0, 5.0));
        resolve(&mut body, Playfield::new(400.0, 300.0), HorizontalPolicy::Bounce);
        assert_eq!(body.pos.y, 10_000.0);
        assert_eq!(body.vel.y, 5.0);
    }

    proptest! {
        #[test]
        fn prop_stop_is_idempotent(x in -1000.0f32..1000.0, vx in -5.0f32..5.0) {
            let mut once = hazard(Vec2::new(x, 0.0), Vec2::new(vx, 0.0));
            resolve_horizontal(&mut once, 400.0, HorizontalPolicy::Stop);
            let mut twice = once.clone();
            resolve_horizontal(&mut twice, 400.0, HorizontalPolicy::Stop);
            prop_assert_eq!(once.pos, twice.pos);
            prop_assert_eq!(once.vel, twice.vel);
        }
    }
}
