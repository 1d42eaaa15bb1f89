//! Kinematics integration: accelerations into velocity, velocity into position

use glam::Vec2;

use super::body::Body;

/// Accumulate an acceleration into the body's velocity, per axis
#[inline]
pub fn accelerate(body: &mut Body, acceleration: Vec2) {
    body.vel += acceleration;
}

/// Constant vertical acceleration (negative pulls down)
#[inline]
pub fn apply_gravity(body: &mut Body, gravity: f32) {
    accelerate(body, Vec2::new(0.0, gravity));
}

/// Horizontal friction proportional to speed, opposing the direction of travel
///
/// A body at rest receives nothing. The full computed amount is applied even
/// when it would carry the velocity past zero; with `friction <= 1` it never does.
#[inline]
pub fn apply_friction(body: &mut Body, friction: f32) {
    let delta = -body.vel.x.signum() * (body.vel.x * friction).abs();
    accelerate(body, Vec2::new(delta, 0.0));
}

/// Integrate velocity into position over `dt` (zero or negative `dt` accepted)
#[inline]
pub fn integrate(body: &mut Body, dt: f32) {
    body.pos += body.vel * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::BodyId;
    use proptest::prelude::*;

    fn body_with_vel(vel: Vec2) -> Body {
        Body::hazard(BodyId(1), Vec2::ZERO, vel, 10.0)
    }

    #[test]
    fn test_integrate_scales_by_dt() {
        let mut body = body_with_vel(Vec2::new(2.0, -1.0));
        integrate(&mut body, 16.0);
        assert_eq!(body.pos, Vec2::new(32.0, -16.0));

        integrate(&mut body, 0.0);
        assert_eq!(body.pos, Vec2::new(32.0, -16.0));

        // Negative dt moves backwards
        integrate(&mut body, -16.0);
        assert_eq!(body.pos, Vec2::ZERO);
    }

    #[test]
    fn test_gravity_monotonic_until_clamped() {
        let mut body = body_with_vel(Vec2::ZERO);
        let mut last = body.vel.y;
        for _ in 0..20 {
            apply_gravity(&mut body, -0.5);
            integrate(&mut body, 1.0);
            assert!(body.vel.y < last);
            last = body.vel.y;
        }
    }

    #[test]
    fn test_friction_stationary_body_unaffected() {
        let mut body = body_with_vel(Vec2::ZERO);
        apply_friction(&mut body, 0.16);
        assert_eq!(body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_friction_literal_overshoot() {
        // Coefficients above 1 push the body past zero; this is not corrected
        let mut body = body_with_vel(Vec2::new(1.0, 0.0));
        apply_friction(&mut body, 1.5);
        assert!((body.vel.x - -0.5).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_friction_never_increases_speed(vx in -100.0f32..100.0, friction in 0.0f32..=1.0) {
            prop_assume!(vx != 0.0);
            let mut body = body_with_vel(Vec2::new(vx, 3.0));
            apply_friction(&mut body, friction);
            prop_assert!(body.vel.x.abs() <= vx.abs());
            // Never flips sign for friction in [0, 1]
            prop_assert!(body.vel.x == 0.0 || body.vel.x.signum() == vx.signum());
            prop_assert_eq!(body.vel.y, 3.0);
        }
    }
}
