//! Time-driven hazard spawning
//!
//! A spawn fires when the time cursor passes the threshold. Each spawn pushes
//! the threshold out by a random fraction of itself, so intervals keep growing.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::body::{Body, BodyId, Playfield};
use crate::tuning::Tuning;

/// Randomized initial state of a new hazard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HazardSpec {
    pub size: f32,
    /// Leftward speed (applied as negative x velocity)
    pub speed: f32,
}

impl HazardSpec {
    /// Roll a size in `[min, max)` (floored at `min`) and a speed in `[0, max_speed)`
    pub fn roll(rng: &mut impl Rng, tuning: &Tuning) -> Self {
        let size = (rng.random::<f32>() * tuning.hazard_max_size).max(tuning.hazard_min_size);
        let speed = rng.random::<f32>() * tuning.hazard_max_speed;
        Self { size, speed }
    }

    /// Hazard at the right edge of the playfield moving left
    pub fn into_body(self, id: BodyId, playfield: Playfield) -> Body {
        Body::hazard(
            id,
            Vec2::new(playfield.width - self.size, 0.0),
            Vec2::new(-self.speed, 0.0),
            self.size,
        )
    }
}

/// Spawn schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    /// Time cursor value after which the next hazard spawns
    pub threshold: f64,
}

impl Spawner {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Whether the time cursor has passed the threshold
    #[inline]
    pub fn is_due(&self, now: f64) -> bool {
        now > self.threshold
    }

    /// Grow the threshold by `threshold * factor`
    ///
    /// The factor is floored at `f64::EPSILON` so the threshold always moves
    /// forward.
    pub fn advance(&mut self, factor: f64) {
        let factor = factor.max(f64::EPSILON);
        self.threshold += self.threshold * factor;
    }

    /// Roll and return a hazard spec if the schedule is due, advancing it
    ///
    /// Evaluated once per tick; at most one hazard per call.
    pub fn poll(&mut self, now: f64, rng: &mut impl Rng, tuning: &Tuning) -> Option<HazardSpec> {
        if !self.is_due(now) {
            return None;
        }
        let spec = HazardSpec::roll(rng, tuning);
        self.advance(rng.random::<f64>());
        log::debug!(
            "Spawn due at t={:.1}: size={:.2} speed={:.3}, next threshold {:.1}",
            now,
            spec.size,
            spec.speed,
            self.threshold
        );
        Some(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_not_due_before_threshold() {
        let mut spawner = Spawner::new(3000.0);
        let mut rng = Pcg32::seed_from_u64(1);
        let tuning = Tuning::default();
        assert!(spawner.poll(2999.0, &mut rng, &tuning).is_none());
        // Strictly greater
        assert!(spawner.poll(3000.0, &mut rng, &tuning).is_none());
        assert_eq!(spawner.threshold, 3000.0);
    }

    #[test]
    fn test_spawn_once_per_poll() {
        let mut spawner = Spawner::new(100.0);
        let mut rng = Pcg32::seed_from_u64(7);
        let tuning = Tuning::default();
        // Far past the threshold still yields a single hazard per call
        assert!(spawner.poll(1_000_000.0, &mut rng, &tuning).is_some());
        assert!(spawner.threshold > 100.0);
        assert!(spawner.threshold <= 200.0);
    }

    #[test]
    fn test_zero_factor_still_advances() {
        let mut spawner = Spawner::new(100.0);
        spawner.advance(0.0);
        assert!(spawner.threshold > 100.0);
    }

    #[test]
    fn test_hazard_body_at_right_edge() {
        let spec = HazardSpec { size: 8.0, speed: 0.25 };
        let body = spec.into_body(BodyId(3), Playfield::new(400.0, 300.0));
        assert_eq!(body.pos, Vec2::new(392.0, 0.0));
        assert_eq!(body.vel, Vec2::new(-0.25, 0.0));
        assert_eq!(body.hazard_size(), Some(8.0));
    }

    proptest! {
        #[test]
        fn prop_rolled_hazards_in_range(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let tuning = Tuning::default();
            let spec = HazardSpec::roll(&mut rng, &tuning);
            prop_assert!(spec.size >= 5.0 && spec.size < 20.0);
            prop_assert!(spec.speed >= 0.0 && spec.speed < 1.0);
        }

        #[test]
        fn prop_threshold_strictly_increases(seed in any::<u64>(), polls in 1usize..40) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let tuning = Tuning::default();
            let mut spawner = Spawner::new(10.0);
            for _ in 0..polls {
                let before = spawner.threshold;
                let now = before + 1.0;
                prop_assert!(spawner.poll(now, &mut rng, &tuning).is_some());
                prop_assert!(spawner.threshold > before);
            }
        }
    }
}
