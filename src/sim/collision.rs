//! Player vs hazard overlap detection
//!
//! The hit zone is a band starting at the player's leading edge and spanning
//! a fraction of its width. Vertically the band covers one body height below
//! the player's top. Detection is a pure query: callers decide what a hit means.

use super::body::{Body, BodyId};

/// Horizontal reference edge of the player for its direction of travel
///
/// Right edge (the anchor) when moving right or at rest, left edge otherwise.
#[inline]
pub fn leading_edge(player: &Body) -> f32 {
    if player.vel.x >= 0.0 {
        player.pos.x
    } else {
        player.pos.x - player.dimensions.x
    }
}

/// Top of the player's vertical hit band
#[inline]
pub fn player_top(player: &Body) -> f32 {
    player.pos.y - player.initial_offset.y
}

/// Check whether a single hazard overlaps the player's hit zone
///
/// `tolerance` is the share of the player's width forming the horizontal band.
/// Non-hazard bodies never overlap.
pub fn hazard_overlaps(player: &Body, hazard: &Body, tolerance: f32) -> bool {
    let Some(size) = hazard.hazard_size() else {
        return false;
    };
    let half = size * 0.5;

    let left = leading_edge(player);
    let center_x = hazard.pos.x - half;
    let horizontal = center_x >= left && center_x <= left + player.dimensions.x * tolerance;
    if !horizontal {
        return false;
    }

    let top = player_top(player);
    hazard.pos.y + half >= top - player.dimensions.y && hazard.pos.y - half <= top
}

/// Ids of every hazard overlapping the player, in collection order
pub fn overlapping_hazards(player: &Body, hazards: &[Body], tolerance: f32) -> Vec<BodyId> {
    hazards
        .iter()
        .filter(|hazard| hazard_overlaps(player, hazard, tolerance))
        .map(|hazard| hazard.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    const TOL: f32 = 0.9;

    /// 40x40 player at (100, 0) with no offset: top = 0, band y in [-40, 0]
    fn player(vel_x: f32) -> Body {
        let mut p = Body::player(Vec2::new(40.0, 40.0), Vec2::ZERO);
        p.pos = Vec2::new(100.0, 0.0);
        p.vel.x = vel_x;
        p
    }

    fn hazard(id: u32, x: f32, y: f32) -> Body {
        Body::hazard(BodyId(id), Vec2::new(x, y), Vec2::ZERO, 10.0)
    }

    #[test]
    fn test_hit_ahead_when_moving_right() {
        // center_x = 115 within [100, 136]
        assert!(hazard_overlaps(&player(1.0), &hazard(1, 120.0, -20.0), TOL));
        // center_x = 140 past the tolerance band
        assert!(!hazard_overlaps(&player(1.0), &hazard(1, 145.0, -20.0), TOL));
        // center_x = 95 behind the leading edge
        assert!(!hazard_overlaps(&player(1.0), &hazard(1, 100.0, -20.0), TOL));
    }

    #[test]
    fn test_leading_edge_flips_when_moving_left() {
        let p = player(-1.0);
        assert_eq!(leading_edge(&p), 60.0);
        // center_x = 75 within [60, 96]
        assert!(hazard_overlaps(&p, &hazard(1, 80.0, -20.0), TOL));
        // Same hazard ahead of a rightward player is behind a leftward one
        assert!(!hazard_overlaps(&p, &hazard(1, 120.0, -20.0), TOL));
    }

    #[test]
    fn test_stationary_uses_right_edge() {
        assert_eq!(leading_edge(&player(0.0)), 100.0);
    }

    #[test]
    fn test_vertical_band() {
        let p = player(1.0);
        // Hazard extent [-45, -35] touches band bottom at -40
        assert!(hazard_overlaps(&p, &hazard(1, 120.0, -40.0), TOL));
        // Extent [-55, -45] is below the band
        assert!(!hazard_overlaps(&p, &hazard(1, 120.0, -50.0), TOL));
        // Extent [6, 16] is above the top
        assert!(!hazard_overlaps(&p, &hazard(1, 120.0, 11.0), TOL));
        // Extent [0, 10] touches the top
        assert!(hazard_overlaps(&p, &hazard(1, 120.0, 5.0), TOL));
    }

    #[test]
    fn test_initial_offset_shifts_top() {
        let mut p = player(1.0);
        p.initial_offset.y = 30.0;
        // top = -30, band [-70, -30]
        assert!(!hazard_overlaps(&p, &hazard(1, 120.0, -10.0), TOL));
        assert!(hazard_overlaps(&p, &hazard(1, 120.0, -50.0), TOL));
    }

    #[test]
    fn test_overlap_set_and_no_mutation() {
        let p = player(1.0);
        let hazards = vec![
            hazard(1, 120.0, -20.0),
            hazard(2, 300.0, -20.0),
            hazard(3, 125.0, -10.0),
        ];
        let before = hazards.clone();
        let hits = overlapping_hazards(&p, &hazards, TOL);
        assert_eq!(hits, vec![BodyId(1), BodyId(3)]);
        assert_eq!(hazards, before);

        assert!(overlapping_hazards(&p, &[], TOL).is_empty());
    }

    #[test]
    fn test_non_hazard_never_overlaps() {
        let p = player(1.0);
        let mut prop = Body::prop(BodyId(9), Vec2::splat(10.0), Vec2::ZERO);
        prop.pos = Vec2::new(120.0, -20.0);
        assert!(!hazard_overlaps(&p, &prop, TOL));
    }
}
