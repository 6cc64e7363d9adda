//! Hit tests between ordnance, the ship and formation units
//!
//! Three geometric semantics are in play:
//! - rectangle/rectangle overlap for projectiles and the ship
//! - squared corner distance against a circle for the blast
//! - horizontal band overlap (with a tolerance corridor) for the beam
//!
//! Everything here is pure; the caller decides what to remove.

use glam::Vec2;

use super::entities::{FormationUnit, Projectile};
use super::geom::Rect;
use crate::consts::BEAM_HIT_TOLERANCE;

/// A projectile/unit pair that destroyed each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileHit {
    pub projectile: usize,
    pub unit: usize,
}

/// Pair projectiles with units they overlap
///
/// Each projectile takes out at most one unit (the first overlapping unit in
/// formation order that is still standing) and each unit is hit by at most one
/// projectile. Projectiles are considered in list order.
pub fn projectile_unit_hits(
    projectiles: &[Projectile],
    units: &[FormationUnit],
) -> Vec<ProjectileHit> {
    let mut hits = Vec::new();
    let mut unit_taken = vec![false; units.len()];

    for (pi, projectile) in projectiles.iter().enumerate() {
        let target = units
            .iter()
            .enumerate()
            .find(|(ui, unit)| !unit_taken[*ui] && projectile.rect.intersects(&unit.rect));
        if let Some((ui, _)) = target {
            unit_taken[ui] = true;
            hits.push(ProjectileHit {
                projectile: pi,
                unit: ui,
            });
        }
    }

    hits
}

/// Corner-distance test against a blast circle
///
/// True if any corner of `rect` lies strictly inside the circle. A corner
/// exactly on the boundary does not count.
pub fn blast_hits(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let radius_sq = radius * radius;
    rect.corners()
        .iter()
        .any(|corner| corner.distance_squared(center) < radius_sq)
}

/// Band test against a beam
///
/// The hit corridor extends past the drawn beam by `half_width - 5` on each
/// side, where `half_width` is half the beam's tip ball diameter.
pub fn beam_hits(beam: &Rect, half_width: f32, rect: &Rect) -> bool {
    rect.right() >= beam.left() - half_width + BEAM_HIT_TOLERANCE
        && rect.left() <= beam.right() + half_width - BEAM_HIT_TOLERANCE
}

/// First unit overlapping the ship, if any
pub fn ship_contact(ship: &Rect, units: &[FormationUnit]) -> Option<usize> {
    units.iter().position(|unit| ship.intersects(&unit.rect))
}

/// First unit whose bottom edge reached the bottom of the field, if any
pub fn unit_at_bottom(units: &[FormationUnit], field_height: f32) -> Option<usize> {
    units
        .iter()
        .position(|unit| unit.rect.bottom() >= field_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Rgb, Settings};

    fn unit_at(x: f32, y: f32, w: f32, h: f32) -> FormationUnit {
        FormationUnit {
            rect: Rect::new(x, y, w, h),
        }
    }

    fn projectile_at(x: f32, y: f32) -> Projectile {
        Projectile {
            rect: Rect::new(x, y, 3.0, 15.0),
            x_dir: 0,
            color: Rgb::BLACK,
        }
    }

    #[test]
    fn test_projectile_hits_one_unit_each() {
        // Two overlapping units under one projectile, second projectile on the same spot
        let units = vec![
            unit_at(0.0, 0.0, 20.0, 20.0),
            unit_at(5.0, 0.0, 20.0, 20.0),
        ];
        let projectiles = vec![projectile_at(10.0, 5.0), projectile_at(10.0, 5.0)];

        let hits = projectile_unit_hits(&projectiles, &units);
        assert_eq!(
            hits,
            vec![
                ProjectileHit { projectile: 0, unit: 0 },
                ProjectileHit { projectile: 1, unit: 1 },
            ]
        );
    }

    #[test]
    fn test_unit_hit_only_once() {
        let units = vec![unit_at(0.0, 0.0, 20.0, 20.0)];
        let projectiles = vec![projectile_at(5.0, 5.0), projectile_at(6.0, 5.0)];
        let hits = projectile_unit_hits(&projectiles, &units);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].projectile, 0);
    }

    #[test]
    fn test_projectile_miss() {
        let units = vec![unit_at(0.0, 0.0, 20.0, 20.0)];
        let projectiles = vec![projectile_at(50.0, 5.0)];
        assert!(projectile_unit_hits(&projectiles, &units).is_empty());
    }

    #[test]
    fn test_blast_boundary_is_exclusive() {
        // Nearest corner at (30, 40) → distance 50 from the origin
        let rect = Rect::new(30.0, 40.0, 10.0, 10.0);
        assert!(!blast_hits(Vec2::ZERO, 50.0, &rect));
        assert!(blast_hits(Vec2::ZERO, 50.001, &rect));
    }

    #[test]
    fn test_blast_any_corner() {
        // Only the bottom-right corner is inside
        let rect = Rect::new(-20.0, -20.0, 18.0, 18.0);
        let center = Vec2::new(0.0, 0.0);
        assert!(blast_hits(center, 3.0, &rect));
        assert!(!blast_hits(center, 2.0, &rect));
    }

    #[test]
    fn test_blast_zero_radius_never_hits() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!blast_hits(Vec2::ZERO, 0.0, &rect));
    }

    #[test]
    fn test_beam_corridor() {
        let settings = Settings {
            beam_width: 10.0,
            beam_ball_width_rate: 2.0,
            ..Default::default()
        };
        let half = settings.beam_half_effective_width();
        let beam = Rect::new(100.0, 0.0, 20.0, 500.0);

        // Corridor is [95, 125]
        assert!(beam_hits(&beam, half, &Rect::new(95.0, 50.0, 20.0, 20.0)));
        assert!(!beam_hits(&beam, half, &Rect::new(60.0, 50.0, 20.0, 20.0)));
        assert!(beam_hits(&beam, half, &Rect::new(75.0, 50.0, 20.0, 20.0)));
        assert!(beam_hits(&beam, half, &Rect::new(125.0, 50.0, 20.0, 20.0)));
        assert!(!beam_hits(&beam, half, &Rect::new(125.5, 50.0, 20.0, 20.0)));
    }

    #[test]
    fn test_beam_ignores_vertical_position() {
        let beam = Rect::new(100.0, 0.0, 20.0, 10.0);
        assert!(beam_hits(&beam, 10.0, &Rect::new(100.0, 700.0, 20.0, 20.0)));
    }

    #[test]
    fn test_ship_contact_first_match() {
        let ship = Rect::new(0.0, 100.0, 60.0, 48.0);
        let units = vec![
            unit_at(500.0, 0.0, 60.0, 58.0),
            unit_at(10.0, 90.0, 60.0, 58.0),
            unit_at(20.0, 90.0, 60.0, 58.0),
        ];
        assert_eq!(ship_contact(&ship, &units), Some(1));
        assert_eq!(ship_contact(&ship, &units[..1]), None);
    }

    #[test]
    fn test_unit_at_bottom() {
        let units = vec![unit_at(0.0, 100.0, 60.0, 58.0), unit_at(0.0, 742.0, 60.0, 58.0)];
        assert_eq!(unit_at_bottom(&units, 800.0), Some(1));
        assert_eq!(unit_at_bottom(&units, 801.0), None);
    }
}
