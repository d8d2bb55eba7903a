//! The circle/circle kernel, shared as the substrate for circle/segment and
//! circle/polygon (which both resolve to "circle vs. a zero-radius point circle").

use crate::config::NarrowPhaseConfig;
use crate::contact::{Contact, ContactResult};
use crate::math::{Unit, Vec2};
use crate::shapes::CircleShape;

/// Query two circles (or a circle and a zero-radius point, treated as a circle)
/// for a single contact.
///
/// Shared by circle/circle, circle/segment (closest point on the segment modeled
/// as a zero-radius circle) and circle/polygon (support vertex modeled the same
/// way), so that every coincident-point degeneracy is handled in one place.
pub fn circle2circle_query(
    p1: Vec2,
    p2: Vec2,
    r1: f64,
    r2: f64,
    cfg: &NarrowPhaseConfig,
) -> ContactResult {
    let delta = p2 - p1;
    let distsq = delta.mag_sq();
    let mindist = r1 + r2;
    if distsq >= mindist * mindist {
        return ContactResult::Zero;
    }

    if distsq <= cfg.coincident_epsilon {
        // Coincident centers: no well-defined direction, fall back to the
        // documented tie-breaker normal.
        let distance = -mindist;
        let point = p1 + delta * 0.5;
        return ContactResult::One(Contact::new(point, Unit::unit_x(), distance, 0));
    }

    let dist = distsq.sqrt();
    let normal = Unit::new_normalize(delta);
    let distance = dist - mindist;
    let point = p1 + delta * (0.5 + (r1 - 0.5 * mindist) / dist);
    ContactResult::One(Contact::new(point, normal, distance, 0))
}

/// Full circle/circle pairwise test.
pub fn circle_circle(a: &CircleShape, b: &CircleShape, cfg: &NarrowPhaseConfig) -> ContactResult {
    circle2circle_query(a.tc, b.tc, a.r, b.r, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn overlapping_circles_scenario_s1() {
        let c1 = CircleShape::new(Vec2::new(0.0, 0.0), 1.0);
        let c2 = CircleShape::new(Vec2::new(1.5, 0.0), 1.0);
        let cfg = NarrowPhaseConfig::default();
        match circle_circle(&c1, &c2, &cfg) {
            ContactResult::One(c) => {
                assert_relative_eq!(c.normal.x, 1.0, epsilon = 1e-9);
                assert_relative_eq!(c.normal.y, 0.0, epsilon = 1e-9);
                assert_relative_eq!(c.distance, -0.5, epsilon = 1e-9);
                assert_relative_eq!(c.point.x, 0.75, epsilon = 1e-9);
                assert_relative_eq!(c.point.y, 0.0, epsilon = 1e-9);
            }
            other => panic!("expected one contact, got {other:?}"),
        }
    }

    #[test]
    fn separated_circles_scenario_s2() {
        let c1 = CircleShape::new(Vec2::new(0.0, 0.0), 1.0);
        let c2 = CircleShape::new(Vec2::new(3.0, 0.0), 1.0);
        let cfg = NarrowPhaseConfig::default();
        assert!(matches!(circle_circle(&c1, &c2, &cfg), ContactResult::Zero));
    }

    #[test]
    fn coincident_circles_scenario_s3() {
        let c1 = CircleShape::new(Vec2::new(0.0, 0.0), 1.0);
        let c2 = CircleShape::new(Vec2::new(0.0, 0.0), 1.0);
        let cfg = NarrowPhaseConfig::default();
        match circle_circle(&c1, &c2, &cfg) {
            ContactResult::One(c) => {
                assert_relative_eq!(c.normal.x, 1.0);
                assert_relative_eq!(c.normal.y, 0.0);
                assert_relative_eq!(c.distance, -2.0, epsilon = 1e-9);
            }
            other => panic!("expected one contact, got {other:?}"),
        }
    }
}
