//! Circle/polygon: find the plane the circle penetrates least, then decide
//! whether the circle's projection falls on that edge's interior or spills past
//! one of its endpoints (in which case fall back to circle/circle against that
//! vertex).

use crate::collide::circle_circle::circle2circle_query;
use crate::config::NarrowPhaseConfig;
use crate::contact::{Contact, ContactResult};
use crate::math::{cross, Unit};
use crate::shapes::{CircleShape, PolygonShape};

pub fn circle_polygon(circle: &CircleShape, poly: &PolygonShape, cfg: &NarrowPhaseConfig) -> ContactResult {
    let n = poly.len();

    let mut min_i = 0;
    let mut min_dist = f64::NEG_INFINITY;
    for (i, plane) in poly.t_planes.iter().enumerate() {
        let dist = plane.value_at(circle.tc) - circle.r;
        if dist > 0.0 {
            return ContactResult::Zero;
        }
        if dist > min_dist {
            min_dist = dist;
            min_i = i;
        }
    }

    // plane[min_i] is the edge from t_verts[min_i] to t_verts[min_i + 1] (the
    // convention fixed by `PolygonShape::new`); walking the edge from `a` to `b`
    // increases `cross(plane_n, p)` monotonically, so that coordinate orders the
    // circle's projection against the edge's endpoints.
    let a = poly.t_verts[min_i];
    let b = poly.t_verts[(min_i + 1) % n];
    let plane_n = *poly.t_planes[min_i].n;

    let ta = cross(plane_n, a);
    let tb = cross(plane_n, b);
    let tc_coord = cross(plane_n, circle.tc);

    if tc_coord < ta {
        return circle2circle_query(circle.tc, a, circle.r, 0.0, cfg);
    }
    if tc_coord > tb {
        return circle2circle_query(circle.tc, b, circle.r, 0.0, cfg);
    }

    let point = circle.tc - plane_n * (circle.r + min_dist / 2.0);
    ContactResult::One(Contact::new(point, Unit::new_unchecked(-plane_n), min_dist, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use crate::shapes::ShapeId;
    use approx::assert_relative_eq;

    fn unit_square() -> PolygonShape {
        PolygonShape::new(
            ShapeId(0),
            &[
                Vec2::new(-1.0, -1.0),
                Vec2::new(1.0, -1.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(-1.0, 1.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn circle_above_square_scenario_s4() {
        let circle = CircleShape::new(Vec2::new(0.0, 0.5), 1.0);
        let square = unit_square();
        let cfg = NarrowPhaseConfig::default();
        match circle_polygon(&circle, &square, &cfg) {
            ContactResult::One(c) => {
                assert_relative_eq!(c.normal.x, 0.0, epsilon = 1e-9);
                assert_relative_eq!(c.normal.y, -1.0, epsilon = 1e-9);
                assert!(c.distance < 0.0, "expected overlap, got {}", c.distance);
                assert_relative_eq!(c.point.x, 0.0, epsilon = 1e-9);
            }
            other => panic!("expected one contact, got {other:?}"),
        }
    }

    #[test]
    fn circle_resting_lightly_on_top_face() {
        // Small circle, barely poking through the top face near its center:
        // should land squarely in the face-interior branch with a shallow depth.
        let circle = CircleShape::new(Vec2::new(0.0, 1.05), 0.1);
        let square = unit_square();
        let cfg = NarrowPhaseConfig::default();
        match circle_polygon(&circle, &square, &cfg) {
            ContactResult::One(c) => {
                assert_relative_eq!(c.normal.x, 0.0, epsilon = 1e-9);
                assert_relative_eq!(c.normal.y, -1.0, epsilon = 1e-9);
                assert_relative_eq!(c.distance, -0.05, epsilon = 1e-9);
            }
            other => panic!("expected one contact, got {other:?}"),
        }
    }

    #[test]
    fn circle_beyond_corner_falls_back_to_vertex() {
        // Circle centered past the top-right corner collides with that vertex,
        // not a face.
        let circle = CircleShape::new(Vec2::new(1.5, 1.5), 1.0);
        let square = unit_square();
        let cfg = NarrowPhaseConfig::default();
        match circle_polygon(&circle, &square, &cfg) {
            ContactResult::One(c) => {
                // Normal points from the circle center toward the colliding
                // vertex (1, 1), i.e. down and to the left.
                let expected_normal = (Vec2::new(1.0, 1.0) - Vec2::new(1.5, 1.5)).normalized();
                assert_relative_eq!(c.normal.x, expected_normal.x, epsilon = 1e-9);
                assert_relative_eq!(c.normal.y, expected_normal.y, epsilon = 1e-9);
            }
            other => panic!("expected one contact, got {other:?}"),
        }
    }

    #[test]
    fn circle_far_from_square_misses() {
        let circle = CircleShape::new(Vec2::new(0.0, 5.0), 1.0);
        let square = unit_square();
        let cfg = NarrowPhaseConfig::default();
        assert!(circle_polygon(&circle, &square, &cfg).is_empty());
    }
}
