//! Segment/polygon: the densest of the pairwise tests. Rejects early via the
//! segment's own two face directions, finds the polygon edge the segment
//! penetrates least, emits contacts at the segment's offset endpoints that land
//! inside the polygon, falls back to polygon vertices caught behind the segment
//! when the segment's own faces are the best axis, and finally falls back to
//! four endpoint-vs-endpoint circle queries to recover from grazing-angle
//! degeneracies where the analytic tests produce nothing.

use crate::collide::circle_circle::circle2circle_query;
use crate::config::NarrowPhaseConfig;
use crate::contact::{hash_pair, Contact, ContactResult};
use crate::geom::{point_in_poly, poly_value_on_axis, seg_value_on_axis};
use crate::math::{cross, Unit};
#[cfg(test)]
use crate::math::Vec2;
use crate::shapes::{PolygonShape, SegmentShape};

fn points_behind_segment(
    seg: &SegmentShape,
    poly: &PolygonShape,
    distance: f64,
    coef: f64,
) -> ContactResult {
    let dta = cross(*seg.tn, seg.ta);
    let dtb = cross(*seg.tn, seg.tb);
    let n = *seg.tn * coef;
    let threshold = seg.tn.dot(seg.ta) * coef + seg.r;

    let mut result = ContactResult::Zero;
    for (i, &v) in poly.t_verts.iter().enumerate() {
        if v.dot(n) < threshold {
            let dt = cross(*seg.tn, v);
            if dta >= dt && dt >= dtb {
                result = result.push(Contact::new(
                    v,
                    Unit::new_normalize(n),
                    distance,
                    hash_pair(poly.id.0, i as u32),
                ));
            }
        }
    }
    result
}

pub fn segment_polygon(seg: &SegmentShape, poly: &PolygonShape, cfg: &NarrowPhaseConfig) -> ContactResult {
    let seg_d = seg.tn.dot(seg.ta);
    let min_norm = poly_value_on_axis(poly, *seg.tn, seg_d) - seg.r;
    let min_neg = poly_value_on_axis(poly, -*seg.tn, -seg_d) - seg.r;
    if min_neg > 0.0 || min_norm > 0.0 {
        return ContactResult::Zero;
    }

    let n = poly.len();
    let mut mini = 0;
    let mut poly_min = f64::NEG_INFINITY;
    for (i, plane) in poly.t_planes.iter().enumerate() {
        let dist = seg_value_on_axis(seg.ta, seg.tb, seg.r, *plane.n, plane.d);
        if dist > 0.0 {
            return ContactResult::Zero;
        }
        if dist > poly_min {
            poly_min = dist;
            mini = i;
        }
    }

    let poly_n = -*poly.t_planes[mini].n;
    let va = seg.ta + poly_n * seg.r;
    let vb = seg.tb + poly_n * seg.r;

    let mut result = ContactResult::Zero;
    if point_in_poly(poly, va) {
        result = result.push(Contact::new(va, Unit::new_unchecked(poly_n), poly_min, hash_pair(seg.id.0, 0)));
    }
    if point_in_poly(poly, vb) {
        result = result.push(Contact::new(vb, Unit::new_unchecked(poly_n), poly_min, hash_pair(seg.id.0, 1)));
    }

    if min_norm >= poly_min || min_neg >= poly_min {
        let behind = if min_norm > min_neg {
            points_behind_segment(seg, poly, min_norm, 1.0)
        } else {
            points_behind_segment(seg, poly, min_neg, -1.0)
        };
        for c in behind.iter() {
            result = result.push(*c);
        }
    }

    if !result.is_empty() {
        return result;
    }

    // Recover from floating-point degenerate cases where the analytic tests
    // above decline even though an endpoint-endpoint touch exists.
    let poly_a = poly.t_verts[mini];
    let poly_b = poly.t_verts[(mini + 1) % n];
    for (p1, p2) in [(seg.ta, poly_a), (seg.tb, poly_a), (seg.ta, poly_b), (seg.tb, poly_b)] {
        let q = circle2circle_query(p1, p2, seg.r, 0.0, cfg);
        if !q.is_empty() {
            return q;
        }
    }

    ContactResult::Zero
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn segment_resting_on_top_face() {
        let seg = SegmentShape::new(ShapeId(1), Vec2::new(-2.0, 1.05), Vec2::new(2.0, 1.05), 0.1).unwrap();
        let square = unit_square();
        let cfg = NarrowPhaseConfig::default();
        let result = segment_polygon(&seg, &square, &cfg);
        assert!(!result.is_empty());
        for c in result.iter() {
            assert_relative_eq!(c.normal.x, 0.0, epsilon = 1e-9);
            assert_relative_eq!(c.normal.y, -1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn segment_far_away_misses() {
        let seg = SegmentShape::new(ShapeId(1), Vec2::new(-2.0, 10.0), Vec2::new(2.0, 10.0), 0.1).unwrap();
        let square = unit_square();
        let cfg = NarrowPhaseConfig::default();
        assert!(segment_polygon(&seg, &square, &cfg).is_empty());
    }

    #[test]
    fn short_segment_spanning_top_face_hits_both_endpoints() {
        let seg = SegmentShape::new(ShapeId(1), Vec2::new(-0.5, 1.05), Vec2::new(0.5, 1.05), 0.1).unwrap();
        let square = unit_square();
        let cfg = NarrowPhaseConfig::default();
        let result = segment_polygon(&seg, &square, &cfg);
        assert_eq!(result.count(), 2);
    }
}
