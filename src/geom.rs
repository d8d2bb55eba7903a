//! Shape-projection primitives shared by the polygon-involving pairwise tests:
//! support-vertex search, axis projection, and point-in-polygon queries.

use crate::math::Vec2;
use crate::shapes::PolygonShape;

/// Index of the vertex maximizing `dot(v, dir)` — the polygon's "support point"
/// in direction `dir`.
pub fn support_index(verts: &[Vec2], dir: Vec2) -> usize {
    debug_assert!(!verts.is_empty());
    let mut best_i = 0;
    let mut best_d = verts[0].dot(dir);
    for (i, &v) in verts.iter().enumerate().skip(1) {
        let d = v.dot(dir);
        if d > best_d {
            best_d = d;
            best_i = i;
        }
    }
    best_i
}

/// The signed distance of the polygon's most-penetrating vertex into the
/// half-plane `(n, d)`: `min_i (dot(n, v_i) - d)`.
///
/// The most negative value is the deepest penetration; a positive result means
/// every vertex lies outside the half-plane (the polygon is entirely separated
/// along this axis).
pub fn poly_value_on_axis(poly: &PolygonShape, n: Vec2, d: f64) -> f64 {
    poly.t_verts
        .iter()
        .map(|&v| n.dot(v) - d)
        .fold(f64::INFINITY, f64::min)
}

/// Analogous to [`poly_value_on_axis`] for a segment's two endpoints (inset by
/// the segment's own radius before taking the minimum).
pub fn seg_value_on_axis(ta: Vec2, tb: Vec2, r: f64, n: Vec2, d: f64) -> f64 {
    (n.dot(ta) - r).min(n.dot(tb) - r) - d
}

/// True iff `p` lies inside (or on) every one of the polygon's half-planes.
pub fn point_in_poly(poly: &PolygonShape, p: Vec2) -> bool {
    poly.t_planes.iter().all(|plane| plane.value_at(p) <= 0.0)
}
