//! Polygon/polygon: two passes of the separating-axis test pick a collision
//! normal, then a support-edge selection and Sutherland-Hodgman-style clip
//! produce up to two contacts along it.

use crate::contact::{hash_pair, Contact, ContactId, ContactResult};
use crate::geom::{poly_value_on_axis, support_index};
use crate::math::{clamp01, cross, lerp, Unit, Vec2};
use crate::shapes::PolygonShape;

/// Walk every plane of `other`, evaluating each against `poly`; returns
/// `(index, value)` of the largest (least-negative) value, or `None` if any
/// plane reports separation.
fn find_msa(poly: &PolygonShape, other_planes_of: &PolygonShape) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, plane) in other_planes_of.t_planes.iter().enumerate() {
        let value = poly_value_on_axis(poly, *plane.n, plane.d);
        if value > 0.0 {
            return None;
        }
        if best.map_or(true, |(_, b)| value > b) {
            best = Some((i, value));
        }
    }
    best
}

struct EdgePoint {
    v: Vec2,
    hash: u32,
}

struct Edge {
    a: EdgePoint,
    b: EdgePoint,
    n: Unit,
}

fn edge_new(va: Vec2, vb: Vec2, ha: u32, hb: u32) -> Edge {
    Edge {
        a: EdgePoint { v: va, hash: ha },
        b: EdgePoint { v: vb, hash: hb },
        n: Unit::new_normalize(crate::math::right_perp(vb - va)),
    }
}

/// Pick the polygon edge adjacent to the support vertex in direction `n` that
/// is most perpendicular to `n`.
fn support_edge(poly: &PolygonShape, n: Vec2) -> Edge {
    let num = poly.len();
    let i1 = support_index(&poly.t_verts, n);
    let i0 = (i1 + num - 1) % num;
    let i2 = (i1 + 1) % num;

    let v0 = poly.t_verts[i0];
    let v1 = poly.t_verts[i1];
    let v2 = poly.t_verts[i2];

    if n.dot(v1 - v0) < n.dot(v1 - v2) {
        edge_new(v0, v1, hash_pair(poly.id.0, i0 as u32) as u32, hash_pair(poly.id.0, i1 as u32) as u32)
    } else {
        edge_new(v1, v2, hash_pair(poly.id.0, i1 as u32) as u32, hash_pair(poly.id.0, i2 as u32) as u32)
    }
}

/// Clip the incident edge against the reference edge's supporting line,
/// producing up to two contacts. `flipped` is `1.0` when `ref_edge` came from
/// the first polygon passed to [`contact_points`], `-1.0` otherwise, so the
/// emitted normal always ends up oriented from `poly1` toward `poly2`.
fn clip_contacts(ref_edge: &Edge, inc_edge: &Edge, flipped: f64) -> ContactResult {
    let ref_n = *ref_edge.n;

    let cian = cross(inc_edge.a.v, ref_n);
    let cibn = cross(inc_edge.b.v, ref_n);
    let cran = cross(ref_edge.a.v, ref_n);
    let crbn = cross(ref_edge.b.v, ref_n);

    let dran = ref_edge.a.v.dot(ref_n);
    let dian = inc_edge.a.v.dot(ref_n) - dran;
    let dibn = inc_edge.b.v.dot(ref_n) - dran;

    let mut result = ContactResult::Zero;

    let t1 = clamp01((cian - cran) / (cian - cibn));
    let d1 = lerp(dian, dibn, t1);
    if d1 <= 0.0 {
        let point = if t1 < 1.0 { ref_edge.a.v } else { inc_edge.b.v };
        let id = hash_pair(ref_edge.a.hash, inc_edge.b.hash) as ContactId;
        result = result.push(Contact::new(point, Unit::new_normalize(ref_n * flipped), d1, id));
    }

    let t2 = clamp01((cibn - crbn) / (cibn - cian));
    let d2 = lerp(dibn, dian, t2);
    if d2 <= 0.0 {
        let point = if t2 < 1.0 { ref_edge.b.v } else { inc_edge.a.v };
        let id = hash_pair(ref_edge.b.hash, inc_edge.a.hash) as ContactId;
        result = result.push(Contact::new(point, Unit::new_normalize(ref_n * flipped), d2, id));
    }

    if result.is_empty() {
        // Numerically possible at grazing angles; SAT reported overlap but
        // clipping found no actual penetrating vertex pair.
        tracing::debug!("polygon/polygon clip produced no contacts despite SAT overlap");
    }

    result
}

fn contact_points(poly1: &PolygonShape, poly2: &PolygonShape, n: Vec2) -> ContactResult {
    let f1 = support_edge(poly1, n);
    let f2 = support_edge(poly2, -n);

    if f1.n.dot(n) > -f2.n.dot(n) {
        clip_contacts(&f1, &f2, 1.0)
    } else {
        clip_contacts(&f2, &f1, -1.0)
    }
}

pub fn polygon_polygon(poly1: &PolygonShape, poly2: &PolygonShape) -> ContactResult {
    let (mini1, min1) = match find_msa(poly2, poly1) {
        Some(v) => v,
        None => return ContactResult::Zero,
    };
    let (mini2, min2) = match find_msa(poly1, poly2) {
        Some(v) => v,
        None => return ContactResult::Zero,
    };

    let n = if min1 > min2 {
        *poly1.t_planes[mini1].n
    } else {
        -*poly2.t_planes[mini2].n
    };

    contact_points(poly1, poly2, n)
}
