//! Shape types consumed by the narrow phase.
//!
//! All fields here are the *world-space, already-transformed* fields the base
//! specification calls `t*` — populating them from a local shape definition and a
//! body's pose is the job of a transform step outside this crate. The smart
//! constructors below (`CircleShape::new`, `SegmentShape::new`, `PolygonShape::new`)
//! exist for tests and for simple callers with static geometry, in the same spirit
//! as the teacher engine's `Collider::new_circle`/`Collider::new_rect`: prefer a
//! validating constructor over a raw struct literal.

use crate::error::ShapeError;
use crate::math::{cross, Unit, Vec2};

/// Opaque caller-supplied identifier for a shape, used only to build stable
/// [`crate::contact::ContactId`]s via [`crate::contact::hash_pair`]. This crate
/// never allocates or interprets one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(pub u32);

/// The three shape kinds this crate understands, in their canonical dispatch
/// order (`circle < segment < polygon`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShapeType {
    Circle = 0,
    Segment = 1,
    Polygon = 2,
}

/// Number of shape kinds; the dispatch table is `NUM_SHAPE_TYPES * NUM_SHAPE_TYPES`.
pub const NUM_SHAPE_TYPES: usize = 3;

/// A borrowed reference to one of the three shape kinds, used at the dispatch
/// boundary in place of the source's type-erased pointer + tag.
#[derive(Clone, Copy, Debug)]
pub enum Shape<'a> {
    Circle(&'a CircleShape),
    Segment(&'a SegmentShape),
    Polygon(&'a PolygonShape),
}

impl<'a> Shape<'a> {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Segment(_) => ShapeType::Segment,
            Shape::Polygon(_) => ShapeType::Polygon,
        }
    }
}

/// A polygon edge's outward-facing half-plane: unit normal plus signed offset.
/// A point `p` is inside the half-plane iff `dot(n, p) - d <= 0`.
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    pub n: Unit,
    pub d: f64,
}

impl Plane {
    #[inline]
    pub fn value_at(&self, p: Vec2) -> f64 {
        self.n.dot(p) - self.d
    }
}

/// A circle shape, already positioned in world space.
#[derive(Clone, Copy, Debug)]
pub struct CircleShape {
    pub tc: Vec2,
    pub r: f64,
}

impl CircleShape {
    /// Construct a circle. Infallible: any finite `tc` and `r >= 0.0` are valid.
    ///
    /// Debug builds assert both preconditions; release builds trust the caller.
    pub fn new(tc: Vec2, r: f64) -> CircleShape {
        debug_assert!(tc.x.is_finite() && tc.y.is_finite(), "circle center not finite");
        debug_assert!(r >= 0.0, "circle radius must be non-negative");
        CircleShape { tc, r }
    }
}

/// A capsule-like line segment, already positioned in world space, with optional
/// end-cap tangents that suppress collisions at a declared "continuation" end.
#[derive(Clone, Copy, Debug)]
pub struct SegmentShape {
    pub id: ShapeId,
    pub ta: Vec2,
    pub tb: Vec2,
    pub tn: Unit,
    pub r: f64,
    /// Zero vector disables end-cap culling at `ta`.
    pub a_tangent: Vec2,
    /// Zero vector disables end-cap culling at `tb`.
    pub b_tangent: Vec2,
}

impl SegmentShape {
    /// Construct a segment, computing `tn` from `ta`/`tb`. End-cap tangents default
    /// to the zero vector (disabled); use [`Self::with_tangents`] to opt in.
    ///
    /// Returns [`ShapeError::DegenerateSegment`] if `ta == tb`, since no outward
    /// normal can be computed.
    pub fn new(id: ShapeId, ta: Vec2, tb: Vec2, r: f64) -> Result<SegmentShape, ShapeError> {
        let along = tb - ta;
        if along.mag_sq() == 0.0 {
            return Err(ShapeError::DegenerateSegment);
        }
        debug_assert!(r >= 0.0, "segment radius must be non-negative");
        let tn = Unit::new_normalize(crate::math::perp(along));
        Ok(SegmentShape {
            id,
            ta,
            tb,
            tn,
            r,
            a_tangent: Vec2::new(0.0, 0.0),
            b_tangent: Vec2::new(0.0, 0.0),
        })
    }

    /// Opt into end-cap culling by declaring continuation tangents at both ends.
    pub fn with_tangents(mut self, a_tangent: Vec2, b_tangent: Vec2) -> SegmentShape {
        self.a_tangent = a_tangent;
        self.b_tangent = b_tangent;
        self
    }
}

/// A convex polygon, already positioned in world space, vertices in
/// counter-clockwise order with one outward-facing [`Plane`] per edge.
#[derive(Clone, Debug)]
pub struct PolygonShape {
    pub id: ShapeId,
    pub t_verts: Vec<Vec2>,
    pub t_planes: Vec<Plane>,
}

impl PolygonShape {
    /// Build a polygon from a counter-clockwise, convex vertex loop, computing one
    /// outward [`Plane`] per edge.
    ///
    /// Returns [`ShapeError::TooFewVertices`] for fewer than 3 vertices, or
    /// [`ShapeError::NotConvexOrClockwise`] if the vertices are not in
    /// counter-clockwise, convex order.
    pub fn new(id: ShapeId, verts: &[Vec2]) -> Result<PolygonShape, ShapeError> {
        if verts.len() < 3 {
            return Err(ShapeError::TooFewVertices(verts.len()));
        }
        let n = verts.len();

        let mut signed_area = 0.0;
        for i in 0..n {
            let a = verts[i];
            let b = verts[(i + 1) % n];
            signed_area += cross(a, b);
        }
        if signed_area <= 0.0 {
            return Err(ShapeError::NotConvexOrClockwise);
        }

        // Convexity: every consecutive turn must be a left (counter-clockwise) turn.
        for i in 0..n {
            let prev = verts[(i + n - 1) % n];
            let cur = verts[i];
            let next = verts[(i + 1) % n];
            let turn = cross(cur - prev, next - cur);
            if turn <= 0.0 {
                return Err(ShapeError::NotConvexOrClockwise);
            }
        }

        let t_planes = (0..n)
            .map(|i| {
                let a = verts[i];
                let b = verts[(i + 1) % n];
                let n = Unit::new_normalize(crate::math::right_perp(b - a));
                let d = n.dot(a);
                Plane { n, d }
            })
            .collect();

        Ok(PolygonShape {
            id,
            t_verts: verts.to_vec(),
            t_planes,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.t_verts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.t_verts.is_empty()
    }
}
