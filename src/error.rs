//! Errors from the one part of this crate that validates its inputs: the
//! convenience shape constructors in [`crate::shapes`].
//!
//! The hot `collide` path never produces or consumes this type — precondition
//! violations there are asserted in debug builds and unspecified in release (see
//! the crate's top-level docs), the same split the teacher engine draws between
//! `tracing`-logged soft anomalies and `thiserror`-typed construction failures.

use thiserror::Error;

/// Errors produced by the fallible shape constructors [`crate::shapes::SegmentShape::new`]
/// and [`crate::shapes::PolygonShape::new`].
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("segment endpoints coincide; no well-defined normal")]
    DegenerateSegment,

    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    #[error("polygon vertices are not counter-clockwise and convex")]
    NotConvexOrClockwise,
}
