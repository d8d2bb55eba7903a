//! Dispatch: given two shapes in canonical type order, pick the right pairwise
//! collision function.
//!
//! The original dispatch table indexed `type(a) + type(b) * NUM_SHAPE_TYPES`
//! into an array of type-erased function pointers. A tagged union with
//! pattern-matching dispatch gives the same behavior with the compiler checking
//! exhaustiveness, so that's what this module does instead; `NUM_SHAPE_TYPES`
//! survives only as the ABI-relevant constant the base design calls out.

pub mod circle_circle;
pub mod circle_polygon;
pub mod circle_segment;
pub mod polygon_polygon;
pub mod segment_polygon;

use crate::config::NarrowPhaseConfig;
use crate::contact::{Contact, ContactResult, MAX_CONTACTS_PER_PAIR};
use crate::shapes::Shape;

pub use crate::shapes::NUM_SHAPE_TYPES;

/// Zero-allocation ABI entry point.
///
/// Preconditions: `type(a) <= type(b)` in canonical order (`circle < segment <
/// polygon`); `out` has capacity >= [`MAX_CONTACTS_PER_PAIR`]. Debug builds
/// assert the ordering; release builds trust the caller and fall through to the
/// empty-slot case, which returns 0.
///
/// Returns the number of contacts written to the prefix of `out`.
pub fn collide(a: Shape, b: Shape, cfg: &NarrowPhaseConfig, out: &mut [Contact]) -> usize {
    debug_assert!(
        a.shape_type() <= b.shape_type(),
        "collide() requires shapes in canonical type order"
    );
    debug_assert!(out.len() >= MAX_CONTACTS_PER_PAIR, "output buffer too small");

    dispatch(a, b, cfg).write_to(out)
}

fn dispatch(a: Shape, b: Shape, cfg: &NarrowPhaseConfig) -> ContactResult {
    use Shape::*;
    match (a, b) {
        (Circle(c1), Circle(c2)) => circle_circle::circle_circle(c1, c2, cfg),
        (Circle(c), Segment(s)) => circle_segment::circle_segment(c, s, cfg),
        (Circle(c), Polygon(p)) => circle_polygon::circle_polygon(c, p, cfg),
        (Segment(s), Polygon(p)) => segment_polygon::segment_polygon(s, p, cfg),
        (Polygon(p1), Polygon(p2)) => polygon_polygon::polygon_polygon(p1, p2),
        _ => {
            tracing::trace!(
                a = ?a.shape_type(),
                b = ?b.shape_type(),
                "no collision function registered for this type pair"
            );
            ContactResult::Zero
        }
    }
}

/// Ergonomic entry point: accepts two shapes in arbitrary order, normalizes to
/// canonical order itself, and returns an owned result instead of writing
/// through a caller-supplied buffer.
pub fn collide_any(a: Shape, b: Shape, cfg: &NarrowPhaseConfig) -> ContactResult {
    if a.shape_type() <= b.shape_type() {
        dispatch(a, b, cfg)
    } else {
        dispatch(b, a, cfg).flipped()
    }
}
