//! Circle/segment: project the circle onto the segment, run the shared
//! circle/circle kernel against the closest point, then apply end-cap rejection.

use crate::collide::circle_circle::circle2circle_query;
use crate::config::NarrowPhaseConfig;
use crate::contact::ContactResult;
use crate::math::clamp01;
use crate::shapes::{CircleShape, SegmentShape};

pub fn circle_segment(
    circle: &CircleShape,
    seg: &SegmentShape,
    cfg: &NarrowPhaseConfig,
) -> ContactResult {
    let along = seg.tb - seg.ta;
    let t = clamp01(along.dot(circle.tc - seg.ta) / along.mag_sq());
    let closest = seg.ta + along * t;

    let result = circle2circle_query(circle.tc, closest, circle.r, seg.r, cfg);

    let contact = match result {
        ContactResult::Zero => return ContactResult::Zero,
        ContactResult::One(c) => c,
        ContactResult::Two(..) => unreachable!("circle2circle_query never emits two contacts"),
    };

    // End-cap rejection: a contact whose normal points back along a declared
    // continuation tangent is suppressed, so chained segments don't collide at
    // their shared joints.
    if t == 0.0 && contact.normal.dot(seg.a_tangent) < 0.0 {
        return ContactResult::Zero;
    }
    if t == 1.0 && contact.normal.dot(seg.b_tangent) < 0.0 {
        return ContactResult::Zero;
    }

    ContactResult::One(contact)
}
