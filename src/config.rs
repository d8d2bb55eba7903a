//! Tunable numeric tolerances for the narrow phase.
//!
//! Mirrors the teacher engine's convention (see its `Material` type) of bundling
//! small tunable physical constants into a plain `Copy` struct with a sane
//! `Default`, rather than hardcoding them as magic numbers or reading them from
//! global state.

/// Tolerances that govern otherwise-hardcoded numeric thresholds in the pairwise
/// collision tests.
///
/// Threaded explicitly through every pairwise function and through
/// [`collide`](crate::collide::collide)/[`collide_any`](crate::collide::collide_any);
/// there is no global or thread-local fallback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NarrowPhaseConfig {
    /// Squared-distance threshold below which two points are considered the same
    /// point (used for the coincident-circle-centers degenerate case).
    pub coincident_epsilon: f64,
    /// Small allowed penetration before a contact is reported as touching.
    pub collision_slop: f64,
}

impl Default for NarrowPhaseConfig {
    fn default() -> Self {
        // Reproduces the upstream source's inline constants exactly so the worked
        // examples continue to hold under the default configuration.
        NarrowPhaseConfig {
            coincident_epsilon: 1e-8,
            collision_slop: 0.1,
        }
    }
}
