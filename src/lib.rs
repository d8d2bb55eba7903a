//! Narrow-phase collision detection for a 2D rigid-body physics engine.
//!
//! Given two shapes already transformed into world space by an external
//! broad-phase/transform step, this crate decides whether they overlap and, if
//! so, produces up to [`contact::MAX_CONTACTS_PER_PAIR`] contact points
//! describing the interpenetration. It does not do body dynamics, constraint
//! solving, broad-phase culling, or spatial indexing — those live in the
//! surrounding engine.
//!
//! The entry points are [`collide::collide`] (the zero-allocation ABI surface,
//! writing into a caller-supplied buffer) and [`collide::collide_any`] (an
//! ergonomic wrapper that normalizes shape order itself and returns an owned
//! result).

pub mod collide;
pub mod config;
pub mod contact;
pub mod error;
pub mod geom;
pub mod math;
pub mod shapes;

pub use collide::{collide, collide_any, NUM_SHAPE_TYPES};
pub use config::NarrowPhaseConfig;
pub use contact::{Contact, ContactId, ContactResult, MAX_CONTACTS_PER_PAIR};
pub use error::ShapeError;
pub use shapes::{CircleShape, PolygonShape, SegmentShape, Shape, ShapeId, ShapeType};
