//! Polygon collision detection
//!
//! # Architecture
//!
//! - **Model Space Storage**: owners keep a local-space sample collider
//! - **Per-Update Transformation**: a world-space copy is re-derived from the
//!   sample each update and all queries run between world-space colliders
//! - **Bounds Pruning**: cached axis-aligned bounds reject far pairs before
//!   any edge work
//!
//! # Module Organization
//!
//! - [`primitives`] - Orientation and segment intersection predicates
//! - [`bounds`] - Axis-aligned bounding boxes and overlap tests
//! - [`collider`] - The polygon collider and its queries
//! - [`tracked`] - Sample/transformed pairing used by moving objects

pub mod primitives;
pub mod bounds;
pub mod collider;
pub mod tracked;

// Re-export commonly used types
pub use primitives::{Orientation, line_intersection, line_intersection_with_tolerance};
pub use bounds::AxisAlignedBox;
pub use collider::ConvexPolygonCollider;
pub use tracked::TrackedCollider;
