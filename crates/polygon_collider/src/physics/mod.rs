//! Physics module for 2D polygon collision detection
//!
//! Provides polygon colliders with cached bounds and the pairwise queries
//! built on them. Collision response is not part of this module.

pub mod collision;


pub use collision::{
    AxisAlignedBox,
    ConvexPolygonCollider,
    Orientation,
    TrackedCollider,
};
