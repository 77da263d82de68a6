//! # Polygon Collider
//!
//! 2D polygon collision primitive for games: a shape stored as an ordered
//! vertex loop with cached axis-aligned bounds, moved by affine transforms
//! and queried pairwise.
//!
//! ## Features
//!
//! - **Shape Factories**: circles, rectangles, and arbitrary vertex loops
//! - **Affine Placement**: translation, rotation, non-uniform scale and shear
//! - **Queries**: edge intersection, even-odd point containment, and a
//!   combined "collides" test with bounds pruning
//! - **Owner Support**: sample/transformed pairing for moving objects
//!
//! ## Quick Start
//!
//! ```rust
//! use polygon_collider::prelude::*;
//!
//! let mut circle = ConvexPolygonCollider::circle(5.0);
//! let rect = ConvexPolygonCollider::rectangle(Vec2::new(10.0, 10.0));
//!
//! let step = affine::translation(9.0, 0.0);
//! circle.apply_transform(&step);
//! assert!(circle.collides(&rect));
//!
//! circle.apply_transform(&step);
//! assert!(!circle.collides(&rect));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod core;
pub mod config;
pub mod foundation;
pub mod physics;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        core::config::{CollisionConfig, Config, ConfigError},
        foundation::math::{affine, Mat3, Point2, Transform2D, Vec2},
        physics::collision::{
            line_intersection,
            AxisAlignedBox,
            ConvexPolygonCollider,
            TrackedCollider,
        },
    };
}
