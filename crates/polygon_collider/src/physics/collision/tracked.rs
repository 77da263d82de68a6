//! Sample/transformed collider pairing for moving objects
//!
//! An object keeps its collision shape in local space (the sample) and a
//! world-space copy (the transformed collider) that is rebuilt from the
//! sample on every update. The sample is never mutated by updates, so each
//! update places the shape at an absolute pose instead of accumulating
//! transforms.

use crate::foundation::math::{Mat3, Point2};
use super::bounds::AxisAlignedBox;
use super::collider::ConvexPolygonCollider;

/// Local-space collider plus its latest world-space placement
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackedCollider {
    sample: ConvexPolygonCollider,
    transformed: ConvexPolygonCollider,
}

impl TrackedCollider {
    /// Tracks `sample`; the transformed collider starts as an identical copy
    pub fn new(sample: ConvexPolygonCollider) -> Self {
        Self {
            transformed: sample.clone(),
            sample,
        }
    }

    /// Builds the sample from an object's local vertex positions
    pub fn from_vertices(vertices: &[Point2]) -> Self {
        Self::new(ConvexPolygonCollider::from_points(vertices.iter().copied()))
    }

    /// Replaces the sample and resets the transformed collider to it
    pub fn set_sample(&mut self, sample: ConvexPolygonCollider) {
        self.transformed = sample.clone();
        self.sample = sample;
    }

    /// Local-space collider
    pub fn sample(&self) -> &ConvexPolygonCollider {
        &self.sample
    }

    /// World-space collider from the latest update
    pub fn transformed(&self) -> &ConvexPolygonCollider {
        &self.transformed
    }

    /// Re-derives the world-space collider as `world_transform * sample`
    pub fn update(&mut self, world_transform: &Mat3) {
        self.transformed.clone_from(&self.sample);
        self.transformed.apply_transform(world_transform);
    }

    /// World-space bounds
    pub fn global_bounds(&self) -> AxisAlignedBox {
        self.transformed.global_bounds()
    }

    /// Point containment against the world-space collider
    pub fn contains(&self, point: Point2) -> bool {
        self.transformed.contains(point)
    }

    /// Edge intersection between the two world-space colliders
    pub fn intersects(&self, other: &Self) -> bool {
        self.transformed.intersects(&other.transformed)
    }

    /// Composite collision between the two world-space colliders
    pub fn collides(&self, other: &Self) -> bool {
        self.transformed.collides(&other.transformed)
    }
}

impl From<ConvexPolygonCollider> for TrackedCollider {
    fn from(sample: ConvexPolygonCollider) -> Self {
        Self::new(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{affine, Transform2D, Vec2};

    #[test]
    fn test_update_does_not_accumulate() {
        let mut tracked = TrackedCollider::new(ConvexPolygonCollider::rectangle(Vec2::new(2.0, 2.0)));
        let t = affine::translation(9.0, 0.0);

        tracked.update(&t);
        tracked.update(&t);

        assert_eq!(tracked.global_bounds(), AxisAlignedBox::new(9.0, 0.0, 2.0, 2.0));
        assert_eq!(tracked.sample().global_bounds(), AxisAlignedBox::new(0.0, 0.0, 2.0, 2.0));
    }

    #[test]
    fn test_set_sample_resets_transformed() {
        let mut tracked = TrackedCollider::default();
        tracked.update(&affine::translation(3.0, 3.0));
        assert!(tracked.transformed().is_empty());

        let rect = ConvexPolygonCollider::rectangle(Vec2::new(4.0, 4.0));
        tracked.set_sample(rect.clone());
        assert_eq!(tracked.transformed(), &rect);
    }

    #[test]
    fn test_from_vertices_keeps_order() {
        let vertices = [
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(2.0, 3.0),
        ];
        let tracked = TrackedCollider::from_vertices(&vertices);
        assert_eq!(tracked.sample().vertices(), &vertices);
    }

    #[test]
    fn test_queries_use_world_space() {
        let mut a = TrackedCollider::from(ConvexPolygonCollider::rectangle(Vec2::new(10.0, 10.0)));
        let mut b = TrackedCollider::from(ConvexPolygonCollider::rectangle(Vec2::new(10.0, 10.0)));

        a.update(&Transform2D::identity().to_matrix());
        b.update(&Transform2D::from_translation(Vec2::new(50.0, 0.0)).to_matrix());
        assert!(!a.collides(&b));
        assert!(b.contains(Point2::new(55.0, 5.0)));
        assert!(!b.contains(Point2::new(5.0, 5.0)));

        b.update(&Transform2D::from_translation(Vec2::new(5.0, 0.0)).to_matrix());
        assert!(a.intersects(&b));
        assert!(a.collides(&b));
    }
}
