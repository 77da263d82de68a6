//! Axis-aligned bounding boxes for collider pruning
//!
//! Boxes are stored as an origin corner plus extents (`left`, `top`,
//! `width`, `height`), where `top` is the minimum y. Width and height are
//! never negative for boxes built from points.

use serde::{Serialize, Deserialize};

use crate::foundation::math::Point2;

/// Axis-aligned bounding box in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisAlignedBox {
    /// Minimum x
    pub left: f32,
    /// Minimum y
    pub top: f32,
    /// Extent along x
    pub width: f32,
    /// Extent along y
    pub height: f32,
}

impl AxisAlignedBox {
    /// Creates a box from its origin corner and extents
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Builds the tight box enclosing `points`
    ///
    /// An empty slice yields the zero-size box anchored at the origin.
    pub fn from_points(points: &[Point2]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };

        let mut min = *first;
        let mut max = *first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }

        Self {
            left: min.x,
            top: min.y,
            width: max.x - min.x,
            height: max.y - min.y,
        }
    }

    /// Maximum x
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Maximum y
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Minimum corner
    pub fn min(&self) -> Point2 {
        Point2::new(self.left, self.top)
    }

    /// Maximum corner
    pub fn max(&self) -> Point2 {
        Point2::new(self.right(), self.bottom())
    }

    /// Returns `true` if the box has zero area
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Returns `true` if the two boxes share an area of positive size
    ///
    /// Boxes that only touch along an edge or at a corner do not overlap, and
    /// neither does a box with zero width or height.
    pub fn overlaps(&self, other: &Self) -> bool {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        left < right && top < bottom
    }

    /// Overlap test on boxes whose origin corners are first folded into the
    /// positive quadrant with `abs()`
    ///
    /// Inclusive on edges, unlike [`Self::overlaps`]. Extents are kept as-is,
    /// so for boxes with negative coordinates a box straddling an axis is
    /// mirrored rather than clipped. Only the edge-intersection query uses it.
    pub fn overlaps_abs_normalized(&self, other: &Self) -> bool {
        let lhs = self.abs_origin();
        let rhs = other.abs_origin();

        if lhs.left > rhs.right() {
            return false;
        }
        if lhs.right() < rhs.left {
            return false;
        }
        if lhs.top > rhs.bottom() {
            return false;
        }
        if lhs.bottom() < rhs.top {
            return false;
        }

        true
    }

    fn abs_origin(&self) -> Self {
        Self {
            left: self.left.abs(),
            top: self.top.abs(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_is_tight() {
        let points = [
            Point2::new(3.0, 4.0),
            Point2::new(-2.0, 7.0),
            Point2::new(5.0, -1.0),
        ];
        let bounds = AxisAlignedBox::from_points(&points);

        assert_eq!(bounds, AxisAlignedBox::new(-2.0, -1.0, 7.0, 8.0));
        assert_eq!(bounds.max(), Point2::new(5.0, 7.0));
    }

    #[test]
    fn test_from_points_away_from_origin() {
        // Every vertex is far from (0, 0); the box must not stretch back to it
        let points = [Point2::new(20.0, 30.0), Point2::new(25.0, 35.0)];
        let bounds = AxisAlignedBox::from_points(&points);

        assert_eq!(bounds, AxisAlignedBox::new(20.0, 30.0, 5.0, 5.0));
    }

    #[test]
    fn test_empty_points_give_zero_box() {
        let bounds = AxisAlignedBox::from_points(&[]);
        assert_eq!(bounds, AxisAlignedBox::new(0.0, 0.0, 0.0, 0.0));
        assert!(bounds.is_degenerate());
    }

    #[test]
    fn test_overlap_excludes_touching_edges() {
        let a = AxisAlignedBox::new(0.0, 0.0, 10.0, 10.0);
        let touching = AxisAlignedBox::new(10.0, 0.0, 5.0, 5.0);
        let corner = AxisAlignedBox::new(10.0, 10.0, 5.0, 5.0);
        let inside = AxisAlignedBox::new(9.5, 0.0, 5.0, 5.0);

        assert!(!a.overlaps(&touching));
        assert!(!touching.overlaps(&a));
        assert!(!a.overlaps(&corner));
        assert!(a.overlaps(&inside));

        // The edge prefilter still lets touching boxes through
        assert!(a.overlaps_abs_normalized(&touching));
    }

    #[test]
    fn test_zero_area_box_never_overlaps() {
        let a = AxisAlignedBox::new(0.0, 0.0, 10.0, 10.0);
        let point = AxisAlignedBox::new(5.0, 5.0, 0.0, 0.0);
        let flat = AxisAlignedBox::new(-5.0, 5.0, 20.0, 0.0);

        assert!(point.is_degenerate());
        assert!(!a.overlaps(&point));
        assert!(!point.overlaps(&a));
        assert!(!a.overlaps(&flat));
        assert!(!flat.overlaps(&flat));
    }

    #[test]
    fn test_abs_normalized_matches_standard_in_positive_quadrant() {
        let a = AxisAlignedBox::new(0.0, 0.0, 10.0, 10.0);
        let b = AxisAlignedBox::new(9.0, 0.0, 10.0, 10.0);
        let c = AxisAlignedBox::new(18.0, 0.0, 10.0, 10.0);

        assert_eq!(a.overlaps(&b), a.overlaps_abs_normalized(&b));
        assert_eq!(a.overlaps(&c), a.overlaps_abs_normalized(&c));
    }

    #[test]
    fn test_abs_normalized_mirrors_negative_origins() {
        // (-5, -5, 10, 10) is folded to (5, 5, 10, 10)
        let straddling = AxisAlignedBox::new(-5.0, -5.0, 10.0, 10.0);
        let near_origin = AxisAlignedBox::new(4.0, -1.0, 2.0, 2.0);

        assert!(straddling.overlaps(&near_origin));
        assert!(!straddling.overlaps_abs_normalized(&near_origin));

        // Far on the negative side, but mirrored onto the positive box
        let negative = AxisAlignedBox::new(-12.0, -12.0, 2.0, 2.0);
        let positive = AxisAlignedBox::new(11.0, 11.0, 2.0, 2.0);

        assert!(!negative.overlaps(&positive));
        assert!(negative.overlaps_abs_normalized(&positive));
    }
}
