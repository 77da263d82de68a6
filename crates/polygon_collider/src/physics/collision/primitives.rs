//! Orientation and segment intersection predicates
//!
//! Everything here works on `f32` points. The orientation of an ordered
//! triple is the sign of a cross product; values within a small tolerance of
//! zero are classified as collinear instead of being left to rounding. The
//! tolerance is relative to the lengths of the two legs, so classification
//! does not depend on how far the points sit from the origin or on the
//! overall scale of the shapes.

use crate::foundation::math::Point2;

/// Turns whose sine is at or below this are treated as collinear
///
/// The cross product of `p -> q -> r` is compared against
/// `tolerance * |q - p| * |r - q|`, i.e. against the sine of the turn angle.
pub const DEFAULT_COLLINEAR_TOLERANCE: f32 = 1e-5;

/// Result of an orientation test on an ordered point triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The three points lie on one line (within tolerance)
    Collinear,
    /// Right turn in a y-up frame
    Clockwise,
    /// Left turn in a y-up frame
    CounterClockwise,
}

impl Orientation {
    /// Returns true if the points are collinear
    #[inline]
    pub fn is_collinear(self) -> bool {
        matches!(self, Self::Collinear)
    }
}

/// Classifies the turn `p -> q -> r`
///
/// Uses `(q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)`, which is
/// positive for a clockwise turn. A zero-length leg is always collinear.
pub fn orientation(p: Point2, q: Point2, r: Point2, tolerance: f32) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    let band = tolerance * (q - p).norm() * (r - q).norm();

    if val.abs() <= band {
        Orientation::Collinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Returns `true` if `q` lies inside the closed box spanned by `p` and `r`
///
/// Only meaningful when the three points are already known to be collinear.
pub fn on_segment(p: Point2, q: Point2, r: Point2) -> bool {
    q.x <= p.x.max(r.x)
        && q.x >= p.x.min(r.x)
        && q.y <= p.y.max(r.y)
        && q.y >= p.y.min(r.y)
}

/// Tests segments `p1-q1` and `p2-q2` for intersection with the default
/// collinearity tolerance
pub fn line_intersection(p1: Point2, q1: Point2, p2: Point2, q2: Point2) -> bool {
    line_intersection_with_tolerance(p1, q1, p2, q2, DEFAULT_COLLINEAR_TOLERANCE)
}

/// Tests segments `p1-q1` and `p2-q2` for intersection
///
/// Touching counts: an endpoint lying on the other segment, or collinear
/// segments that overlap, are reported as intersecting.
pub fn line_intersection_with_tolerance(
    p1: Point2,
    q1: Point2,
    p2: Point2,
    q2: Point2,
    tolerance: f32,
) -> bool {
    let o1 = orientation(p1, q1, p2, tolerance);
    let o2 = orientation(p1, q1, q2, tolerance);
    let o3 = orientation(p2, q2, p1, tolerance);
    let o4 = orientation(p2, q2, q1, tolerance);

    // General case: each segment separates the other's endpoints
    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear cases
    (o1.is_collinear() && on_segment(p1, p2, q1))
        || (o2.is_collinear() && on_segment(p1, q2, q1))
        || (o3.is_collinear() && on_segment(p2, p1, q2))
        || (o4.is_collinear() && on_segment(p2, q1, q2))
}
