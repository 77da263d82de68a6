//! Polygon collider: a vertex loop with cached bounds
//!
//! The collider is a plain value type. Insertion order of the vertices
//! defines the edge loop (edge `i` joins vertex `i` to vertex `(i + 1) % n`);
//! the loop is never stored closed. Bounds are recomputed at the end of every
//! mutating call, so readers never see stale bounds.

use serde::{Serialize, Deserialize};

use crate::foundation::math::{constants::TAU, Mat3, Point2, Vec2};
use super::bounds::AxisAlignedBox;
use super::primitives::{line_intersection_with_tolerance, DEFAULT_COLLINEAR_TOLERANCE};

/// Vertex count used by [`ConvexPolygonCollider::circle`]
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 128;

/// 2D polygon collider
///
/// Built in local space (see [`Self::circle`], [`Self::rectangle`],
/// [`Self::push_back`]), moved into world space with
/// [`Self::apply_transform`], and queried pairwise in world space.
///
/// An empty collider never collides with anything.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "ColliderData", into = "ColliderData")]
pub struct ConvexPolygonCollider {
    vertices: Vec<Point2>,
    bounds: AxisAlignedBox,
}

/// Serialized form: vertices only, bounds are derived on load
#[derive(Serialize, Deserialize)]
struct ColliderData {
    vertices: Vec<Point2>,
}

impl From<ColliderData> for ConvexPolygonCollider {
    fn from(data: ColliderData) -> Self {
        Self::from_points(data.vertices)
    }
}

impl From<ConvexPolygonCollider> for ColliderData {
    fn from(collider: ConvexPolygonCollider) -> Self {
        Self { vertices: collider.vertices }
    }
}

impl ConvexPolygonCollider {
    /// Creates an empty collider
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collider from a vertex loop
    pub fn from_points(points: impl IntoIterator<Item = Point2>) -> Self {
        let vertices: Vec<Point2> = points.into_iter().collect();
        let bounds = AxisAlignedBox::from_points(&vertices);
        Self { vertices, bounds }
    }

    /// Circle with [`DEFAULT_CIRCLE_SEGMENTS`] vertices
    ///
    /// See [`Self::circle_with_segments`] for the vertex layout.
    pub fn circle(radius: f32) -> Self {
        Self::circle_with_segments(radius, DEFAULT_CIRCLE_SEGMENTS)
    }

    /// Circle sampled at `segments` evenly spaced angles
    ///
    /// Vertex `i` is `(r * sin(a) + r, r * cos(a) + r)` with
    /// `a = TAU / segments * i`. The circle's bounding-box corner, not its
    /// center, sits at the local origin.
    pub fn circle_with_segments(radius: f32, segments: usize) -> Self {
        let step = TAU / segments as f32;
        Self::from_points((0..segments).map(|i| {
            let angle = step * i as f32;
            Point2::new(
                angle.sin() * radius + radius,
                angle.cos() * radius + radius,
            )
        }))
    }

    /// Rectangle anchored at the local origin: `(0,0)`, `(w,0)`, `(w,h)`, `(0,h)`
    pub fn rectangle(size: Vec2) -> Self {
        Self::from_points([
            Point2::new(0.0, 0.0),
            Point2::new(size.x, 0.0),
            Point2::new(size.x, size.y),
            Point2::new(0.0, size.y),
        ])
    }

    /// Appends a vertex to the loop
    pub fn push_back(&mut self, point: Point2) {
        self.vertices.push(point);
        self.update_bounds();
    }

    /// Removes every vertex
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.update_bounds();
    }

    /// Maps every vertex through `transform` in place
    ///
    /// Calls compose: each one moves the current state further. To place a
    /// local-space shape at an absolute pose every frame, transform a fresh
    /// copy of the local shape (see `TrackedCollider`).
    pub fn apply_transform(&mut self, transform: &Mat3) {
        for vertex in &mut self.vertices {
            *vertex = transform.transform_point(vertex);
        }
        self.update_bounds();

        log::debug!(
            "Transformed collider with {} vertices, bounds now {:?}",
            self.vertices.len(),
            self.bounds
        );
    }

    /// Cached world-space bounds
    pub fn global_bounds(&self) -> AxisAlignedBox {
        self.bounds
    }

    /// Vertex loop in insertion order
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if there are no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Tests whether any edge of `self` crosses or touches any edge of `other`
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersects_with_tolerance(other, DEFAULT_COLLINEAR_TOLERANCE)
    }

    /// [`Self::intersects`] with an explicit collinearity tolerance
    pub fn intersects_with_tolerance(&self, other: &Self, tolerance: f32) -> bool {
        if self.is_empty()
            || other.is_empty()
            || !self.bounds.overlaps_abs_normalized(&other.bounds)
        {
            log::trace!("Edge test pruned by bounds: {:?} vs {:?}", self.bounds, other.bounds);
            return false;
        }

        let ours = self.closed_loop();
        let theirs = other.closed_loop();

        ours.windows(2).any(|a| {
            theirs
                .windows(2)
                .any(|b| line_intersection_with_tolerance(a[0], a[1], b[0], b[1], tolerance))
        })
    }

    /// Even-odd point containment
    ///
    /// Casts a ray toward +x and counts edge crossings. Horizontal edges never
    /// straddle the ray and are skipped. Results for self-intersecting loops
    /// follow the even-odd rule.
    pub fn contains(&self, point: Point2) -> bool {
        let n = self.vertices.len();
        let mut inside = false;

        let mut j = n.wrapping_sub(1);
        for i in 0..n {
            let pi = self.vertices[i];
            let pj = self.vertices[j];

            if (pi.y >= point.y) != (pj.y >= point.y) {
                let intercept = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
                if point.x <= intercept {
                    inside = !inside;
                }
            }
            j = i;
        }

        inside
    }

    /// Composite collision test
    ///
    /// True when the bounds overlap with positive area and either the edges
    /// intersect or every vertex of `other` lies inside `self`. Shapes that
    /// only touch never collide, and neither do zero-area shapes.
    ///
    /// The containment half is one-directional: `self` lying wholly inside
    /// `other` is not detected, so query both ways when that matters.
    pub fn collides(&self, other: &Self) -> bool {
        self.collides_with_tolerance(other, DEFAULT_COLLINEAR_TOLERANCE)
    }

    /// [`Self::collides`] with an explicit collinearity tolerance
    pub fn collides_with_tolerance(&self, other: &Self, tolerance: f32) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        if !self.bounds.overlaps(&other.bounds) {
            log::trace!("Collision pruned by bounds: {:?} vs {:?}", self.bounds, other.bounds);
            return false;
        }

        if self.intersects_with_tolerance(other, tolerance) {
            return true;
        }

        other.vertices.iter().all(|v| self.contains(*v))
    }

    /// Vertex loop with the first vertex repeated at the end
    fn closed_loop(&self) -> Vec<Point2> {
        let mut closed = Vec::with_capacity(self.vertices.len() + 1);
        closed.extend_from_slice(&self.vertices);
        if let Some(first) = self.vertices.first() {
            closed.push(*first);
        }
        closed
    }

    fn update_bounds(&mut self) {
        self.bounds = AxisAlignedBox::from_points(&self.vertices);
    }
}
