//! Math utilities and types
//!
//! Provides the 2D math types used by the collision code. Affine transforms
//! are 3x3 homogeneous matrices (`Mat3`), so translation, rotation,
//! non-uniform scale and shear all compose through plain matrix products.

pub use nalgebra::{Matrix3, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// 3x3 homogeneous matrix type (2D affine transform)
pub type Mat3 = Matrix3<f32>;

/// Transform representing position, rotation, scale and a local pivot
///
/// Mirrors the usual "transformable" convention of 2D scene objects: the
/// local `origin` is moved to (0, 0), then the object is scaled, rotated and
/// finally translated to `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    /// Position in world space
    pub position: Vec2,

    /// Rotation in radians (counter-clockwise in a y-up frame)
    pub rotation: f32,

    /// Scale factors
    pub scale: Vec2,

    /// Local pivot for rotation and scale
    pub origin: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
            origin: Vec2::zeros(),
        }
    }
}

impl Transform2D {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_translation(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set the rotation (radians)
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the scale factors
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    /// Set the local pivot
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    /// Convert to a transformation matrix: `T(position) * R * S * T(-origin)`
    pub fn to_matrix(&self) -> Mat3 {
        Mat3::new_translation(&self.position)
            * Mat3::new_rotation(self.rotation)
            * Mat3::new_nonuniform_scaling(&self.scale)
            * Mat3::new_translation(&-self.origin)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point2) -> Point2 {
        self.to_matrix().transform_point(&point)
    }
}

impl From<Transform2D> for Mat3 {
    fn from(transform: Transform2D) -> Self {
        transform.to_matrix()
    }
}

/// Raw affine matrix builders
pub mod affine {
    use super::{Mat3, Vec2};

    /// Translation by `(x, y)`
    pub fn translation(x: f32, y: f32) -> Mat3 {
        Mat3::new_translation(&Vec2::new(x, y))
    }

    /// Rotation about the local origin by `angle` radians
    pub fn rotation(angle: f32) -> Mat3 {
        Mat3::new_rotation(angle)
    }

    /// Non-uniform scale about the local origin
    pub fn scaling(sx: f32, sy: f32) -> Mat3 {
        Mat3::new_nonuniform_scaling(&Vec2::new(sx, sy))
    }

    /// Shear: `x' = x + kx * y`, `y' = y + ky * x`
    pub fn shear(kx: f32, ky: f32) -> Mat3 {
        Mat3::new(
            1.0, kx, 0.0,
            ky, 1.0, 0.0,
            0.0, 0.0, 1.0,
        )
    }
}

/// Math constants
pub mod constants {
    /// Full-precision 2 * Pi
    pub const TAU: f32 = std::f32::consts::TAU;

    /// Pi / 2
    pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_identity_leaves_points_alone() {
        let p = Point2::new(3.0, -4.0);
        assert_eq!(Transform2D::identity().transform_point(p), p);
    }

    #[test]
    fn test_translation_then_rotation_order() {
        // Rotate (1, 0) by 90 degrees, then move by (10, 0)
        let transform = Transform2D::from_translation(Vec2::new(10.0, 0.0))
            .with_rotation(constants::HALF_PI);
        let p = transform.transform_point(Point2::new(1.0, 0.0));

        assert_relative_eq!(p.x, 10.0, epsilon = EPSILON);
        assert_relative_eq!(p.y, 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_origin_acts_as_pivot() {
        // The pivot always lands on `position`, whatever the scale
        let transform = Transform2D::identity()
            .with_origin(Vec2::new(5.0, 5.0))
            .with_scale(Vec2::new(2.0, 2.0));
        let p = transform.transform_point(Point2::new(5.0, 5.0));

        assert_relative_eq!(p.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(p.y, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_shear_matrix() {
        let p = affine::shear(0.5, 0.0).transform_point(&Point2::new(0.0, 2.0));
        assert_relative_eq!(p.x, 1.0, epsilon = EPSILON);
        assert_relative_eq!(p.y, 2.0, epsilon = EPSILON);
    }
}
