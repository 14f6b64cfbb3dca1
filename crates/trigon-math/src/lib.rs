#![warn(missing_docs)]

//! Math types for the trigon geometry kernel.
//!
//! Thin wrappers around nalgebra providing the single-precision types the
//! kernel works in: points, vectors, directions, transforms, and the
//! tolerance constants the intersection routines branch on.

use nalgebra::{Matrix3, Matrix4, Unit, UnitQuaternion, Vector2, Vector3, Vector4};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point in 2D space (pixel or polygon plane).
pub type Point2 = nalgebra::Point2<f32>;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f32>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f32>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f32>;

/// A vector in 4D space (homogeneous positions, plane coefficients, attributes).
pub type Vec4 = Vector4<f32>;

/// An integer vector in 4D space.
pub type Vec4i = Vector4<i32>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f32>>;

/// A 3x3 matrix.
pub type Mat3 = Matrix3<f32>;

/// A 4x4 matrix.
pub type Mat4 = Matrix4<f32>;

/// A unit quaternion rotation.
pub type Quat = UnitQuaternion<f32>;

/// Errors raised when validating math configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A tolerance field is negative, zero or not finite.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(String),
}

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Mat4,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Mat4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f32, dy: f32, dz: f32) -> Self {
        let mut m = Mat4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Non-uniform scale by `(sx, sy, sz)`.
    pub fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        let mut m = Mat4::identity();
        m[(0, 0)] = sx;
        m[(1, 1)] = sy;
        m[(2, 2)] = sz;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Mat4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Rotation described by a unit quaternion.
    pub fn rotation(q: &Quat) -> Self {
        Self {
            matrix: q.to_homogeneous(),
        }
    }

    /// Build a transform from three basis columns and a translation.
    ///
    /// Maps the unit axes onto `x`, `y`, `z` and the origin onto `origin`.
    pub fn from_basis(x: &Vec3, y: &Vec3, z: &Vec3, origin: &Point3) -> Self {
        let mut m = Mat4::identity();
        for row in 0..3 {
            m[(row, 0)] = x[row];
            m[(row, 1)] = y[row];
            m[(row, 2)] = z[row];
            m[(row, 3)] = origin[row];
        }
        Self { matrix: m }
    }

    /// Compose: `self` then `other` (self * other).
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vec4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vec4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Transform a normal vector (uses inverse transpose of upper-left 3x3).
    pub fn apply_normal(&self, n: &Vec3) -> Vec3 {
        let m3 = self.matrix.fixed_view::<3, 3>(0, 0);
        match m3.try_inverse() {
            Some(inv) => inv.transpose() * n,
            // Singular transform, return the input unchanged
            None => *n,
        }
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Threshold constants the kernel routines branch on.
///
/// Routines use [`Tolerance::DEFAULT`] unless called through their
/// `*_with_tolerance` variant. Loaded values should pass
/// [`Tolerance::validate`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Linear distance tolerance for point comparisons.
    pub linear: f32,
    /// Minimum `|det|` for a ray/triangle pair to be considered non-parallel.
    pub ray_triangle_det: f32,
    /// Plane distances with a smaller magnitude snap to exactly zero.
    pub coplanar_snap: f32,
}

impl Tolerance {
    /// Default kernel tolerances.
    pub const DEFAULT: Self = Self {
        linear: 1e-6,
        ray_triangle_det: 1e-5,
        coplanar_snap: 1e-6,
    };

    /// Round `d` to exactly zero when it lies within the coplanarity band.
    #[inline]
    pub fn snap(&self, d: f32) -> f32 {
        if d.abs() < self.coplanar_snap {
            0.0
        } else {
            d
        }
    }

    /// Reject non-finite or non-positive thresholds.
    pub fn validate(&self) -> Result<(), MathError> {
        for (name, value) in [
            ("linear", self.linear),
            ("ray_triangle_det", self.ray_triangle_det),
            ("coplanar_snap", self.coplanar_snap),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MathError::InvalidTolerance(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Normalize `v`, returning the zero vector instead of NaN for zero input.
#[inline]
pub fn normalize_or_zero(v: &Vec3) -> Vec3 {
    let len = v.norm();
    if len == 0.0 {
        Vec3::zeros()
    } else {
        v / len
    }
}

/// 2D variant of [`normalize_or_zero`].
#[inline]
pub fn normalize2_or_zero(v: &Vec2) -> Vec2 {
    let len = v.norm();
    if len == 0.0 {
        Vec2::zeros()
    } else {
        v / len
    }
}

/// Convert to spherical coordinates `(r, theta, phi)`.
///
/// `theta` is the polar angle from +Z in `[0, π]`, `phi` the azimuth from +X
/// in `(-π, π]`. The zero vector maps to `(0, 0, 0)`.
pub fn to_spherical(v: &Vec3) -> (f32, f32, f32) {
    let r = v.norm();
    if r == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let theta = (v.z / r).clamp(-1.0, 1.0).acos();
    let phi = v.y.atan2(v.x);
    (r, theta, phi)
}

/// Inverse of [`to_spherical`].
pub fn from_spherical(r: f32, theta: f32, phi: f32) -> Vec3 {
    let (st, ct) = theta.sin_cos();
    let (sp, cp) = phi.sin_cos();
    Vec3::new(r * st * cp, r * st * sp, r * ct)
}

/// Linear interpolation between two 4-vectors.
#[inline]
pub fn lerp_vec4(a: &Vec4, b: &Vec4, t: f32) -> Vec4 {
    a + (b - a) * t
}

/// 2D cross product (z component of the 3D cross product).
#[inline]
pub fn cross2(a: &Vec2, b: &Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}
