//! Planes in implicit `ax + by + cz + d = 0` form, in 3 and 4 dimensions.

use serde::{Deserialize, Serialize};
use trigon_math::{normalize_or_zero, Point3, Transform, Vec3, Vec4};

/// A plane `a·x + b·y + c·z + d = 0` with implicit normal `(a, b, c)`.
///
/// The normal is kept exactly as supplied by [`Plane3::new`]; the point-based
/// constructors produce a unit normal. [`Plane3::unit_normal`] always
/// renormalizes, so callers needing a unit vector never depend on how the
/// plane was built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane3 {
    normal: Vec3,
    d: f32,
}

impl Plane3 {
    /// Create a plane from its coefficients. The normal is not normalized.
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self {
            normal: Vec3::new(a, b, c),
            d,
        }
    }

    /// Create a plane from a packed `(a, b, c, d)` vector.
    pub fn from_abcd(abcd: &Vec4) -> Self {
        Self::new(abcd.x, abcd.y, abcd.z, abcd.w)
    }

    /// Plane through `point` with the (normalized) `normal`.
    ///
    /// A zero normal yields the all-zero plane, which evaluates to 0
    /// everywhere.
    pub fn from_point_normal(point: &Point3, normal: &Vec3) -> Self {
        let n = normalize_or_zero(normal);
        Self {
            normal: n,
            d: -n.dot(&point.coords),
        }
    }

    /// Plane through three points, normal `(p1 - p0) × (p2 - p0)`.
    ///
    /// Returns `None` if the points are collinear.
    pub fn from_points(p0: &Point3, p1: &Point3, p2: &Point3) -> Option<Self> {
        let n = (p1 - p0).cross(&(p2 - p0));
        if n.norm_squared() == 0.0 {
            return None;
        }
        Some(Self::from_point_normal(p0, &n))
    }

    /// The `(a, b, c)` normal as stored.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    /// The normal renormalized to unit length (zero if degenerate).
    pub fn unit_normal(&self) -> Vec3 {
        normalize_or_zero(&self.normal)
    }

    /// The `d` coefficient.
    pub fn d(&self) -> f32 {
        self.d
    }

    /// Replace the `d` coefficient, shifting the plane along its normal.
    pub fn set_d(&mut self, d: f32) {
        self.d = d;
    }

    /// Coefficients packed as `(a, b, c, d)`.
    pub fn abcd(&self) -> Vec4 {
        Vec4::new(self.normal.x, self.normal.y, self.normal.z, self.d)
    }

    /// Raw plane equation `n·p + d` (scaled by `|n|`).
    #[inline]
    pub fn evaluate(&self, p: &Point3) -> f32 {
        self.normal.dot(&p.coords) + self.d
    }

    /// Plane equation against a homogeneous point: `dot(abcd, p)`.
    #[inline]
    pub fn evaluate_homogeneous(&self, p: &Vec4) -> f32 {
        self.abcd().dot(p)
    }

    /// Euclidean signed distance; positive on the side the normal points to.
    pub fn signed_distance(&self, p: &Point3) -> f32 {
        let len = self.normal.norm();
        if len == 0.0 {
            0.0
        } else {
            self.evaluate(p) / len
        }
    }

    /// Orthogonal projection of `p` onto the plane.
    pub fn project(&self, p: &Point3) -> Point3 {
        p - self.unit_normal() * self.signed_distance(p)
    }

    /// The point of the plane closest to the origin.
    pub fn point_on_plane(&self) -> Point3 {
        let len2 = self.normal.norm_squared();
        if len2 == 0.0 {
            return Point3::origin();
        }
        Point3::from(self.normal * (-self.d / len2))
    }

    /// The same plane with the normal reversed.
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            d: -self.d,
        }
    }

    /// The same plane scaled so that the normal is unit length.
    pub fn normalized(&self) -> Self {
        let len = self.normal.norm();
        if len == 0.0 {
            return *self;
        }
        Self {
            normal: self.normal / len,
            d: self.d / len,
        }
    }

    /// Map the plane through an affine transform.
    ///
    /// The normal goes through the inverse transpose, so points on the plane
    /// land on the result and each side keeps its sign.
    pub fn transform(&self, t: &Transform) -> Self {
        let normal = t.apply_normal(&self.normal);
        let p = t.apply_point(&self.point_on_plane());
        Self {
            normal,
            d: -normal.dot(&p.coords),
        }
    }
}

/// A hyperplane `n·p + d = 0` in 4 dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane4 {
    /// Normal vector (not necessarily unit length).
    pub normal: Vec4,
    /// Offset coefficient.
    pub d: f32,
}

impl Plane4 {
    /// Create a hyperplane from its normal and offset.
    pub fn new(normal: Vec4, d: f32) -> Self {
        Self { normal, d }
    }

    /// Hyperplane through `point` with the given normal (normalized).
    pub fn from_point_normal(point: &Vec4, normal: &Vec4) -> Self {
        let len = normal.norm();
        let n = if len == 0.0 { Vec4::zeros() } else { normal / len };
        Self {
            normal: n,
            d: -n.dot(point),
        }
    }

    /// Raw hyperplane equation `n·p + d`.
    #[inline]
    pub fn evaluate(&self, p: &Vec4) -> f32 {
        self.normal.dot(p) + self.d
    }

    /// Euclidean signed distance from `p`.
    pub fn signed_distance(&self, p: &Vec4) -> f32 {
        let len = self.normal.norm();
        if len == 0.0 {
            0.0
        } else {
            self.evaluate(p) / len
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;
    use trigon_math::Quat;

    #[test]
    fn test_coefficients_not_normalized() {
        let plane = Plane3::new(0.0, 0.0, 2.0, -4.0);
        assert_eq!(plane.normal(), Vec3::new(0.0, 0.0, 2.0));
        assert_relative_eq!(plane.unit_normal(), Vec3::z());
        // Raw evaluation is scaled, signed distance is not
        assert_relative_eq!(plane.evaluate(&Point3::new(0.0, 0.0, 5.0)), 6.0);
        assert_relative_eq!(plane.signed_distance(&Point3::new(0.0, 0.0, 5.0)), 3.0);
    }

    #[test]
    fn test_from_points_unit_normal() {
        let plane = Plane3::from_points(
            &Point3::new(0.0, 0.0, 1.0),
            &Point3::new(3.0, 0.0, 1.0),
            &Point3::new(0.0, 5.0, 1.0),
        )
        .unwrap();
        assert_relative_eq!(plane.normal().norm(), 1.0);
        assert_relative_eq!(plane.normal(), Vec3::z());
        assert_relative_eq!(plane.d(), -1.0);
        assert_relative_eq!(plane.evaluate(&Point3::new(7.0, -2.0, 1.0)), 0.0);
    }

    #[test]
    fn test_from_collinear_points() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let (q, r) = (Point3::new(2.0, 2.0, 2.0), Point3::new(3.0, 3.0, 3.0));
        assert!(Plane3::from_points(&p, &q, &r).is_none());
    }

    #[test]
    fn test_set_d_and_project() {
        let mut plane = Plane3::from_point_normal(&Point3::origin(), &Vec3::new(0.0, 3.0, 0.0));
        plane.set_d(-2.0);
        let projected = plane.project(&Point3::new(1.0, 5.0, -1.0));
        assert_relative_eq!(projected, Point3::new(1.0, 2.0, -1.0));
        assert_relative_eq!(plane.point_on_plane(), Point3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_homogeneous_and_flip() {
        let plane = Plane3::new(1.0, 0.0, 0.0, -1.0);
        let p = Vec4::new(2.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(plane.evaluate_homogeneous(&p), 1.0);
        assert_relative_eq!(plane.flipped().evaluate_homogeneous(&p), -1.0);
        assert_eq!(Plane3::from_abcd(&plane.abcd()), plane);
    }

    #[test]
    fn test_normalized() {
        let plane = Plane3::new(0.0, 4.0, 0.0, 8.0).normalized();
        assert_relative_eq!(plane.abcd(), Vec4::new(0.0, 1.0, 0.0, 2.0));
    }

    #[test]
    fn test_transform_by_rotation() {
        // z = 1, rotated a quarter turn about x, becomes y = -1
        let plane = Plane3::new(0.0, 0.0, 1.0, -1.0);
        let t = Transform::rotation(&Quat::from_axis_angle(&Vec3::x_axis(), FRAC_PI_2));
        let moved = plane.transform(&t);
        assert_relative_eq!(moved.normal(), Vec3::new(0.0, -1.0, 0.0), epsilon = 1e-6);
        let on = Point3::new(1.0, 2.0, 1.0);
        assert_relative_eq!(moved.evaluate(&t.apply_point(&on)), 0.0, epsilon = 1e-5);
        let above = Point3::new(0.0, 0.0, 3.0);
        assert!(moved.evaluate(&t.apply_point(&above)) > 0.0);
    }

    #[test]
    fn test_transform_by_nonuniform_scale() {
        // x + y = 1 stretched along x becomes x / 2 + y = 1
        let plane = Plane3::new(1.0, 1.0, 0.0, -1.0);
        let t = Transform::scale(2.0, 1.0, 1.0).then(&Transform::translation(0.0, 0.0, 5.0));
        let moved = plane.transform(&t);
        let on_plane = [
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.5, 0.5, 7.0),
        ];
        for p in on_plane {
            assert_relative_eq!(moved.evaluate(&t.apply_point(&p)), 0.0, epsilon = 1e-5);
        }
        assert_relative_eq!(moved.abcd(), Vec4::new(0.5, 1.0, 0.0, -1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_plane4_distance() {
        let point = Vec4::new(1.0, 1.0, 1.0, 1.0);
        let plane = Plane4::from_point_normal(&point, &Vec4::new(0.0, 0.0, 0.0, 2.0));
        assert_relative_eq!(plane.signed_distance(&Vec4::new(5.0, -3.0, 0.0, 4.0)), 3.0);
        assert_relative_eq!(plane.evaluate(&Vec4::new(0.0, 0.0, 0.0, 1.0)), 0.0);
    }
}
