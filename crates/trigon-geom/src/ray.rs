//! Ray representation and intersection records.

use trigon_math::{Point3, Vec3};

/// A ray in 3D space defined by origin and direction.
///
/// The direction is stored as given. Hit parameters are measured in units of
/// `direction`, so `at(t)` always reproduces the hit point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray (not necessarily unit length).
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray starting at `from` and passing through `to` at `t = 1`.
    pub fn through(from: Point3, to: Point3) -> Self {
        Self::new(from, to - from)
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + self.direction * t
    }
}

/// Result of a ray-shape intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Parameter along the ray where intersection occurs.
    pub t: f32,
    /// 3D intersection point.
    pub point: Point3,
}

impl RayHit {
    /// Create a hit at parameter `t` on `ray`.
    pub fn on(ray: &Ray, t: f32) -> Self {
        Self {
            t,
            point: ray.at(t),
        }
    }
}

/// Result of a ray-triangle intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayTriangleHit {
    /// Parameter along the ray.
    pub t: f32,
    /// 3D intersection point.
    pub point: Point3,
    /// Barycentric coordinates `(w, u, v)` with `w = 1 - u - v`,
    /// weighting the triangle's vertices 0, 1, 2.
    pub barycentric: Vec3,
}

impl From<RayTriangleHit> for RayHit {
    fn from(hit: RayTriangleHit) -> Self {
        Self {
            t: hit.t,
            point: hit.point,
        }
    }
}
