//! Planar or near-planar quadrilaterals in 3D.

use crate::triangle::Tri3;
use trigon_math::{normalize_or_zero, Point3, Vec3};

/// A quadrilateral given by four corners in boundary order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad3 {
    /// Corners `p0..p3`, walked around the boundary.
    pub corners: [Point3; 4],
}

impl Quad3 {
    /// Create a quadrilateral from corners in boundary order.
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self {
            corners: [p0, p1, p2, p3],
        }
    }

    /// The two triangles `(p0, p1, p2)` and `(p0, p2, p3)` covering the quad.
    pub fn triangles(&self) -> [Tri3; 2] {
        let [p0, p1, p2, p3] = self.corners;
        [[p0, p1, p2], [p0, p2, p3]]
    }

    /// Bilinear point at `(u, v)`: `u` runs p0→p1, `v` runs p0→p3.
    pub fn point_at(&self, u: f32, v: f32) -> Point3 {
        let [p0, p1, p2, p3] = self.corners;
        let bottom = p0.coords.lerp(&p1.coords, u);
        let top = p3.coords.lerp(&p2.coords, u);
        Point3::from(bottom.lerp(&top, v))
    }

    /// Unit normal from the diagonals `(p2 - p0) × (p3 - p1)`.
    pub fn normal(&self) -> Vec3 {
        let [p0, p1, p2, p3] = self.corners;
        normalize_or_zero(&(p2 - p0).cross(&(p3 - p1)))
    }

    /// Average of the four corners.
    pub fn centroid(&self) -> Point3 {
        let sum = self.corners.iter().fold(Vec3::zeros(), |acc, p| acc + p.coords);
        Point3::from(sum / 4.0)
    }
}
