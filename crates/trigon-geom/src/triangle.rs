//! Triangle utilities: winding order, barycentric conversion, normals.

use serde::{Deserialize, Serialize};
use trigon_math::{cross2, normalize_or_zero, Point2, Point3, Vec3};

/// A 2D triangle as three points.
pub type Tri2 = [Point2; 3];

/// A 3D triangle as three points.
pub type Tri3 = [Point3; 3];

/// Signed area of a 2D triangle. Positive for counter-clockwise winding.
#[inline]
pub fn signed_area(tri: &Tri2) -> f32 {
    0.5 * cross2(&(tri[1] - tri[0]), &(tri[2] - tri[0]))
}

/// `true` if the triangle winds clockwise (negative signed area).
#[inline]
pub fn is_clockwise(tri: &Tri2) -> bool {
    signed_area(tri) < 0.0
}

/// Return the triangle with counter-clockwise winding.
///
/// Clockwise input is reordered as `[t0, t2, t1]`; everything else is
/// returned unchanged (degenerate triangles included).
pub fn ccw(tri: &Tri2) -> Tri2 {
    if is_clockwise(tri) {
        [tri[0], tri[2], tri[1]]
    } else {
        *tri
    }
}

/// Barycentric coordinates `(l0, l1, l2)` of `p` relative to `tri`.
///
/// Works for points outside the triangle (coordinates go negative).
/// Returns `None` for degenerate (zero-area) triangles.
pub fn euclidean_to_barycentric(p: &Point2, tri: &Tri2) -> Option<Vec3> {
    let v0 = tri[1] - tri[0];
    let v1 = tri[2] - tri[0];
    let v2 = p - tri[0];
    let den = cross2(&v0, &v1);
    if den == 0.0 {
        return None;
    }
    let l1 = cross2(&v2, &v1) / den;
    let l2 = cross2(&v0, &v2) / den;
    Some(Vec3::new(1.0 - l1 - l2, l1, l2))
}

/// Point given by barycentric weights `(l0, l1, l2)` over `tri`.
pub fn barycentric_to_euclidean(b: &Vec3, tri: &Tri2) -> Point2 {
    Point2::from(tri[0].coords * b.x + tri[1].coords * b.y + tri[2].coords * b.z)
}

/// 3D variant of [`barycentric_to_euclidean`].
pub fn barycentric_to_euclidean3(b: &Vec3, tri: &Tri3) -> Point3 {
    Point3::from(tri[0].coords * b.x + tri[1].coords * b.y + tri[2].coords * b.z)
}

/// Unnormalized normal `(t1 - t0) × (t2 - t0)`; its length is twice the area.
#[inline]
pub fn triangle_normal(tri: &Tri3) -> Vec3 {
    (tri[1] - tri[0]).cross(&(tri[2] - tri[0]))
}

/// Unit normal, or zero for degenerate triangles.
pub fn triangle_unit_normal(tri: &Tri3) -> Vec3 {
    normalize_or_zero(&triangle_normal(tri))
}

/// Axis-aligned rectangle in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Rect2 {
    /// Create a rectangle from two opposite corners in any order.
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Width along x.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height along y.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center point.
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Test if `p` lies inside or on the boundary.
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Test if two rectangles overlap (touching counts as overlap).
    pub fn intersects(&self, other: &Rect2) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Corners in counter-clockwise order starting at `min`.
    pub fn corners(&self) -> [Point2; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }

    /// Quadrant `i` (bit 0 selects the upper x half, bit 1 the upper y half).
    pub fn quadrant(&self, i: usize) -> Rect2 {
        let c = self.center();
        let (x0, x1) = if i & 1 == 0 { (self.min.x, c.x) } else { (c.x, self.max.x) };
        let (y0, y1) = if i & 2 == 0 { (self.min.y, c.y) } else { (c.y, self.max.y) };
        Rect2 {
            min: Point2::new(x0, y0),
            max: Point2::new(x1, y1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tri() -> Tri2 {
        [Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), Point2::new(0.0, 4.0)]
    }

    #[test]
    fn test_winding() {
        let t = tri();
        assert_relative_eq!(signed_area(&t), 8.0);
        assert!(!is_clockwise(&t));
        let cw = [t[0], t[2], t[1]];
        assert!(is_clockwise(&cw));
        assert_eq!(ccw(&cw), t);
        assert_eq!(ccw(&t), t);
    }

    #[test]
    fn test_barycentric_vertices() {
        let t = tri();
        let b = euclidean_to_barycentric(&t[1], &t).unwrap();
        assert_relative_eq!(b, Vec3::new(0.0, 1.0, 0.0));
        let b = euclidean_to_barycentric(&Point2::new(1.0, 1.0), &t).unwrap();
        assert_relative_eq!(b.sum(), 1.0);
        assert_relative_eq!(b, Vec3::new(0.5, 0.25, 0.25));
    }

    #[test]
    fn test_barycentric_round_trip_outside() {
        let t = tri();
        let p = Point2::new(-3.0, 7.5);
        let b = euclidean_to_barycentric(&p, &t).unwrap();
        assert!(b.x < 0.0 || b.y < 0.0 || b.z < 0.0);
        assert_relative_eq!(barycentric_to_euclidean(&b, &t), p, epsilon = 1e-5);
    }

    #[test]
    fn test_barycentric_degenerate() {
        let line = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)];
        assert!(euclidean_to_barycentric(&Point2::new(0.5, 0.0), &line).is_none());
    }

    #[test]
    fn test_triangle_normal() {
        let t = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        assert_relative_eq!(triangle_unit_normal(&t), Vec3::z());
        let flat = [Point3::origin(); 3];
        assert_eq!(triangle_unit_normal(&flat), Vec3::zeros());
    }

    #[test]
    fn test_rect_quadrants() {
        let r = Rect2::new(Point2::new(4.0, 4.0), Point2::new(0.0, 0.0));
        assert_eq!(r.min, Point2::new(0.0, 0.0));
        let q3 = r.quadrant(3);
        assert_eq!(q3.min, Point2::new(2.0, 2.0));
        assert_eq!(q3.max, Point2::new(4.0, 4.0));
        assert!(r.contains(&Point2::new(4.0, 0.0)));
        assert!(!r.contains(&Point2::new(4.1, 0.0)));
        assert!(r.intersects(&Rect2::new(Point2::new(4.0, 4.0), Point2::new(5.0, 5.0))));
    }
}
