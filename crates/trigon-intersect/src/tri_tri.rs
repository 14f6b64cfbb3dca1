//! 3D triangle-triangle intersection with intersection segment output.
//!
//! Möller's interval overlap method ("A Fast Triangle-Triangle Intersection
//! Test", 1997) in the variant that also reports the intersection line
//! segment. Plane distances are snapped to zero within
//! [`Tolerance::coplanar_snap`] before any sign test, and every later branch
//! compares the snapped values exactly against zero.

use log::trace;
use trigon_geom::Tri3;
use trigon_math::{Point3, Tolerance, Vec3};

/// Outcome of [`tri_tri_intersection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriTriIntersection {
    /// The triangles do not touch.
    Disjoint,
    /// Both triangles lie in the same plane. No segment is reported.
    Coplanar {
        /// Whether the coplanar triangles overlap.
        overlapping: bool,
    },
    /// The triangles cross along the segment `p1–p2`.
    Segment {
        /// First segment endpoint.
        p1: Point3,
        /// Second segment endpoint.
        p2: Point3,
    },
}

impl TriTriIntersection {
    /// `true` for the coplanar case, overlapping or not.
    pub fn is_coplanar(&self) -> bool {
        matches!(self, Self::Coplanar { .. })
    }

    /// `true` if the triangles touch.
    pub fn intersects(&self) -> bool {
        match self {
            Self::Disjoint => false,
            Self::Coplanar { overlapping } => *overlapping,
            Self::Segment { .. } => true,
        }
    }

    /// Endpoints of the intersection segment, if one was computed.
    pub fn points(&self) -> Option<(Point3, Point3)> {
        match self {
            Self::Segment { p1, p2 } => Some((*p1, *p2)),
            _ => None,
        }
    }
}

/// Interval of a triangle along the intersection line, with the points on
/// the triangle boundary that produced each end.
#[derive(Debug, Clone, Copy)]
struct Interval {
    t: [f32; 2],
    points: [Point3; 2],
}

impl Interval {
    /// Sort the interval ends. Returns 1 if they were swapped, 0 otherwise.
    ///
    /// Only `t` is reordered; `points` keep their original order and the
    /// returned flag tells which point now sits at the low end.
    fn sort(&mut self) -> usize {
        if self.t[0] > self.t[1] {
            self.t.swap(0, 1);
            1
        } else {
            0
        }
    }
}

/// Crossing interval when vertex 0 is alone on its side of the other plane.
fn isect2(v: [&Point3; 3], vv: [f32; 3], d: [f32; 3]) -> Interval {
    let tmp = d[0] / (d[0] - d[1]);
    let t0 = vv[0] + (vv[1] - vv[0]) * tmp;
    let p0 = v[0] + (v[1] - v[0]) * tmp;

    let tmp = d[0] / (d[0] - d[2]);
    let t1 = vv[0] + (vv[2] - vv[0]) * tmp;
    let p1 = v[0] + (v[2] - v[0]) * tmp;

    Interval {
        t: [t0, t1],
        points: [p0, p1],
    }
}

/// Interval of `tri` along the intersection line given its projections `vv`
/// and its snapped plane distances `d`. `None` means the triangle lies in the
/// other triangle's plane.
fn compute_intervals(
    tri: &Tri3,
    vv: [f32; 3],
    d: [f32; 3],
    d0d1: f32,
    d0d2: f32,
) -> Option<Interval> {
    let [v0, v1, v2] = tri;
    let [vv0, vv1, vv2] = vv;
    let [d0, d1, d2] = d;

    if d0d1 > 0.0 {
        // v0 and v1 on the same side, v2 on the other side or on the plane
        Some(isect2([v2, v0, v1], [vv2, vv0, vv1], [d2, d0, d1]))
    } else if d0d2 > 0.0 {
        Some(isect2([v1, v0, v2], [vv1, vv0, vv2], [d1, d0, d2]))
    } else if d1 * d2 > 0.0 || d0 != 0.0 {
        Some(isect2([v0, v1, v2], [vv0, vv1, vv2], [d0, d1, d2]))
    } else if d1 != 0.0 {
        Some(isect2([v1, v0, v2], [vv1, vv0, vv2], [d1, d0, d2]))
    } else if d2 != 0.0 {
        Some(isect2([v2, v0, v1], [vv2, vv0, vv1], [d2, d0, d1]))
    } else {
        None
    }
}

/// Intersect two triangles in 3D.
///
/// Non-coplanar crossings report the segment shared by both triangles.
/// Coplanar pairs fall back to a 2D overlap test on the projection that
/// maximises the triangle area and report no segment.
pub fn tri_tri_intersection(a: &Tri3, b: &Tri3) -> TriTriIntersection {
    tri_tri_intersection_with_tolerance(a, b, &Tolerance::DEFAULT)
}

/// [`tri_tri_intersection`] with a caller-supplied coplanarity band.
///
/// `tol` should have passed [`Tolerance::validate`].
pub fn tri_tri_intersection_with_tolerance(
    a: &Tri3,
    b: &Tri3,
    tol: &Tolerance,
) -> TriTriIntersection {

    // Plane of a, distances of b's vertices to it
    let n1 = (a[1] - a[0]).cross(&(a[2] - a[0]));
    let d1 = -n1.dot(&a[0].coords);
    let du = b.map(|u| tol.snap(n1.dot(&u.coords) + d1));
    let du0du1 = du[0] * du[1];
    let du0du2 = du[0] * du[2];
    if du0du1 > 0.0 && du0du2 > 0.0 {
        return TriTriIntersection::Disjoint;
    }

    // Plane of b, distances of a's vertices to it
    let n2 = (b[1] - b[0]).cross(&(b[2] - b[0]));
    let d2 = -n2.dot(&b[0].coords);
    let dv = a.map(|v| tol.snap(n2.dot(&v.coords) + d2));
    let dv0dv1 = dv[0] * dv[1];
    let dv0dv2 = dv[0] * dv[2];
    if dv0dv1 > 0.0 && dv0dv2 > 0.0 {
        return TriTriIntersection::Disjoint;
    }

    // Project onto the largest component of the intersection line direction
    let dir = n1.cross(&n2);
    let index = dominant_axis(&dir);
    let vp = a.map(|v| v[index]);
    let up = b.map(|u| u[index]);

    // The snap band is absolute, so with very different normal lengths only
    // one of the two distance sets may collapse to zero
    let intervals = compute_intervals(a, vp, dv, dv0dv1, dv0dv2)
        .zip(compute_intervals(b, up, du, du0du1, du0du2));
    let Some((mut ia, mut ib)) = intervals else {
        let overlapping = coplanar_tri_tri(&n1, a, b);
        trace!("coplanar triangle pair, overlapping = {overlapping}");
        return TriTriIntersection::Coplanar { overlapping };
    };

    let smallest1 = ia.sort();
    let smallest2 = ib.sort();

    if ia.t[1] < ib.t[0] || ib.t[1] < ia.t[0] {
        return TriTriIntersection::Disjoint;
    }

    let [a1, a2] = ia.points;
    let [b1, b2] = ib.points;

    let (p1, p2) = if ib.t[0] < ia.t[0] {
        let p1 = if smallest1 == 0 { a1 } else { a2 };
        let p2 = if ib.t[1] < ia.t[1] {
            if smallest2 == 0 {
                b2
            } else {
                b1
            }
        } else if smallest1 == 0 {
            a2
        } else {
            a1
        };
        (p1, p2)
    } else {
        let p1 = if smallest2 == 0 { b1 } else { b2 };
        let p2 = if ib.t[1] > ia.t[1] {
            if smallest1 == 0 {
                a2
            } else {
                a1
            }
        } else if smallest2 == 0 {
            b2
        } else {
            b1
        };
        (p1, p2)
    };

    TriTriIntersection::Segment { p1, p2 }
}

/// Index of the largest-magnitude component; ties keep the lower index.
fn dominant_axis(v: &Vec3) -> usize {
    let mut max = v.x.abs();
    let mut index = 0;
    if v.y.abs() > max {
        max = v.y.abs();
        index = 1;
    }
    if v.z.abs() > max {
        index = 2;
    }
    index
}

/// Overlap test for two triangles known to share a plane with normal `n`.
fn coplanar_tri_tri(n: &Vec3, v: &Tri3, u: &Tri3) -> bool {
    // Project onto the axis-aligned plane that maximises the area
    let a = n.abs();
    let (i0, i1) = if a.x > a.y {
        if a.x > a.z {
            (1, 2)
        } else {
            (0, 1)
        }
    } else if a.z > a.y {
        (0, 1)
    } else {
        (0, 2)
    };

    for k in 0..3 {
        if edge_against_tri_edges(&v[k], &v[(k + 1) % 3], u, i0, i1) {
            return true;
        }
    }

    point_in_tri(&v[0], u, i0, i1) || point_in_tri(&u[0], v, i0, i1)
}

/// Test edge `v0–v1` against all three edges of `u` in the `(i0, i1)` plane.
fn edge_against_tri_edges(v0: &Point3, v1: &Point3, u: &Tri3, i0: usize, i1: usize) -> bool {
    let ax = v1[i0] - v0[i0];
    let ay = v1[i1] - v0[i1];
    (0..3).any(|k| edge_edge_test(v0, ax, ay, &u[k], &u[(k + 1) % 3], i0, i1))
}

fn edge_edge_test(
    v0: &Point3,
    ax: f32,
    ay: f32,
    u0: &Point3,
    u1: &Point3,
    i0: usize,
    i1: usize,
) -> bool {
    let bx = u0[i0] - u1[i0];
    let by = u0[i1] - u1[i1];
    let cx = v0[i0] - u0[i0];
    let cy = v0[i1] - u0[i1];
    let f = ay * bx - ax * by;
    let d = by * cx - bx * cy;
    if (f > 0.0 && d >= 0.0 && d <= f) || (f < 0.0 && d <= 0.0 && d >= f) {
        let e = ax * cy - ay * cx;
        if f > 0.0 {
            e >= 0.0 && e <= f
        } else {
            e <= 0.0 && e >= f
        }
    } else {
        false
    }
}

/// Test if `p` lies inside `u` in the `(i0, i1)` projection.
fn point_in_tri(p: &Point3, u: &Tri3, i0: usize, i1: usize) -> bool {
    let side = |s: &Point3, e: &Point3| {
        let a = e[i1] - s[i1];
        let b = -(e[i0] - s[i0]);
        let c = -a * s[i0] - b * s[i1];
        a * p[i0] + b * p[i1] + c
    };
    let d0 = side(&u[0], &u[1]);
    let d1 = side(&u[1], &u[2]);
    let d2 = side(&u[2], &u[0]);
    d0 * d1 > 0.0 && d0 * d2 > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_tri() -> Tri3 {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    fn translated(tri: &Tri3, offset: Vec3) -> Tri3 {
        tri.map(|p| p + offset)
    }

    #[test]
    fn test_coplanar_disjoint() {
        let a = unit_tri();
        let b = translated(&a, Vec3::new(10.0, 0.0, 0.0));
        let result = tri_tri_intersection(&a, &b);
        assert_eq!(result, TriTriIntersection::Coplanar { overlapping: false });
        assert!(result.is_coplanar());
        assert!(!result.intersects());
        assert!(result.points().is_none());
    }

    #[test]
    fn test_coplanar_overlapping_edges() {
        let a = unit_tri();
        let b = translated(&a, Vec3::new(0.2, 0.2, 0.0));
        assert_eq!(
            tri_tri_intersection(&a, &b),
            TriTriIntersection::Coplanar { overlapping: true }
        );
    }

    #[test]
    fn test_coplanar_containment() {
        let big = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
        ];
        let small = [
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
        ];
        assert!(tri_tri_intersection(&big, &small).intersects());
        assert!(tri_tri_intersection(&small, &big).intersects());
    }

    #[test]
    fn test_coplanar_in_vertical_plane() {
        // Both triangles lie in y = 0 and cross like an X
        let a = [
            Point3::new(-1.0, 0.0, -1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, -1.0),
        ];
        let b = [
            Point3::new(-1.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, -1.0),
            Point3::new(-1.0, 0.0, -1.0),
        ];
        let result = tri_tri_intersection(&a, &b);
        assert!(result.is_coplanar());
        assert!(result.intersects());
    }

    fn crossing_pair() -> (Tri3, Tri3) {
        let a = [
            Point3::new(-1.0, -1.0, 0.0),
            Point3::new(2.0, -1.0, 0.0),
            Point3::new(-1.0, 2.0, 0.0),
        ];
        let b = [
            Point3::new(0.0, 0.0, -1.0),
            Point3::new(1.0, 0.0, -1.0),
            Point3::new(0.5, 0.0, 1.0),
        ];
        (a, b)
    }

    #[test]
    fn test_wider_snap_band_makes_pair_coplanar() {
        let a = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let b = [
            Point3::new(0.2, 0.2, 1e-3),
            Point3::new(0.8, 0.2, 1e-3),
            Point3::new(0.2, 0.8, 1e-3),
        ];
        assert_eq!(tri_tri_intersection(&a, &b), TriTriIntersection::Disjoint);
        let loose = Tolerance {
            coplanar_snap: 1e-2,
            ..Tolerance::DEFAULT
        };
        assert_eq!(
            tri_tri_intersection_with_tolerance(&a, &b, &loose),
            TriTriIntersection::Coplanar { overlapping: true }
        );
    }

    #[test]
    fn test_crossing_segment() {
        let (a, b) = crossing_pair();
        let result = tri_tri_intersection(&a, &b);
        assert!(!result.is_coplanar());
        assert!(result.intersects());
        let (p1, p2) = result.points().unwrap();
        assert_relative_eq!(p1, Point3::new(0.25, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(p2, Point3::new(0.75, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_crossing_segment_partial_overlap() {
        // b pokes through a's edge: the segment is clipped by a's boundary
        let (a, b) = crossing_pair();
        let b = translated(&b, Vec3::new(0.5, 0.0, 0.0));
        let (p1, p2) = tri_tri_intersection(&a, &b).points().unwrap();
        let (lo, hi) = if p1.x < p2.x { (p1, p2) } else { (p2, p1) };
        assert_relative_eq!(lo, Point3::new(0.75, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(hi, Point3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_separated_by_plane() {
        let (a, b) = crossing_pair();
        let b = translated(&b, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(tri_tri_intersection(&a, &b), TriTriIntersection::Disjoint);
    }

    #[test]
    fn test_line_intervals_disjoint() {
        let (a, b) = crossing_pair();
        let b = translated(&b, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(tri_tri_intersection(&a, &b), TriTriIntersection::Disjoint);
    }

    #[test]
    fn test_argument_order_same_segment() {
        let (a, b) = crossing_pair();
        let (p1, p2) = tri_tri_intersection(&b, &a).points().unwrap();
        let (lo, hi) = if p1.x < p2.x { (p1, p2) } else { (p2, p1) };
        assert_relative_eq!(lo, Point3::new(0.25, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(hi, Point3::new(0.75, 0.0, 0.0), epsilon = 1e-6);
    }
}
