//! Sign-based geometric predicates.
//!
//! All tests are exact sign checks on the floating-point result: a value of
//! exactly zero is treated as "on the boundary", which every predicate here
//! classifies as outside.

use trigon_geom::{Box4f, Plane4};
use trigon_math::Point2;

/// Twice the signed area of `(a, b, p)`.
///
/// Positive if `p` lies left of the directed edge `a → b`, negative if right,
/// zero if collinear.
#[inline]
pub fn orientation(p: &Point2, a: &Point2, b: &Point2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

/// Test if `p` lies strictly inside the triangle `(t0, t1, t2)`.
///
/// Either winding is accepted. Points on an edge or vertex are outside.
pub fn point_inside_triangle(p: &Point2, t0: &Point2, t1: &Point2, t2: &Point2) -> bool {
    let o0 = orientation(p, t0, t1);
    let o1 = orientation(p, t1, t2);
    let o2 = orientation(p, t2, t0);
    (o0 > 0.0 && o1 > 0.0 && o2 > 0.0) || (o0 < 0.0 && o1 < 0.0 && o2 < 0.0)
}

/// Even-odd point-in-polygon test by horizontal ray casting.
///
/// Works for simple polygons, convex or not. The result for
/// self-intersecting polygons follows the even-odd rule and is not otherwise
/// meaningful. Polygons with fewer than three vertices contain nothing.
pub fn point_inside_polygon(p: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Test if a 4D hyperplane passes through the interior of a hypercube.
///
/// True iff at least one of the 16 vertices is strictly on the negative side
/// and at least one strictly on the positive side. Vertices exactly on the
/// plane count toward neither side.
pub fn hyperplane_hypercube_intersection(plane: &Plane4, cube: &Box4f) -> bool {
    let mut negative = false;
    let mut positive = false;
    for corner in cube.corners() {
        let d = plane.evaluate(&corner);
        if d < 0.0 {
            negative = true;
        } else if d > 0.0 {
            positive = true;
        }
        if negative && positive {
            return true;
        }
    }
    false
}
