//! Ray-triangle intersection and 2D triangle overlap tests.

use crate::line::segment_segment_intersection;
use crate::predicates::point_inside_triangle;
use trigon_geom::{ccw, Ray, RayTriangleHit, Rect2, Tri2, Tri3};
use trigon_math::{Point2, Tolerance, Vec2, Vec3};

/// Intersect a ray with a 3D triangle (Möller-Trumbore).
///
/// Triangles nearly parallel to the ray (`|det|` below
/// [`Tolerance::ray_triangle_det`]) and degenerate triangles miss. Hits
/// behind the origin (`t < 0`) miss.
pub fn intersect_ray(ray: &Ray, tri: &Tri3) -> Option<RayTriangleHit> {
    intersect_ray_with_tolerance(ray, tri, &Tolerance::DEFAULT)
}

/// [`intersect_ray`] with a caller-supplied parallel threshold
/// ([`Tolerance::ray_triangle_det`]).
pub fn intersect_ray_with_tolerance(
    ray: &Ray,
    tri: &Tri3,
    tol: &Tolerance,
) -> Option<RayTriangleHit> {
    let [v0, v1, v2] = tri;
    let e1 = v1 - v0;
    let e2 = v2 - v0;

    let pvec = ray.direction.cross(&e2);
    let det = e1.dot(&pvec);
    if det.abs() < tol.ray_triangle_det {
        return None;
    }
    let inv_det = 1.0 / det;

    let tvec = ray.origin - v0;
    let u = tvec.dot(&pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(&e1);
    let v = ray.direction.dot(&qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = e2.dot(&qvec) * inv_det;
    if t < 0.0 {
        return None;
    }

    Some(RayTriangleHit {
        t,
        point: ray.at(t),
        barycentric: Vec3::new(1.0 - u - v, u, v),
    })
}

/// A crossing between a segment and one triangle edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCrossing {
    /// Edge index `i`, running from vertex `i` to vertex `(i + 1) % 3`.
    pub edge: usize,
    /// Parameter along the segment, in `[0, 1]`.
    pub t_segment: f32,
    /// Parameter along the edge, in `[0, 1]`.
    pub t_edge: f32,
    /// Crossing point.
    pub point: Point2,
}

/// Detailed triangle/segment overlap result.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleSegmentOverlap {
    /// Whether the segment touches the triangle at all.
    pub overlap: bool,
    /// Up to two edge crossings sorted by ascending segment parameter, so
    /// the first is the entry point and the last the exit point.
    pub crossings: Vec<EdgeCrossing>,
}

/// Test if segment `s0–s1` overlaps the triangle.
///
/// True if both endpoints are strictly inside or the segment crosses any edge.
pub fn triangle_segment_overlap(tri: &Tri2, s0: &Point2, s1: &Point2) -> bool {
    let [t0, t1, t2] = tri;
    if point_inside_triangle(s0, t0, t1, t2) && point_inside_triangle(s1, t0, t1, t2) {
        return true;
    }
    (0..3).any(|i| segment_segment_intersection(s0, s1, &tri[i], &tri[(i + 1) % 3]).is_some())
}

/// Like [`triangle_segment_overlap`], additionally reporting where the
/// segment crosses the triangle boundary.
///
/// A segment passing exactly through a vertex meets two edges at the same
/// point; such duplicates are merged. If more than two crossings remain
/// (a segment running along an edge) the first and last along the segment
/// are kept.
pub fn triangle_segment_overlaps(tri: &Tri2, s0: &Point2, s1: &Point2) -> TriangleSegmentOverlap {
    let tol = Tolerance::DEFAULT.linear;
    let mut crossings: Vec<EdgeCrossing> = Vec::with_capacity(3);

    for edge in 0..3 {
        let (e0, e1) = (&tri[edge], &tri[(edge + 1) % 3]);
        let Some(hit) = segment_segment_intersection(s0, s1, e0, e1) else {
            continue;
        };
        let duplicate = crossings
            .iter()
            .any(|c| (c.t_segment - hit.tp).abs() <= tol && (c.point - hit.point).norm() <= tol);
        if !duplicate {
            crossings.push(EdgeCrossing {
                edge,
                t_segment: hit.tp,
                t_edge: hit.tq,
                point: hit.point,
            });
        }
    }

    crossings.sort_by(|a, b| a.t_segment.total_cmp(&b.t_segment));
    if crossings.len() > 2 {
        let last = crossings[crossings.len() - 1];
        crossings.truncate(1);
        crossings.push(last);
    }

    let [t0, t1, t2] = tri;
    let overlap = !crossings.is_empty()
        || (point_inside_triangle(s0, t0, t1, t2) && point_inside_triangle(s1, t0, t1, t2));
    TriangleSegmentOverlap { overlap, crossings }
}

/// `true` if every vertex of `tri` lies strictly on the positive side of the
/// line through `origin` with normal `n`.
fn which_side(tri: &Tri2, n: &Vec2, origin: &Point2) -> bool {
    tri.iter().all(|p| n.dot(&(p - origin)) > 0.0)
}

/// `true` if some edge of `a` separates it from `b`.
fn has_separating_edge(a: &Tri2, b: &Tri2) -> bool {
    (0..3).any(|i| {
        let e = a[(i + 1) % 3] - a[i];
        // Outward normal of a counter-clockwise edge
        let n = Vec2::new(e.y, -e.x);
        which_side(b, &n, &a[i])
    })
}

/// Separating-axis overlap test for two 2D triangles.
///
/// Either winding is accepted. Touching triangles overlap.
pub fn triangle_triangle_overlap(a: &Tri2, b: &Tri2) -> bool {
    let a = ccw(a);
    let b = ccw(b);
    !has_separating_edge(&a, &b) && !has_separating_edge(&b, &a)
}

/// Overlap test between a triangle and an axis-aligned rectangle.
pub fn triangle_rectangle_overlap(tri: &Tri2, rect: &Rect2) -> bool {
    let [c0, c1, c2, c3] = rect.corners();
    triangle_triangle_overlap(tri, &[c0, c1, c2]) || triangle_triangle_overlap(tri, &[c0, c2, c3])
}
