//! Intersection of 2D lines, segments and rays.

use trigon_math::{cross2, normalize2_or_zero, Point2, Vec2};

/// Relation between two infinite 2D lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineRelation {
    /// Distinct parallel lines.
    Parallel,
    /// The same line.
    Coincident,
    /// A single crossing at `p0 + tp·(p1 - p0) = q0 + tq·(q1 - q0)`.
    Intersecting {
        /// Parameter along the first line.
        tp: f32,
        /// Parameter along the second line.
        tq: f32,
    },
}

/// A crossing between a segment or ray and another segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineHit {
    /// Parameter along the first argument (segment or ray).
    pub tp: f32,
    /// Parameter along the second segment.
    pub tq: f32,
    /// Crossing point.
    pub point: Point2,
}

/// Classify two infinite lines through `p0, p1` and `q0, q1`.
///
/// The lines are parallel only when the 2x2 determinant is exactly zero.
/// Nearly parallel lines therefore report a crossing with very large
/// parameters.
pub fn line_line_intersection(p0: &Point2, p1: &Point2, q0: &Point2, q1: &Point2) -> LineRelation {
    solve(p0, &(p1 - p0), q0, &(q1 - q0))
}

fn solve(p0: &Point2, r: &Vec2, q0: &Point2, s: &Vec2) -> LineRelation {
    let denom = cross2(r, s);
    let qp = q0 - p0;
    if denom == 0.0 {
        return if cross2(&qp, r) == 0.0 {
            LineRelation::Coincident
        } else {
            LineRelation::Parallel
        };
    }
    LineRelation::Intersecting {
        tp: cross2(&qp, s) / denom,
        tq: cross2(&qp, r) / denom,
    }
}

/// Crossing of segments `p0–p1` and `q0–q1`, both parameters in `[0, 1]`.
///
/// Parallel and coincident segments report `None`.
pub fn segment_segment_intersection(
    p0: &Point2,
    p1: &Point2,
    q0: &Point2,
    q1: &Point2,
) -> Option<LineHit> {
    let r = p1 - p0;
    match solve(p0, &r, q0, &(q1 - q0)) {
        LineRelation::Intersecting { tp, tq }
            if (0.0..=1.0).contains(&tp) && (0.0..=1.0).contains(&tq) =>
        {
            Some(LineHit {
                tp,
                tq,
                point: p0 + r * tp,
            })
        }
        _ => None,
    }
}

/// Crossing of the ray `origin + t·direction` (`t ≥ 0`) with segment `a–b`.
pub fn ray_segment_intersection(
    origin: &Point2,
    direction: &Vec2,
    a: &Point2,
    b: &Point2,
) -> Option<LineHit> {
    match solve(origin, direction, a, &(b - a)) {
        LineRelation::Intersecting { tp, tq } if tp >= 0.0 && (0.0..=1.0).contains(&tq) => {
            Some(LineHit {
                tp,
                tq,
                point: origin + direction * tp,
            })
        }
        _ => None,
    }
}

/// Signed distance from `q` to the directed line `p0 → p1`.
///
/// Positive on the left. A degenerate line (`p0 == p1`) gives 0.
pub fn distance_to_line(q: &Point2, p0: &Point2, p1: &Point2) -> f32 {
    cross2(&normalize2_or_zero(&(p1 - p0)), &(q - p0))
}
