//! Mean value coordinates for arbitrary simple polygons.
//!
//! Uses the signed-angle formulation of Hormann & Floater (2006), which stays
//! well-defined for non-convex polygons and for points outside the polygon.

use crate::error::{GeomError, Result};
use trigon_math::{cross2, Point2};

/// Mean value coordinates of `p` with respect to `polygon`.
///
/// Returns one weight per vertex. The weights sum to 1 and reproduce `p` as
/// `Σ wᵢ·vᵢ`. A point on a vertex gets the Kronecker delta of that vertex; a
/// point on an edge gets linear weights on the two edge endpoints.
///
/// If the weights cancel to zero (only possible for some points outside the
/// polygon) all weights are returned as zero.
pub fn mean_value_coordinates(p: &Point2, polygon: &[Point2]) -> Result<Vec<f32>> {
    let n = polygon.len();
    if n < 3 {
        return Err(GeomError::TooFewVertices { expected: 3, got: n });
    }

    let s: Vec<_> = polygon.iter().map(|v| v - p).collect();
    let r: Vec<f32> = s.iter().map(|si| si.norm()).collect();
    let mut weights = vec![0.0; n];

    if let Some(i) = r.iter().position(|&ri| ri == 0.0) {
        weights[i] = 1.0;
        return Ok(weights);
    }

    let mut tan_half = vec![0.0; n];
    for i in 0..n {
        let j = (i + 1) % n;
        let det = cross2(&s[i], &s[j]);
        let dot = s[i].dot(&s[j]);
        if det == 0.0 {
            if dot < 0.0 {
                // p lies on edge i -> j
                let len = r[i] + r[j];
                weights[i] = r[j] / len;
                weights[j] = r[i] / len;
                return Ok(weights);
            }
            tan_half[i] = 0.0;
        } else {
            tan_half[i] = (r[i] * r[j] - dot) / det;
        }
    }

    for i in 0..n {
        let prev = (i + n - 1) % n;
        weights[i] = (tan_half[prev] + tan_half[i]) / r[i];
    }

    let sum: f32 = weights.iter().sum();
    if sum == 0.0 {
        weights.iter_mut().for_each(|w| *w = 0.0);
    } else {
        weights.iter_mut().for_each(|w| *w /= sum);
    }
    Ok(weights)
}
