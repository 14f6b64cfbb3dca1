//! Ray-quadrilateral intersection through its two triangles.

use crate::triangle::intersect_ray;
use trigon_geom::{Quad3, Ray, RayHit};

/// Intersect a ray with a quadrilateral, returning the nearest hit.
pub fn intersect_quad(ray: &Ray, quad: &Quad3) -> Option<RayHit> {
    quad.triangles()
        .iter()
        .filter_map(|tri| intersect_ray(ray, tri))
        .min_by(|a, b| a.t.total_cmp(&b.t))
        .map(RayHit::from)
}
