//! Ray-plane and segment-plane intersection.

use trigon_geom::{Plane3, Ray, RayHit};
use trigon_math::Point3;

/// Parameter where `ray` meets `plane`, or `None` when parallel.
fn plane_parameter(ray: &Ray, plane: &Plane3) -> Option<f32> {
    let denom = plane.normal().dot(&ray.direction);
    if denom == 0.0 {
        return None;
    }
    Some(-plane.evaluate(&ray.origin) / denom)
}

/// Intersect a ray with a plane.
///
/// Returns `None` if the ray is parallel to the plane or meets it behind
/// the origin.
pub fn intersect_plane(ray: &Ray, plane: &Plane3) -> Option<RayHit> {
    let t = plane_parameter(ray, plane)?;
    if t < 0.0 {
        return None;
    }
    Some(RayHit::on(ray, t))
}

/// Intersect the segment `p0–p1` with a plane.
///
/// The hit parameter runs from 0 at `p0` to 1 at `p1`.
pub fn intersect_segment_plane(p0: &Point3, p1: &Point3, plane: &Plane3) -> Option<RayHit> {
    let ray = Ray::through(*p0, *p1);
    let t = plane_parameter(&ray, plane)?;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    Some(RayHit::on(&ray, t))
}
