//! Ray-cone intersection (quadratic side plus base cap).

use trigon_geom::{Cone3, Ray, RayHit};
use trigon_math::{Point3, Vec3};

/// Intersect a ray with a solid finite cone, returning the nearest hit.
///
/// The ray is mapped into the cone's object space, where the side is
/// `x² + y² = (z - 1)²` for `0 ≤ z ≤ 1` and the base cap is the unit disk at
/// `z = 0`. The object-space parameter is measured along the normalized
/// object direction and rescaled back to the world ray's units.
pub fn intersect_cone(ray: &Ray, cone: &Cone3) -> Option<RayHit> {
    let o = cone.to_object_point(&ray.origin);
    let d_obj = cone.to_object_vec(&ray.direction);
    let scale = d_obj.norm();
    if scale == 0.0 {
        return None;
    }
    let d = d_obj / scale;

    let t_obj = [side_hit(&o, &d), cap_hit(&o, &d)]
        .into_iter()
        .flatten()
        .min_by(f32::total_cmp)?;

    Some(RayHit::on(ray, t_obj / scale))
}

/// Smallest `t > 0` on the side surface between base and apex.
fn side_hit(o: &Point3, d: &Vec3) -> Option<f32> {
    let oz = o.z - 1.0;
    let a = d.x * d.x + d.y * d.y - d.z * d.z;
    let b = 2.0 * (o.x * d.x + o.y * d.y - oz * d.z);
    let c = o.x * o.x + o.y * o.y - oz * oz;

    let on_side = |t: f32| {
        let z = o.z + t * d.z;
        t > 0.0 && (0.0..=1.0).contains(&z)
    };

    if a == 0.0 {
        // Ray parallel to a generator line: single root
        if b == 0.0 {
            return None;
        }
        let t = -c / b;
        return on_side(t).then_some(t);
    }

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t1 = (-b - sqrt_disc) / (2.0 * a);
    let t2 = (-b + sqrt_disc) / (2.0 * a);
    [t1, t2].into_iter().filter(|&t| on_side(t)).min_by(f32::total_cmp)
}

/// `t > 0` on the base cap disk at `z = 0`.
fn cap_hit(o: &Point3, d: &Vec3) -> Option<f32> {
    if d.z == 0.0 {
        return None;
    }
    let t = -o.z / d.z;
    if t <= 0.0 {
        return None;
    }
    let x = o.x + t * d.x;
    let y = o.y + t * d.y;
    (x * x + y * y <= 1.0).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cone() -> Cone3 {
        Cone3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 4.0), 2.0).unwrap()
    }

    #[test]
    fn test_hits_base_cap_first() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = intersect_cone(&ray, &cone()).unwrap();
        assert_relative_eq!(hit.t, 5.0, epsilon = 1e-5);
        assert_relative_eq!(hit.point, Point3::origin(), epsilon = 1e-5);
    }

    #[test]
    fn test_hits_side_in_world_units() {
        // Radius at half height is 1
        let ray = Ray::new(Point3::new(5.0, 0.0, 2.0), Vec3::new(-1.0, 0.0, 0.0));
        let hit = intersect_cone(&ray, &cone()).unwrap();
        assert_relative_eq!(hit.t, 4.0, epsilon = 1e-5);
        assert_relative_eq!(hit.point, Point3::new(1.0, 0.0, 2.0), epsilon = 1e-5);
    }

    #[test]
    fn test_unnormalized_direction() {
        let ray = Ray::new(Point3::new(5.0, 0.0, 2.0), Vec3::new(-2.0, 0.0, 0.0));
        let hit = intersect_cone(&ray, &cone()).unwrap();
        assert_relative_eq!(hit.t, 2.0, epsilon = 1e-5);
        assert_relative_eq!(ray.at(hit.t), hit.point);
    }

    #[test]
    fn test_from_inside_exits_side() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 1.0), Vec3::new(1.0, 0.0, 0.0));
        let hit = intersect_cone(&ray, &cone()).unwrap();
        assert_relative_eq!(hit.point, Point3::new(1.5, 0.0, 1.0), epsilon = 1e-5);
    }

    #[test]
    fn test_misses_above_apex_and_behind() {
        let above = Ray::new(Point3::new(5.0, 0.0, 5.0), Vec3::new(-1.0, 0.0, 0.0));
        assert!(intersect_cone(&above, &cone()).is_none());
        let away = Ray::new(Point3::new(5.0, 0.0, 2.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(intersect_cone(&away, &cone()).is_none());
    }
}
