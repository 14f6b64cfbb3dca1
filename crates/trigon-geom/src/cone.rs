//! Finite right circular cone with a base cap.

use crate::error::{GeomError, Result};
use trigon_math::{Dir3, Point3, Vec3};

/// A finite cone: a circular base of `radius` around `base`, narrowing to
/// `apex`.
///
/// Object space is the unit cone with the base disk `x² + y² ≤ 1` at
/// `z = 0` and the apex at `z = 1`, so the side surface is
/// `x² + y² = (z - 1)²` for `0 ≤ z ≤ 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cone3 {
    base: Point3,
    apex: Point3,
    radius: f32,
    u: Vec3,
    v: Vec3,
    axis: Dir3,
    height: f32,
}

impl Cone3 {
    /// Create a cone from base center, apex and base radius.
    pub fn new(base: Point3, apex: Point3, radius: f32) -> Result<Self> {
        if !(radius > 0.0) {
            return Err(GeomError::NonPositiveRadius(radius));
        }
        let axis_vec = apex - base;
        let height = axis_vec.norm();
        if height == 0.0 {
            return Err(GeomError::DegenerateAxis("cone apex coincides with base center".into()));
        }
        let axis = Dir3::new_unchecked(axis_vec / height);
        // Pick an arbitrary perpendicular frame around the axis
        let arbitrary = if axis.x.abs() < 0.9 { Vec3::x() } else { Vec3::y() };
        let u = arbitrary.cross(axis.as_ref()).normalize();
        let v = axis.cross(&u);
        Ok(Self {
            base,
            apex,
            radius,
            u,
            v,
            axis,
            height,
        })
    }

    /// Center of the base disk.
    pub fn base(&self) -> Point3 {
        self.base
    }

    /// Apex point.
    pub fn apex(&self) -> Point3 {
        self.apex
    }

    /// Base radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Distance from base center to apex.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Unit axis from base toward apex.
    pub fn axis(&self) -> Dir3 {
        self.axis
    }

    /// Map a world-space point into unit-cone object space.
    pub fn to_object_point(&self, p: &Point3) -> Point3 {
        let rel = p - self.base;
        Point3::new(
            rel.dot(&self.u) / self.radius,
            rel.dot(&self.v) / self.radius,
            rel.dot(self.axis.as_ref()) / self.height,
        )
    }

    /// Map a world-space direction into object space (no translation).
    pub fn to_object_vec(&self, d: &Vec3) -> Vec3 {
        Vec3::new(
            d.dot(&self.u) / self.radius,
            d.dot(&self.v) / self.radius,
            d.dot(self.axis.as_ref()) / self.height,
        )
    }

    /// Map an object-space point back to world space.
    pub fn to_world_point(&self, p: &Point3) -> Point3 {
        self.base
            + self.u * (p.x * self.radius)
            + self.v * (p.y * self.radius)
            + self.axis.as_ref() * (p.z * self.height)
    }

    /// Test if `p` lies inside the solid cone (boundary included).
    pub fn contains_point(&self, p: &Point3) -> bool {
        let o = self.to_object_point(p);
        if !(0.0..=1.0).contains(&o.z) {
            return false;
        }
        let r = 1.0 - o.z;
        o.x * o.x + o.y * o.y <= r * r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_z_cone() -> Cone3 {
        Cone3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 4.0), 2.0).unwrap()
    }

    #[test]
    fn test_invalid_cones() {
        let o = Point3::origin();
        assert_eq!(
            Cone3::new(o, Point3::new(0.0, 0.0, 1.0), 0.0),
            Err(GeomError::NonPositiveRadius(0.0))
        );
        assert!(matches!(Cone3::new(o, o, 1.0), Err(GeomError::DegenerateAxis(_))));
        assert!(Cone3::new(o, Point3::new(0.0, 0.0, 1.0), f32::NAN).is_err());
    }

    #[test]
    fn test_object_space_mapping() {
        let cone = unit_z_cone();
        let apex = cone.to_object_point(&cone.apex());
        assert_relative_eq!(apex, Point3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
        let base_rim = cone.to_object_point(&Point3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(base_rim.z, 0.0);
        assert_relative_eq!(base_rim.coords.xy().norm(), 1.0, epsilon = 1e-6);
        let world = Point3::new(1.0, 0.5, 2.0);
        let back = cone.to_world_point(&cone.to_object_point(&world));
        assert_relative_eq!(back, world, epsilon = 1e-5);
    }

    #[test]
    fn test_contains_point() {
        let cone = unit_z_cone();
        assert!(cone.contains_point(&Point3::new(0.0, 0.0, 1.0)));
        assert!(cone.contains_point(&Point3::new(0.9, 0.0, 2.0)));
        // radius at half height is 1.0
        assert!(!cone.contains_point(&Point3::new(1.1, 0.0, 2.0)));
        assert!(!cone.contains_point(&Point3::new(0.0, 0.0, -0.1)));
        assert!(!cone.contains_point(&Point3::new(0.0, 0.0, 4.1)));
    }

    #[test]
    fn test_tilted_axis() {
        let cone = Cone3::new(Point3::new(1.0, 1.0, 1.0), Point3::new(4.0, 1.0, 1.0), 1.0).unwrap();
        assert_relative_eq!(cone.axis().into_inner(), Vec3::x());
        assert_relative_eq!(cone.height(), 3.0);
        assert!(cone.contains_point(&Point3::new(2.0, 1.5, 1.0)));
    }
}
