//! Parallelepiped boxes stored as eight explicit corners.

use crate::error::{GeomError, Result};
use crate::plane::Plane3;
use trigon_math::{Mat3, Point3, Transform, Vec3};

/// A box stored as its 8 corners.
///
/// Corner `i` sits at the x/y/z extreme selected by bits 0/1/2 of `i`, so
/// `corners[0]` is `V000`, `corners[3]` is `V110`, `corners[7]` is `V111`.
/// The corners must form a parallelepiped, e.g. `V110 = V100 + V010 - V000`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box3 {
    corners: [Point3; 8],
}

/// Corner indices of the six faces: -x, +x, -y, +y, -z, +z.
const FACES: [[usize; 4]; 6] = [
    [0, 2, 4, 6],
    [1, 3, 5, 7],
    [0, 1, 4, 5],
    [2, 3, 6, 7],
    [0, 1, 2, 3],
    [4, 5, 6, 7],
];

impl Box3 {
    /// Create a box from explicit corners, checking the parallelepiped
    /// relations within `tol`.
    pub fn new(corners: [Point3; 8], tol: f32) -> Result<Self> {
        let b = Self { corners };
        match b.first_inconsistent_corner(tol) {
            Some(corner) => Err(GeomError::InconsistentBox { corner }),
            None => Ok(b),
        }
    }

    /// Axis-aligned box spanning `min`..`max`.
    pub fn axis_aligned(min: &Point3, max: &Point3) -> Self {
        let mut corners = [Point3::origin(); 8];
        for (i, c) in corners.iter_mut().enumerate() {
            *c = Point3::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            );
        }
        Self { corners }
    }

    /// Box spanned by three edge vectors from `origin`.
    pub fn from_axes(origin: &Point3, ex: &Vec3, ey: &Vec3, ez: &Vec3) -> Self {
        let mut corners = [Point3::origin(); 8];
        for (i, c) in corners.iter_mut().enumerate() {
            *c = Self::compose(origin, ex, ey, ez, i);
        }
        Self { corners }
    }

    fn compose(origin: &Point3, ex: &Vec3, ey: &Vec3, ez: &Vec3, i: usize) -> Point3 {
        let mut p = *origin;
        if i & 1 != 0 {
            p += ex;
        }
        if i & 2 != 0 {
            p += ey;
        }
        if i & 4 != 0 {
            p += ez;
        }
        p
    }

    /// All eight corners.
    pub fn corners(&self) -> &[Point3; 8] {
        &self.corners
    }

    /// Corner at the given extreme on each axis.
    pub fn corner(&self, x: bool, y: bool, z: bool) -> Point3 {
        self.corners[x as usize | (y as usize) << 1 | (z as usize) << 2]
    }

    /// Edge vectors from `V000` along x, y and z.
    pub fn axes(&self) -> [Vec3; 3] {
        let o = self.corners[0];
        [self.corners[1] - o, self.corners[2] - o, self.corners[4] - o]
    }

    fn first_inconsistent_corner(&self, tol: f32) -> Option<usize> {
        let [ex, ey, ez] = self.axes();
        (3..8usize).find(|&i| {
            i.count_ones() > 1
                && (self.corners[i] - Self::compose(&self.corners[0], &ex, &ey, &ez, i)).norm()
                    > tol
        })
    }

    /// Check the parallelepiped relations between corners within `tol`.
    pub fn is_consistent(&self, tol: f32) -> bool {
        self.first_inconsistent_corner(tol).is_none()
    }

    /// Center of the box.
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.corners[0], &self.corners[7])
    }

    /// Apply an affine transform to every corner.
    pub fn transform(&self, t: &Transform) -> Self {
        Self {
            corners: self.corners.map(|c| t.apply_point(&c)),
        }
    }

    /// Test if `p` lies inside the box (boundary included).
    ///
    /// Flat boxes (linearly dependent edges) contain nothing.
    pub fn contains(&self, p: &Point3) -> bool {
        let [ex, ey, ez] = self.axes();
        let Some(inv) = Mat3::from_columns(&[ex, ey, ez]).try_inverse() else {
            return false;
        };
        let local = inv * (p - self.corners[0]);
        local.iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// The six face planes with normals pointing into the box.
    ///
    /// A point is inside iff every plane evaluates to `>= 0`, which makes the
    /// planes directly usable as a clipping volume.
    pub fn inward_planes(&self) -> [Plane3; 6] {
        let center = self.center();
        FACES.map(|[a, b, c, _]| {
            let p = self.corners[a];
            let n = (self.corners[b] - p).cross(&(self.corners[c] - p));
            let plane = Plane3::from_point_normal(&p, &n);
            if plane.evaluate(&center) < 0.0 {
                plane.flipped()
            } else {
                plane
            }
        })
    }
}
