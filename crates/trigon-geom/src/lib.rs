#![warn(missing_docs)]

//! Geometric primitives for the trigon kernel.
//!
//! Shape definitions only: rays and hit records, triangle utilities, planes
//! in 3D and 4D, cones, quadrilaterals, boxes, and mean value coordinates.
//! Intersection routines live in `trigon-intersect`.

pub mod box3;
pub mod box4;
pub mod cone;
pub mod error;
pub mod mvc;
pub mod plane;
pub mod quad;
pub mod ray;
pub mod triangle;

pub use box3::Box3;
pub use box4::{Box4f, Box4i};
pub use cone::Cone3;
pub use error::{GeomError, Result};
pub use mvc::mean_value_coordinates;
pub use plane::{Plane3, Plane4};
pub use quad::Quad3;
pub use ray::{Ray, RayHit, RayTriangleHit};
pub use triangle::{
    barycentric_to_euclidean, barycentric_to_euclidean3, ccw, euclidean_to_barycentric,
    is_clockwise, signed_area, triangle_normal, triangle_unit_normal, Rect2, Tri2, Tri3,
};
