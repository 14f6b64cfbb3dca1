#![warn(missing_docs)]

//! trigon: a geometry and rasterization kernel.
//!
//! Re-exports the kernel crates under one name.
//!
//! # Architecture
//!
//! - [`math`] - vector aliases, transforms, tolerances
//! - [`geom`] - rays, triangles, planes, cones, quads, boxes, mean value coordinates
//! - [`intersect`] - predicates, line, triangle and ray intersection routines
//! - [`raster`] - standard and conservative rasterizers, polygon clipping
//! - [`spatial`] - point quadtree
//!
//! # Example
//!
//! ```
//! use trigon::{intersect_ray, Point3, Ray, Vec3};
//!
//! let tri = [
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let ray = Ray::new(Point3::new(0.25, 0.25, 1.0), Vec3::new(0.0, 0.0, -1.0));
//! let hit = intersect_ray(&ray, &tri).unwrap();
//! assert!((hit.t - 1.0).abs() < 1e-6);
//! ```

pub use trigon_geom as geom;
pub use trigon_intersect as intersect;
pub use trigon_math as math;
pub use trigon_raster as raster;
pub use trigon_spatial as spatial;

pub use trigon_geom::{
    mean_value_coordinates, Box3, Box4f, Box4i, Cone3, GeomError, Plane3, Plane4, Quad3, Ray,
    RayHit, RayTriangleHit, Rect2, Tri2, Tri3,
};
pub use trigon_intersect::{
    intersect_cone, intersect_plane, intersect_quad, intersect_ray, intersect_ray_with_tolerance,
    intersect_segment_plane, segment_segment_intersection, tri_tri_intersection,
    tri_tri_intersection_with_tolerance, TriTriIntersection,
};
pub use trigon_math::{Point2, Point3, Tolerance, Transform, Vec2, Vec3, Vec4};
pub use trigon_raster::{
    clip_polygon, clip_vertices, ClipVertex, ConservativeSettings, PixelMask, PixelRect,
    RasterError,
};
pub use trigon_spatial::{QuadTree, QuadTreeSettings, SpatialError};
