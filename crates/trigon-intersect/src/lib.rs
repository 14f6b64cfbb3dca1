#![warn(missing_docs)]

//! Intersection routines for the trigon kernel.
//!
//! # Architecture
//!
//! - [`predicates`] - orientation, point-in-triangle/polygon, hyperplane straddle
//! - [`line`] - 2D line, segment and ray crossings
//! - [`triangle`] - Möller-Trumbore ray-triangle, 2D triangle overlap tests
//! - [`tri_tri`] - 3D triangle-triangle intersection with segment output
//! - [`ray`] - ray intersection against planes, cones and quadrilaterals
//!
//! Degenerate input never fails: misses, parallel cases and zero-area
//! triangles come back as `None` or a dedicated enum variant.

pub mod line;
pub mod predicates;
pub mod ray;
pub mod tri_tri;
pub mod triangle;

pub use line::{
    distance_to_line, line_line_intersection, ray_segment_intersection,
    segment_segment_intersection, LineHit, LineRelation,
};
pub use predicates::{
    hyperplane_hypercube_intersection, orientation, point_inside_polygon, point_inside_triangle,
};
pub use ray::{intersect_cone, intersect_plane, intersect_quad, intersect_segment_plane};
pub use tri_tri::{tri_tri_intersection, tri_tri_intersection_with_tolerance, TriTriIntersection};
pub use triangle::{
    intersect_ray, intersect_ray_with_tolerance, triangle_rectangle_overlap,
    triangle_segment_overlap, triangle_segment_overlaps, triangle_triangle_overlap, EdgeCrossing,
    TriangleSegmentOverlap,
};
