//! Ray intersection against analytic shapes.
//!
//! Each shape has a dedicated intersector returning the nearest hit in
//! front of the ray origin. Hit parameters are measured in units of the
//! ray's own direction vector, so `ray.at(hit.t) == hit.point`.

mod cone;
mod plane;
mod quad;

pub use cone::intersect_cone;
pub use plane::{intersect_plane, intersect_segment_plane};
pub use quad::intersect_quad;
