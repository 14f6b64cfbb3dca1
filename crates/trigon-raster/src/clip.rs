//! Sutherland-Hodgman polygon clipping against a set of planes.
//!
//! A point is inside a plane when `dot(abcd, p) >= 0`, with `p` taken as a
//! homogeneous point. Clipping one plane at a time produces a new polygon per
//! pass; the two vertex buffers trade places between passes.
//!
//! [^1]: Ivan Sutherland, Gary W. Hodgman: Reentrant Polygon Clipping.
//!       Communications of the ACM, vol. 17, pp. 32–42, 1974

use crate::error::{RasterError, Result};
use log::trace;
use std::mem::swap;
use trigon_geom::Plane3;
use trigon_math::{lerp_vec4, Point3, Vec4};

/// A vertex position the clipper can evaluate and interpolate.
pub trait ClipPosition: Copy {
    /// The position as a homogeneous 4-vector.
    fn homogeneous(&self) -> Vec4;
    /// Linear interpolation from `self` (`t = 0`) to `other` (`t = 1`).
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl ClipPosition for Point3 {
    fn homogeneous(&self) -> Vec4 {
        self.to_homogeneous()
    }

    fn lerp(&self, other: &Self, t: f32) -> Self {
        Point3::from(self.coords.lerp(&other.coords, t))
    }
}

impl ClipPosition for Vec4 {
    fn homogeneous(&self) -> Vec4 {
        *self
    }

    fn lerp(&self, other: &Self, t: f32) -> Self {
        lerp_vec4(self, other, t)
    }
}

/// A polygon vertex carrying interpolated attributes.
///
/// All vertices passed to one [`clip_vertices`] call must carry the same
/// number of attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipVertex<P> {
    /// Vertex position.
    pub position: P,
    /// Attributes interpolated alongside the position (colors, UVs, ...).
    pub attributes: Vec<Vec4>,
}

impl<P: ClipPosition> ClipVertex<P> {
    /// Create a vertex with attributes.
    pub fn new(position: P, attributes: Vec<Vec4>) -> Self {
        Self { position, attributes }
    }
}

/// Anything the clipper can walk: something with a plane distance that can
/// be split along an edge.
trait Clippable: Clone {
    fn distance(&self, plane: &Vec4) -> f32;
    fn split(&self, other: &Self, t: f32) -> Self;
}

impl<P: ClipPosition> Clippable for P {
    fn distance(&self, plane: &Vec4) -> f32 {
        plane.dot(&self.homogeneous())
    }

    fn split(&self, other: &Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

impl<P: ClipPosition> Clippable for ClipVertex<P> {
    fn distance(&self, plane: &Vec4) -> f32 {
        plane.dot(&self.position.homogeneous())
    }

    fn split(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(&other.position, t),
            attributes: self
                .attributes
                .iter()
                .zip(&other.attributes)
                .map(|(a, b)| lerp_vec4(a, b, t))
                .collect(),
        }
    }
}

/// Clip `verts_in` against one plane, appending the result to `verts_out`.
fn clip_against<V: Clippable>(plane: &Vec4, verts_in: &[V], verts_out: &mut Vec<V>) {
    let Some(mut v0) = verts_in.last() else {
        return;
    };
    let mut d0 = v0.distance(plane);

    for v1 in verts_in {
        let d1 = v1.distance(plane);
        if (d0 > 0.0 && d1 < 0.0) || (d0 < 0.0 && d1 > 0.0) {
            let t = -d0 / (d1 - d0);
            verts_out.push(v0.split(v1, t));
        }
        if d1 >= 0.0 {
            verts_out.push(v1.clone());
        }
        v0 = v1;
        d0 = d1;
    }
}

fn clip_all<V: Clippable>(polygon: &[V], planes: &[Plane3]) -> Vec<V> {
    if polygon.len() < 3 {
        return Vec::new();
    }

    let mut verts_in = polygon.to_vec();
    let mut verts_out = Vec::with_capacity(polygon.len() + planes.len());
    for (i, plane) in planes.iter().enumerate() {
        clip_against(&plane.abcd(), &verts_in, &mut verts_out);
        if verts_out.len() < 3 {
            trace!("polygon degenerated to {} vertices at clip plane {i}", verts_out.len());
            return Vec::new();
        }
        swap(&mut verts_in, &mut verts_out);
        verts_out.clear();
    }
    verts_in
}

/// Clip a convex polygon against every plane in `planes`, in order.
///
/// Returns the part of the polygon inside all planes. The result is empty as
/// soon as fewer than three vertices survive a plane, and for input with
/// fewer than three vertices. A polygon entirely inside all planes comes back
/// unchanged.
pub fn clip_polygon<P: ClipPosition>(polygon: &[P], planes: &[Plane3]) -> Vec<P> {
    clip_all(polygon, planes)
}

/// Clip a polygon whose vertices carry attributes.
///
/// New vertices interpolate attributes with the same parameter as the
/// position. Fails if the vertices do not all carry the same number of
/// attributes.
pub fn clip_vertices<P: ClipPosition>(
    vertices: &[ClipVertex<P>],
    planes: &[Plane3],
) -> Result<Vec<ClipVertex<P>>> {
    if let Some(first) = vertices.first() {
        let expected = first.attributes.len();
        if let Some((index, v)) = vertices
            .iter()
            .enumerate()
            .find(|(_, v)| v.attributes.len() != expected)
        {
            return Err(RasterError::AttributeMismatch {
                expected,
                got: v.attributes.len(),
                index,
            });
        }
    }
    Ok(clip_all(vertices, planes))
}
