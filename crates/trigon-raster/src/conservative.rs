//! Conservative (outer) rasterization.
//!
//! Each edge is pushed outward by half a tile along both axes before the
//! inside test, following Akenine-Möller & Aila, "Conservative and Tiled
//! Rasterization Using a Modified Triangle Set-Up" (2005). A tile whose
//! square overlaps the triangle interior is always covered, so the result is
//! a superset of [`crate::standard`] coverage.

use crate::error::{RasterError, Result};
use crate::standard::{edges, pixel_bounds, pixel_center};
use crate::target::{PixelRect, RasterTarget};
use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use trigon_geom::{signed_area, Tri2};
use trigon_math::{Point2, Vec2};

/// Settings for the conservative rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConservativeSettings {
    /// Edge length of a coverage tile in pixels.
    pub tile_size: f32,
}

impl Default for ConservativeSettings {
    fn default() -> Self {
        Self { tile_size: 1.0 }
    }
}

impl ConservativeSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(RasterError::InvalidSettings(format!(
                "tile_size must be positive and finite, got {}",
                self.tile_size
            )));
        }
        Ok(())
    }

    fn half_tile(&self) -> f32 {
        self.tile_size * 0.5
    }
}

/// Edge function with the origin moved by half a tile against the inward
/// normal `n` on each axis.
///
/// Evaluated as `n · (p - origin) + half_tile · (|n.x| + |n.y|)`, which
/// is the same as shifting the origin to `origin - half_tile · sign(n)`.
#[inline]
pub fn edge_test(n: &Vec2, origin: &Point2, p: &Point2, half_tile: f32) -> f32 {
    n.dot(&(p - origin)) + half_tile * (n.x.abs() + n.y.abs())
}

/// Edge normals oriented toward the triangle interior.
fn inward_edges(tri: &Tri2) -> [(Vec2, Point2); 3] {
    let mut e = edges(tri);
    if signed_area(tri) < 0.0 {
        for (n, _) in e.iter_mut() {
            *n = -*n;
        }
    }
    e
}

fn covers(edges: &[(Vec2, Point2); 3], p: &Point2, half_tile: f32) -> bool {
    edges.iter().all(|(n, o)| edge_test(n, o, p, half_tile) > 0.0)
}

/// Test whether the tile centered on `p` overlaps `tri`.
pub fn is_inside(tri: &Tri2, p: &Point2, settings: &ConservativeSettings) -> Result<bool> {
    settings.validate()?;
    Ok(covers(&inward_edges(tri), p, settings.half_tile()))
}

/// Clamp the pixel span `lo..hi` to `start..start + len`.
fn clamp_span(lo: i64, hi: i64, start: u32, len: u32) -> Range<u32> {
    let s = lo.max(i64::from(start));
    let e = hi.min(i64::from(start) + i64::from(len));
    if s >= e {
        return 0..0;
    }
    s as u32..e as u32
}

/// Mark every pixel of `rect` whose tile overlaps `tri`.
///
/// Only pixels inside the triangle's bounding box grown by half a tile are
/// tested. Past an acute vertex the dilated edges still overlap, so the
/// edge functions alone would cover tiles beyond the triangle. Returns the
/// number of pixels marked; the set matches [`pixels_inside_triangle`]
/// restricted to `rect`.
pub fn rasterize<T: RasterTarget + ?Sized>(
    tri: &Tri2,
    rect: &PixelRect,
    target: &mut T,
    settings: &ConservativeSettings,
) -> Result<usize> {
    settings.validate()?;
    rect.check_within(target.width(), target.height())?;

    let edges = inward_edges(tri);
    let half_tile = settings.half_tile();
    let (x0, y0, x1, y1) = pixel_bounds(tri, half_tile);
    let mut covered = 0;
    for y in clamp_span(y0, y1, rect.y, rect.height) {
        for x in clamp_span(x0, x1, rect.x, rect.width) {
            if covers(&edges, &pixel_center(x as f32, y as f32), half_tile) {
                target.mark(x, y);
                covered += 1;
            }
        }
    }

    debug!(
        "conservative raster pass (tile {}): {covered} of {} pixels covered",
        settings.tile_size,
        rect.width as u64 * rect.height as u64
    );
    Ok(covered)
}

/// Centers of all pixels whose tile overlaps `tri`.
///
/// Walks the triangle's bounding box grown by half a tile, in row-major
/// order.
pub fn pixels_inside_triangle(tri: &Tri2, settings: &ConservativeSettings) -> Result<Vec<Point2>> {
    settings.validate()?;
    let edges = inward_edges(tri);
    let half_tile = settings.half_tile();
    let (x0, y0, x1, y1) = pixel_bounds(tri, half_tile);
    let mut pixels = Vec::new();
    for y in y0..y1 {
        for x in x0..x1 {
            let center = pixel_center(x as f32, y as f32);
            if covers(&edges, &center, half_tile) {
                pixels.push(center);
            }
        }
    }
    Ok(pixels)
}
