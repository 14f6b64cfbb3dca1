//! Point-sampled triangle rasterization with edge functions.
//!
//! A pixel `(x, y)` is sampled at its center `(x + 0.5, y + 0.5)` and is
//! covered when the sample lies strictly on the same side of all three
//! edges. Both windings are accepted; samples exactly on an edge are not
//! covered.

use crate::error::Result;
use crate::target::{PixelRect, RasterTarget};
use log::debug;
use trigon_geom::Tri2;
use trigon_math::{Point2, Vec2};

/// Edge function `n · (p - origin)`.
#[inline]
pub fn edge_test(n: &Vec2, origin: &Point2, p: &Point2) -> f32 {
    n.dot(&(p - origin))
}

/// Left-hand normals and origins of the edges `t[i] → t[(i + 1) % 3]`.
///
/// With these normals the edge function equals the orientation of the
/// sample against the directed edge.
pub(crate) fn edges(tri: &Tri2) -> [(Vec2, Point2); 3] {
    std::array::from_fn(|i| {
        let a = tri[i];
        let e = tri[(i + 1) % 3] - a;
        (Vec2::new(-e.y, e.x), a)
    })
}

/// Center of pixel `(x, y)`.
#[inline]
pub fn pixel_center(x: f32, y: f32) -> Point2 {
    Point2::new(x + 0.5, y + 0.5)
}

/// Strict inside test against precomputed edges.
fn covers(edges: &[(Vec2, Point2); 3], p: &Point2) -> bool {
    let [e0, e1, e2] = edges.map(|(n, o)| edge_test(&n, &o, p));
    (e0 > 0.0 && e1 > 0.0 && e2 > 0.0) || (e0 < 0.0 && e1 < 0.0 && e2 < 0.0)
}

/// Test whether the point `p` is strictly inside `tri`.
pub fn is_inside(tri: &Tri2, p: &Point2) -> bool {
    covers(&edges(tri), p)
}

/// Mark every pixel of `rect` whose center is inside `tri`.
///
/// Returns the number of pixels marked. Fails if `rect` does not fit in the
/// target.
pub fn rasterize<T: RasterTarget + ?Sized>(
    tri: &Tri2,
    rect: &PixelRect,
    target: &mut T,
) -> Result<usize> {
    rect.check_within(target.width(), target.height())?;

    let edges = edges(tri);
    let mut covered = 0;
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            if covers(&edges, &pixel_center(x as f32, y as f32)) {
                target.mark(x, y);
                covered += 1;
            }
        }
    }

    debug!(
        "standard raster pass: {covered} of {} pixels covered",
        rect.width as u64 * rect.height as u64
    );
    Ok(covered)
}

/// Integer pixel range `floor(min)..ceil(max)` of the triangle's bounding box
/// grown by `pad` on every side.
pub(crate) fn pixel_bounds(tri: &Tri2, pad: f32) -> (i64, i64, i64, i64) {
    let min_x = tri.iter().map(|p| p.x).fold(f32::INFINITY, f32::min) - pad;
    let min_y = tri.iter().map(|p| p.y).fold(f32::INFINITY, f32::min) - pad;
    let max_x = tri.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max) + pad;
    let max_y = tri.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max) + pad;
    (
        min_x.floor() as i64,
        min_y.floor() as i64,
        max_x.ceil() as i64,
        max_y.ceil() as i64,
    )
}

/// Centers of all pixels covered by `tri`, walking its own bounding box.
///
/// Works in unbounded pixel space, so negative coordinates are allowed.
pub fn pixels_inside_triangle(tri: &Tri2) -> Vec<Point2> {
    let edges = edges(tri);
    let (x0, y0, x1, y1) = pixel_bounds(tri, 0.0);
    let mut pixels = Vec::new();
    for y in y0..y1 {
        for x in x0..x1 {
            let center = pixel_center(x as f32, y as f32);
            if covers(&edges, &center) {
                pixels.push(center);
            }
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RasterError;
    use crate::target::PixelMask;

    fn right_triangle() -> Tri2 {
        [Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), Point2::new(0.0, 4.0)]
    }

    #[test]
    fn test_pixels_inside_right_triangle() {
        let pixels = pixels_inside_triangle(&right_triangle());
        assert!(pixels.contains(&Point2::new(1.5, 1.5)));
        assert!(!pixels.contains(&Point2::new(3.5, 3.5)));
        // Centers with x + y == 4 lie on the hypotenuse and are excluded
        assert!(!pixels.contains(&Point2::new(1.5, 2.5)));
        assert_eq!(pixels.len(), 6);
        assert!(pixels.iter().all(|p| p.x > 0.0 && p.x < 4.0 && p.y > 0.0 && p.y < 4.0));
    }

    #[test]
    fn test_winding_does_not_matter() {
        let t = right_triangle();
        let cw = [t[0], t[2], t[1]];
        assert_eq!(pixels_inside_triangle(&t), pixels_inside_triangle(&cw));
    }

    #[test]
    fn test_rasterize_into_mask() {
        let mut mask = PixelMask::new(8, 8);
        let count = rasterize(&right_triangle(), &PixelRect::full(&mask), &mut mask).unwrap();
        assert_eq!(count, 6);
        assert_eq!(mask.count(), 6);
        assert!(mask.get(1, 1));
        assert!(!mask.get(3, 3));
    }

    #[test]
    fn test_rasterize_partial_rect() {
        let mut mask = PixelMask::new(8, 8);
        let count = rasterize(&right_triangle(), &PixelRect::new(0, 0, 1, 8), &mut mask).unwrap();
        assert_eq!(count, 3);
        assert!(mask.iter().all(|(x, _)| x == 0));
    }

    #[test]
    fn test_rasterize_rect_out_of_bounds() {
        let mut mask = PixelMask::new(4, 4);
        let err = rasterize(&right_triangle(), &PixelRect::new(0, 0, 5, 4), &mut mask).unwrap_err();
        assert!(matches!(err, RasterError::RectOutOfBounds { width: 4, height: 4, .. }));
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn test_negative_coordinates() {
        let tri = [Point2::new(-4.0, -4.0), Point2::new(0.0, -4.0), Point2::new(-4.0, 0.0)];
        let pixels = pixels_inside_triangle(&tri);
        assert_eq!(pixels.len(), 6);
        assert!(pixels.contains(&Point2::new(-2.5, -2.5)));
    }

    #[test]
    fn test_degenerate_triangle_covers_nothing() {
        let tri = [Point2::new(0.0, 0.0), Point2::new(2.0, 2.0), Point2::new(4.0, 4.0)];
        assert!(pixels_inside_triangle(&tri).is_empty());
    }
}
