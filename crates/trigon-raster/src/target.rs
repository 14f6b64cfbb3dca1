//! Raster targets: anything with a pixel grid that can record coverage.

use crate::error::{RasterError, Result};
use serde::{Deserialize, Serialize};

/// A pixel-aligned rectangle `x..x + width` by `y..y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    /// Left column.
    pub x: u32,
    /// Top row.
    pub y: u32,
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl PixelRect {
    /// Create a rectangle from its top-left pixel and size.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// The rectangle covering the whole target.
    pub fn full<T: RasterTarget + ?Sized>(target: &T) -> Self {
        Self::new(0, 0, target.width(), target.height())
    }

    /// Check that the rectangle lies inside a `width` x `height` grid.
    pub(crate) fn check_within(&self, width: u32, height: u32) -> Result<()> {
        let fits = |start: u32, len: u32, max: u32| {
            start.checked_add(len).is_some_and(|end| end <= max)
        };
        if fits(self.x, self.width, width) && fits(self.y, self.height, height) {
            Ok(())
        } else {
            Err(RasterError::RectOutOfBounds {
                rect: *self,
                width,
                height,
            })
        }
    }
}

/// A pixel grid the rasterizers write coverage into.
pub trait RasterTarget {
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;
    /// Record that pixel `(x, y)` is covered.
    fn mark(&mut self, x: u32, y: u32);
}

/// A packed boolean coverage mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMask {
    width: u32,
    height: u32,
    bits: Vec<u64>,
}

impl PixelMask {
    /// Create an empty mask.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize * height as usize).div_ceil(64);
        Self {
            width,
            height,
            bits: vec![0; len],
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Whether `(x, y)` is covered. Pixels outside the mask are not.
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.index(x, y)
            .is_some_and(|i| self.bits[i / 64] & (1u64 << (i % 64)) != 0)
    }

    /// Number of covered pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Clear every pixel.
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// Covered pixels in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.get(x, y))
    }

    /// `true` if every pixel covered here is also covered in `other`.
    pub fn is_subset_of(&self, other: &PixelMask) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.bits.iter().zip(&other.bits).all(|(a, b)| a & !b == 0)
    }
}

impl RasterTarget for PixelMask {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn mark(&mut self, x: u32, y: u32) {
        if let Some(i) = self.index(x, y) {
            self.bits[i / 64] |= 1u64 << (i % 64);
        }
    }
}

/// Paints covered pixels of an RGBA image with a fixed color.
#[cfg(feature = "image")]
pub struct ImageTarget<'a> {
    image: &'a mut image::RgbaImage,
    color: image::Rgba<u8>,
}

#[cfg(feature = "image")]
impl<'a> ImageTarget<'a> {
    /// Wrap `image`, painting covered pixels with `color`.
    pub fn new(image: &'a mut image::RgbaImage, color: image::Rgba<u8>) -> Self {
        Self { image, color }
    }
}

#[cfg(feature = "image")]
impl RasterTarget for ImageTarget<'_> {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn mark(&mut self, x: u32, y: u32) {
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, self.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_mark_and_count() {
        let mut mask = PixelMask::new(10, 7);
        mask.mark(0, 0);
        mask.mark(9, 6);
        mask.mark(9, 6);
        mask.mark(10, 0);
        assert_eq!(mask.count(), 2);
        assert!(mask.get(9, 6));
        assert!(!mask.get(1, 0));
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![(0, 0), (9, 6)]);
        mask.clear();
        assert_eq!(mask.count(), 0);
    }

    #[test]
    fn test_mask_subset() {
        let mut a = PixelMask::new(8, 8);
        let mut b = PixelMask::new(8, 8);
        a.mark(3, 3);
        b.mark(3, 3);
        b.mark(4, 3);
        assert!(a.is_subset_of(&b));
        assert!(!b.is_subset_of(&a));
    }

    #[test]
    fn test_rect_bounds() {
        let mask = PixelMask::new(16, 16);
        assert!(PixelRect::full(&mask).check_within(16, 16).is_ok());
        assert!(PixelRect::new(8, 8, 8, 8).check_within(16, 16).is_ok());
        assert!(matches!(
            PixelRect::new(8, 8, 9, 8).check_within(16, 16),
            Err(RasterError::RectOutOfBounds { .. })
        ));
        assert!(PixelRect::new(u32::MAX, 0, 2, 1).check_within(16, 16).is_err());
    }

    #[cfg(feature = "image")]
    #[test]
    fn test_image_target_paints() {
        let mut img = image::RgbaImage::new(4, 4);
        let red = image::Rgba([255, 0, 0, 255]);
        let mut target = ImageTarget::new(&mut img, red);
        target.mark(2, 1);
        assert_eq!(*img.get_pixel(2, 1), red);
        assert_eq!(img.get_pixel(1, 2).0[3], 0);
    }
}
