#![warn(missing_docs)]

//! Triangle rasterization and polygon clipping for the trigon kernel.
//!
//! # Architecture
//!
//! - [`standard`] - point-sampled coverage at pixel centers
//! - [`conservative`] - dilated coverage, a superset of [`standard`]
//! - [`clip`] - Sutherland-Hodgman clipping against plane sets
//! - [`target`] - the [`RasterTarget`] trait and [`PixelMask`]
//!
//! # Example
//!
//! ```
//! use trigon_math::Point2;
//! use trigon_raster::{standard, PixelMask, PixelRect};
//!
//! let tri = [Point2::new(0.0, 0.0), Point2::new(4.0, 0.0), Point2::new(0.0, 4.0)];
//! let mut mask = PixelMask::new(8, 8);
//! let covered = standard::rasterize(&tri, &PixelRect::full(&mask), &mut mask).unwrap();
//! assert_eq!(covered, 6);
//! ```

pub mod clip;
pub mod conservative;
pub mod error;
pub mod standard;
pub mod target;

pub use clip::{clip_polygon, clip_vertices, ClipPosition, ClipVertex};
pub use conservative::ConservativeSettings;
pub use error::{RasterError, Result};
#[cfg(feature = "image")]
pub use target::ImageTarget;
pub use target::{PixelMask, PixelRect, RasterTarget};
