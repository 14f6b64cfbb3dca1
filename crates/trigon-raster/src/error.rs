//! Error types for rasterization and clipping.

use crate::target::PixelRect;
use thiserror::Error;

/// Errors from raster and clip operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RasterError {
    /// The pixel rectangle to walk extends past the target.
    #[error("rect {rect:?} exceeds {width}x{height} target")]
    RectOutOfBounds {
        /// Requested rectangle.
        rect: PixelRect,
        /// Target width.
        width: u32,
        /// Target height.
        height: u32,
    },

    /// Invalid rasterizer settings.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// A clip vertex carries a different number of attributes than the first.
    #[error("vertex {index} has {got} attributes, expected {expected}")]
    AttributeMismatch {
        /// Attribute count of the first vertex.
        expected: usize,
        /// Attribute count of the offending vertex.
        got: usize,
        /// Index of the offending vertex.
        index: usize,
    },
}

/// Result type for raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;
