//! Error types for spatial indexing.

use thiserror::Error;

/// Errors from quadtree construction and insertion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpatialError {
    /// The point lies outside the tree bounds.
    #[error("point ({x}, {y}) is outside the tree bounds")]
    OutOfBounds {
        /// X coordinate of the rejected point.
        x: f32,
        /// Y coordinate of the rejected point.
        y: f32,
    },

    /// The leaf for this point is occupied and already at the depth limit.
    #[error("quadtree saturated at depth {depth}")]
    Saturated {
        /// Depth of the occupied leaf.
        depth: usize,
    },

    /// The tree bounds are empty or not finite.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    /// Invalid tree settings.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type for spatial operations.
pub type Result<T> = std::result::Result<T, SpatialError>;
