//! Error types for geometric construction.

use thiserror::Error;

/// Errors raised for malformed caller input.
///
/// Degenerate geometry (zero-area triangles, parallel rays) is not an error;
/// routines report it through `None` or a dedicated result variant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// A polygon or vertex list is shorter than the operation requires.
    #[error("expected at least {expected} vertices, got {got}")]
    TooFewVertices {
        /// Minimum vertex count.
        expected: usize,
        /// Vertex count supplied.
        got: usize,
    },

    /// A radius must be strictly positive.
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    /// Two points that must differ (e.g. cone apex and base) coincide.
    #[error("degenerate axis: {0}")]
    DegenerateAxis(String),

    /// Box corners do not form a parallelepiped.
    #[error("box corners are inconsistent at corner {corner}")]
    InconsistentBox {
        /// Index of the first corner that violates the parallelepiped relation.
        corner: usize,
    },
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeomError>;
