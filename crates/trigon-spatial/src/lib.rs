#![warn(missing_docs)]

//! Spatial indexing for the trigon kernel.
//!
//! A point quadtree storing at most one item per leaf. Nodes are a tagged
//! variant, so a node holds either an item or four children, never both.

pub mod error;
pub mod quadtree;

pub use error::{Result, SpatialError};
pub use quadtree::{Iter, QuadNode, QuadTree, QuadTreeSettings};
