//! Axis-aligned boxes in 4 dimensions with recursive half-subdivision.
//!
//! Used for adaptive search over 4D domains (light-field coordinates,
//! time plus 3D space). Subdivision never mutates: each call builds new
//! child boxes.

use serde::{Deserialize, Serialize};
use trigon_math::{Vec4, Vec4i};

/// Axis-aligned 4D box given by `origin` and extent `delta`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Box4f {
    /// Minimum corner.
    pub origin: Vec4,
    /// Extent along each dimension.
    pub delta: Vec4,
}

impl Box4f {
    /// Create a box from its minimum corner and extent.
    pub fn new(origin: Vec4, delta: Vec4) -> Self {
        Self { origin, delta }
    }

    /// Maximum corner `origin + delta`.
    pub fn max(&self) -> Vec4 {
        self.origin + self.delta
    }

    /// Center point.
    pub fn center(&self) -> Vec4 {
        self.origin + self.delta * 0.5
    }

    /// Test if `p` lies inside the box (boundary included).
    pub fn contains(&self, p: &Vec4) -> bool {
        (0..4).all(|i| p[i] >= self.origin[i] && p[i] <= self.origin[i] + self.delta[i])
    }

    /// The 16 hypercube vertices; bit `i` of the index selects the upper
    /// bound in dimension `i`.
    pub fn corners(&self) -> [Vec4; 16] {
        std::array::from_fn(|mask| {
            let mut c = self.origin;
            for dim in 0..4 {
                if mask & (1 << dim) != 0 {
                    c[dim] += self.delta[dim];
                }
            }
            c
        })
    }

    /// Split every dividable dimension in half.
    ///
    /// A dimension is dividable while its half extent stays above
    /// `min_deltas`. Each of the 16 bitmasks selects the lower or upper half
    /// per dimension; masks that select the upper half of a non-dividable
    /// dimension produce no child, so a box with `k` dividable dimensions
    /// yields `2^k` children (1 when nothing can be split).
    pub fn subdivide_half(&self, min_deltas: &Vec4) -> Vec<Box4f> {
        let half = self.delta * 0.5;
        let dividable: [bool; 4] = std::array::from_fn(|dim| half[dim] > min_deltas[dim]);

        let mut children = Vec::with_capacity(16);
        for mask in 0..16usize {
            let mut child = *self;
            let mut keep = true;
            for dim in 0..4 {
                let upper = mask & (1 << dim) != 0;
                if dividable[dim] {
                    child.delta[dim] = half[dim];
                    if upper {
                        child.origin[dim] += half[dim];
                    }
                } else if upper {
                    keep = false;
                    break;
                }
            }
            if keep {
                children.push(child);
            }
        }
        children
    }
}

/// Integer variant of [`Box4f`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Box4i {
    /// Minimum corner.
    pub origin: Vec4i,
    /// Extent along each dimension.
    pub delta: Vec4i,
}

impl Box4i {
    /// Create a box from its minimum corner and extent.
    pub fn new(origin: Vec4i, delta: Vec4i) -> Self {
        Self { origin, delta }
    }

    /// Number of integer cells covered.
    pub fn volume(&self) -> i64 {
        self.delta.iter().map(|&d| d as i64).product()
    }

    /// Test if the cell `p` lies in `origin..origin + delta`.
    pub fn contains(&self, p: &Vec4i) -> bool {
        (0..4).all(|i| p[i] >= self.origin[i] && p[i] < self.origin[i] + self.delta[i])
    }

    /// Split every dimension whose half extent is still nonzero.
    ///
    /// Odd extents split as `d / 2` (lower child) and `d - d / 2` (upper
    /// child), so the children tile the parent exactly.
    pub fn subdivide_half(&self) -> Vec<Box4i> {
        let half = self.delta / 2;
        let dividable: [bool; 4] = std::array::from_fn(|dim| half[dim] != 0);

        let mut children = Vec::with_capacity(16);
        for mask in 0..16usize {
            let mut child = *self;
            let mut keep = true;
            for dim in 0..4 {
                let upper = mask & (1 << dim) != 0;
                if dividable[dim] {
                    if upper {
                        child.origin[dim] += half[dim];
                        child.delta[dim] -= half[dim];
                    } else {
                        child.delta[dim] = half[dim];
                    }
                } else if upper {
                    keep = false;
                    break;
                }
            }
            if keep {
                children.push(child);
            }
        }
        children
    }
}
