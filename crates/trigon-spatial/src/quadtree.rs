//! Point quadtree with one item per leaf.

use crate::error::{Result, SpatialError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::mem;
use trigon_geom::Rect2;
use trigon_math::Point2;

/// Deepest subdivision that still leaves non-empty f32 quadrants for
/// reasonably sized bounds.
const MAX_SUPPORTED_DEPTH: usize = 32;

/// Quadtree settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadTreeSettings {
    /// Depth at which occupied leaves stop splitting. The root is depth 0.
    pub max_depth: usize,
}

impl Default for QuadTreeSettings {
    fn default() -> Self {
        Self { max_depth: 16 }
    }
}

impl QuadTreeSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(SpatialError::InvalidSettings(format!(
                "max_depth must be at most {MAX_SUPPORTED_DEPTH}, got {}",
                self.max_depth
            )));
        }
        Ok(())
    }
}

/// A quadtree node.
///
/// Children are ordered by quadrant index: bit 0 selects the upper x half,
/// bit 1 the upper y half (see [`Rect2::quadrant`]).
#[derive(Debug, Clone, PartialEq)]
pub enum QuadNode<T> {
    /// Leaf holding zero or one item.
    Leaf(Option<(Point2, T)>),
    /// Internal node with four children.
    Internal(Box<[QuadNode<T>; 4]>),
}

impl<T> QuadNode<T> {
    fn empty_children() -> Box<[QuadNode<T>; 4]> {
        Box::new(std::array::from_fn(|_| QuadNode::Leaf(None)))
    }

    fn depth(&self) -> usize {
        match self {
            QuadNode::Leaf(_) => 0,
            QuadNode::Internal(children) => {
                1 + children.iter().map(QuadNode::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Quadrant of `rect` containing `p`; points on the center lines go to the
/// upper half.
fn quadrant_index(rect: &Rect2, p: &Point2) -> usize {
    let c = rect.center();
    (p.x >= c.x) as usize | ((p.y >= c.y) as usize) << 1
}

/// A point quadtree over fixed bounds.
///
/// Mutation takes `&mut self`; share a tree across threads only behind a
/// lock.
#[derive(Debug, Clone)]
pub struct QuadTree<T> {
    bounds: Rect2,
    root: QuadNode<T>,
    settings: QuadTreeSettings,
    len: usize,
}

impl<T> QuadTree<T> {
    /// Create an empty tree covering `bounds`.
    pub fn new(bounds: Rect2, settings: QuadTreeSettings) -> Result<Self> {
        settings.validate()?;
        let finite = [bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y]
            .iter()
            .all(|v| v.is_finite());
        if !finite || bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(SpatialError::InvalidBounds(format!("{bounds:?}")));
        }
        Ok(Self {
            bounds,
            root: QuadNode::Leaf(None),
            settings,
            len: 0,
        })
    }

    /// Tree bounds.
    pub fn bounds(&self) -> &Rect2 {
        &self.bounds
    }

    /// Root node.
    pub fn root(&self) -> &QuadNode<T> {
        &self.root
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Depth of the deepest node (0 for a single leaf).
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Insert `data` at `pos`.
    ///
    /// An occupied leaf splits and pushes its item down. Inserting at a
    /// position already present replaces the data and returns the old value.
    pub fn insert(&mut self, pos: Point2, data: T) -> Result<Option<T>> {
        if !self.bounds.contains(&pos) {
            return Err(SpatialError::OutOfBounds { x: pos.x, y: pos.y });
        }
        let bounds = self.bounds;
        let max_depth = self.settings.max_depth;
        let previous = Self::insert_at(&mut self.root, &bounds, 0, max_depth, pos, data)?;
        if previous.is_none() {
            self.len += 1;
        }
        Ok(previous)
    }

    fn insert_at(
        node: &mut QuadNode<T>,
        rect: &Rect2,
        depth: usize,
        max_depth: usize,
        pos: Point2,
        data: T,
    ) -> Result<Option<T>> {
        match node {
            QuadNode::Internal(children) => {
                let i = quadrant_index(rect, &pos);
                let child_rect = rect.quadrant(i);
                Self::insert_at(&mut children[i], &child_rect, depth + 1, max_depth, pos, data)
            }
            QuadNode::Leaf(slot) => match slot {
                None => {
                    *slot = Some((pos, data));
                    Ok(None)
                }
                Some((p, d)) if *p == pos => Ok(Some(mem::replace(d, data))),
                Some(_) if depth >= max_depth => {
                    debug!("quadtree saturated at depth {depth} inserting ({}, {})", pos.x, pos.y);
                    Err(SpatialError::Saturated { depth })
                }
                Some(_) => {
                    let existing = slot.take();
                    let mut children = QuadNode::empty_children();
                    if let Some((p, d)) = existing {
                        children[quadrant_index(rect, &p)] = QuadNode::Leaf(Some((p, d)));
                    }
                    debug!("splitting quadtree leaf at depth {depth}");
                    *node = QuadNode::Internal(children);
                    Self::insert_at(node, rect, depth, max_depth, pos, data)
                }
            },
        }
    }

    /// Data stored exactly at `pos`.
    pub fn get(&self, pos: &Point2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        let mut node = &self.root;
        let mut rect = self.bounds;
        loop {
            match node {
                QuadNode::Leaf(Some((p, d))) if p == pos => return Some(d),
                QuadNode::Leaf(_) => return None,
                QuadNode::Internal(children) => {
                    let i = quadrant_index(&rect, pos);
                    node = &children[i];
                    rect = rect.quadrant(i);
                }
            }
        }
    }

    /// All items whose position lies inside `area` (boundary included).
    pub fn query(&self, area: &Rect2) -> Vec<(Point2, &T)> {
        let mut found = Vec::new();
        let mut stack = vec![(&self.root, self.bounds)];
        while let Some((node, rect)) = stack.pop() {
            if !rect.intersects(area) {
                continue;
            }
            match node {
                QuadNode::Leaf(Some((p, d))) if area.contains(p) => found.push((*p, d)),
                QuadNode::Leaf(_) => {}
                QuadNode::Internal(children) => {
                    for (i, child) in children.iter().enumerate() {
                        stack.push((child, rect.quadrant(i)));
                    }
                }
            }
        }
        found
    }

    /// Iterate over all stored items.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: vec![&self.root],
        }
    }
}

/// Depth-first iterator over quadtree items.
pub struct Iter<'a, T> {
    stack: Vec<&'a QuadNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a Point2, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                QuadNode::Leaf(Some((p, d))) => return Some((p, d)),
                QuadNode::Leaf(None) => {}
                QuadNode::Internal(children) => self.stack.extend(children.iter()),
            }
        }
        None
    }
}

impl<'a, T> IntoIterator for &'a QuadTree<T> {
    type Item = (&'a Point2, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn tree() -> QuadTree<&'static str> {
        QuadTree::new(
            Rect2::new(Point2::new(0.0, 0.0), Point2::new(4.0, 4.0)),
            QuadTreeSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_insert_and_get() {
        let mut t = tree();
        assert_eq!(t.insert(Point2::new(1.0, 1.0), "a").unwrap(), None);
        assert_eq!(t.depth(), 0);
        assert_eq!(t.insert(Point2::new(3.0, 3.0), "b").unwrap(), None);
        assert_eq!(t.depth(), 1);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get(&Point2::new(1.0, 1.0)), Some(&"a"));
        assert_eq!(t.get(&Point2::new(3.0, 3.0)), Some(&"b"));
        assert_eq!(t.get(&Point2::new(3.0, 1.0)), None);
    }

    #[test]
    fn test_split_keeps_existing_item() {
        let mut t = tree();
        t.insert(Point2::new(0.5, 0.5), "a").unwrap();
        t.insert(Point2::new(1.5, 1.5), "b").unwrap();
        // Both in the lower-left quadrant, separated one level further down
        assert_eq!(t.depth(), 2);
        assert_eq!(t.get(&Point2::new(0.5, 0.5)), Some(&"a"));
        assert_eq!(t.get(&Point2::new(1.5, 1.5)), Some(&"b"));
        match t.root() {
            QuadNode::Internal(children) => assert!(matches!(children[0], QuadNode::Internal(_))),
            QuadNode::Leaf(_) => panic!("root should have split"),
        }
    }

    #[test]
    fn test_duplicate_position_replaces() {
        let mut t = tree();
        t.insert(Point2::new(2.0, 2.0), "a").unwrap();
        assert_eq!(t.insert(Point2::new(2.0, 2.0), "b").unwrap(), Some("a"));
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(&Point2::new(2.0, 2.0)), Some(&"b"));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut t = tree();
        assert_eq!(
            t.insert(Point2::new(5.0, 1.0), "x"),
            Err(SpatialError::OutOfBounds { x: 5.0, y: 1.0 })
        );
        assert!(t.is_empty());
        // Max corner is inside
        assert!(t.insert(Point2::new(4.0, 4.0), "corner").is_ok());
    }

    #[test]
    fn test_saturated_at_depth_limit() {
        let mut t = QuadTree::new(
            Rect2::new(Point2::new(0.0, 0.0), Point2::new(4.0, 4.0)),
            QuadTreeSettings { max_depth: 1 },
        )
        .unwrap();
        t.insert(Point2::new(0.5, 0.5), 1).unwrap();
        assert_eq!(
            t.insert(Point2::new(1.0, 1.0), 2),
            Err(SpatialError::Saturated { depth: 1 })
        );
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(&Point2::new(0.5, 0.5)), Some(&1));
        t.insert(Point2::new(3.0, 3.0), 3).unwrap();
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_invalid_construction() {
        let flat = Rect2::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        assert!(matches!(
            QuadTree::<u8>::new(flat, QuadTreeSettings::default()),
            Err(SpatialError::InvalidBounds(_))
        ));
        let bounds = Rect2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        assert!(matches!(
            QuadTree::<u8>::new(bounds, QuadTreeSettings { max_depth: 64 }),
            Err(SpatialError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_query_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut t = QuadTree::new(
            Rect2::new(Point2::new(0.0, 0.0), Point2::new(100.0, 100.0)),
            QuadTreeSettings::default(),
        )
        .unwrap();
        let mut points = Vec::new();
        for i in 0..200 {
            let p = Point2::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0));
            if t.insert(p, i).unwrap().is_none() {
                points.push((p, i));
            }
        }
        assert_eq!(t.len(), points.len());
        assert_eq!(t.iter().count(), points.len());

        let area = Rect2::new(Point2::new(20.0, 30.0), Point2::new(55.0, 80.0));
        let mut found: Vec<i32> = t.query(&area).into_iter().map(|(_, d)| *d).collect();
        let mut expected: Vec<i32> = points
            .iter()
            .filter(|(p, _)| area.contains(p))
            .map(|(_, d)| *d)
            .collect();
        found.sort_unstable();
        expected.sort_unstable();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_settings_serde() {
        let json = serde_json::to_string(&QuadTreeSettings::default()).unwrap();
        assert_eq!(json, r#"{"max_depth":16}"#);
    }
}
