//! Preorder walk over the partition, for drawing the tree.
//!
//! Each step yields a [`Partition`]: a stored point, the orientation of the line
//! through it, and the region that line cuts. Regions are clipped exactly as the
//! queries clip them, starting from [`KdTree::bounds`].

use crate::geometry::{Axis, Point, Rect};
use crate::kdtree::KdTree;

/// One node of the partition as seen by a renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Partition {
    /// Point stored at the node
    pub point: Point,
    /// Orientation of the splitting line through `point`
    pub axis: Axis,
    /// Region the node's subtree is confined to
    pub rect: Rect,
}

impl Partition {
    /// End points of the splitting line, clipped to `rect`
    pub fn split_line(&self) -> (Point, Point) {
        match self.axis {
            Axis::Vertical => (
                Point::new(self.point.x, self.rect.min_y),
                Point::new(self.point.x, self.rect.max_y),
            ),
            Axis::Horizontal => (
                Point::new(self.rect.min_x, self.point.y),
                Point::new(self.rect.max_x, self.point.y),
            ),
        }
    }
}

/// Lazy preorder iterator returned by [`KdTree::traverse`].
///
/// Within a node, the subtree of greater coordinates is visited before the other one.
#[derive(Clone, Debug)]
pub struct Traverse<'a> {
    tree: &'a KdTree,
    stack: Vec<(usize, Rect)>,
}

impl Iterator for Traverse<'_> {
    type Item = Partition;

    fn next(&mut self) -> Option<Partition> {
        let (id, rect) = self.stack.pop()?;
        let node = &self.tree.nodes[id];
        let (greater, not_greater) = rect.split(node.axis, node.point);
        if let Some(right) = node.right {
            self.stack.push((right, not_greater));
        }
        if let Some(left) = node.left {
            self.stack.push((left, greater));
        }
        Some(Partition { point: node.point, axis: node.axis, rect })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.tree.len()))
    }
}

impl KdTree {
    /// Walks the partition in preorder, starting at the root.
    ///
    /// Each call starts a fresh walk; the tree cannot change while one is alive.
    pub fn traverse(&self) -> Traverse<'_> {
        let mut stack = Vec::new();
        if let Some(root) = self.root() {
            stack.push((root, self.bounds()));
        }
        Traverse { tree: self, stack }
    }
}
