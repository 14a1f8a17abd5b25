//! 2-d tree: node arena, insertion and membership.
//!
//! Nodes live in a single `Vec` and refer to their children by index. The root
//! is always slot 0 and splits on [`Axis::Vertical`]; children always split on
//! the other axis than their parent. A point goes to the *left* child when its
//! coordinate on the node's axis is strictly greater than the node's, and to the
//! *right* child otherwise.

use tracing::trace;

use crate::error::{check_point, check_rect, Result};
use crate::geometry::{Axis, Point, Rect};

/// Arena slot of the root node
pub(crate) const ROOT: usize = 0;

/// Tree node: a stored point, its splitting axis and its two subtrees
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) point: Point,
    pub(crate) axis: Axis,
    /// Subtree of points strictly greater on `axis`
    pub(crate) left: Option<usize>,
    /// Subtree of points less than or equal on `axis`
    pub(crate) right: Option<usize>,
}

impl Node {
    fn new(point: Point, axis: Axis) -> Self {
        Node { point, axis, left: None, right: None }
    }

    /// Child slot a point with `p`'s coordinates descends into
    #[inline]
    pub(crate) fn goes_left(&self, p: Point) -> bool {
        p.coord(self.axis) > self.point.coord(self.axis)
    }
}

/// 2-d tree over points in the plane.
///
/// Supports insertion, exact membership, inclusive rectangle range search and
/// nearest-neighbor search. Shape depends only on insertion order; there is no
/// rebalancing and no deletion.
///
/// # Examples
/// ```
/// use kd2::prelude::*;
///
/// let mut tree = KdTree::new();
/// tree.insert(Point::new(0.2, 0.3)).unwrap();
/// tree.insert(Point::new(0.6, 0.8)).unwrap();
/// tree.insert(Point::new(0.6, 0.1)).unwrap();
///
/// assert!(tree.contains(Point::new(0.6, 0.8)).unwrap());
/// let nearest = tree.nearest_query(Point::new(0.55, 0.15)).unwrap();
/// assert_eq!(nearest, Some(Point::new(0.6, 0.1)));
/// ```
#[derive(Clone, Debug)]
pub struct KdTree {
    /// Node arena, root at slot 0
    pub(crate) nodes: Vec<Node>,
    /// Declared universe
    universe: Rect,
    /// Declared universe grown to include every stored point
    bounds: Rect,
}

impl KdTree {
    /// Creates an empty tree over the unit square
    pub fn new() -> Self {
        KdTree::with_capacity(0)
    }

    /// Creates an empty tree over the unit square with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        KdTree {
            nodes: Vec::with_capacity(capacity),
            universe: Rect::unit(),
            bounds: Rect::unit(),
        }
    }

    /// Creates an empty tree whose root region is `universe`.
    ///
    /// Points outside the universe are still accepted; the region grows to
    /// cover them.
    ///
    /// # Errors
    /// [`KdTreeError::InvalidArgument`](crate::KdTreeError::InvalidArgument) if
    /// `universe` has non-finite or inverted bounds.
    pub fn with_bounds(universe: Rect) -> Result<Self> {
        check_rect(&universe, "with_bounds")?;
        Ok(KdTree { nodes: Vec::new(), universe, bounds: universe })
    }

    /// Builds a tree by inserting `points` in order
    ///
    /// # Errors
    /// Fails on the first non-finite point; nothing is returned in that case.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let points = points.into_iter();
        let mut tree = KdTree::with_capacity(points.size_hint().0);
        for p in points {
            let _ = tree.insert(p)?;
        }
        Ok(tree)
    }

    /// Returns the number of distinct points stored
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The declared universe
    pub fn universe(&self) -> Rect {
        self.universe
    }

    /// Region implicitly covered by the root: the universe grown to every stored point
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Number of nodes on the longest root-to-leaf path, 0 when empty
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut deepest = 0;
        let mut stack = vec![(ROOT, 1_usize)];
        while let Some((id, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|c| (c, level + 1)));
            stack.extend(node.right.map(|c| (c, level + 1)));
        }
        deepest
    }

    /// Iterates over the stored points in insertion order
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.nodes.iter().map(|n| n.point)
    }

    /// Removes every point; the declared universe is kept
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.bounds = self.universe;
    }

    /// Inserts `p` unless an equal point is already stored.
    ///
    /// Returns `true` if the point was added, `false` if it was a duplicate.
    ///
    /// # Errors
    /// [`KdTreeError::InvalidArgument`](crate::KdTreeError::InvalidArgument) if
    /// `p` has a non-finite coordinate. The tree is left unchanged.
    pub fn insert(&mut self, p: Point) -> Result<bool> {
        check_point(p, "insert")?;

        if self.nodes.is_empty() {
            self.attach(p, Axis::Vertical);
            trace!(point = %p, "inserted root");
            return Ok(true);
        }

        // Equal points follow the same path, so one descent both checks
        // membership and finds the empty slot.
        let mut current = ROOT;
        loop {
            let node = self.nodes[current];
            if node.point == p {
                trace!(point = %p, "duplicate insert ignored");
                return Ok(false);
            }
            let left = node.goes_left(p);
            let next = if left { node.left } else { node.right };
            match next {
                Some(child) => current = child,
                None => {
                    let id = self.attach(p, node.axis.other());
                    let parent = &mut self.nodes[current];
                    if left {
                        parent.left = Some(id);
                    } else {
                        parent.right = Some(id);
                    }
                    trace!(point = %p, parent = %parent.point, left, "inserted");
                    return Ok(true);
                }
            }
        }
    }

    /// Returns whether a point equal to `p` is stored.
    ///
    /// # Errors
    /// [`KdTreeError::InvalidArgument`](crate::KdTreeError::InvalidArgument) if
    /// `p` has a non-finite coordinate.
    pub fn contains(&self, p: Point) -> Result<bool> {
        check_point(p, "contains")?;

        let mut current = self.root();
        while let Some(id) = current {
            let node = &self.nodes[id];
            if node.point == p {
                return Ok(true);
            }
            current = if node.goes_left(p) { node.left } else { node.right };
        }
        Ok(false)
    }

    /// Root slot, `None` when empty
    #[inline]
    pub(crate) fn root(&self) -> Option<usize> {
        if self.nodes.is_empty() { None } else { Some(ROOT) }
    }

    /// Pushes a childless node and returns its slot
    fn attach(&mut self, p: Point, axis: Axis) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node::new(p, axis));
        self.bounds.expand_to(p);
        id
    }
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}
