//! Geometric queries on [`KdTree`]: rectangle range search and nearest neighbor.
//!
//! Both searches walk the tree with an explicit stack of `(node, region)` pairs,
//! where `region` is the rectangle the node's subtree is confined to. The root
//! region is [`KdTree::bounds`]; each child region is the parent region clipped
//! along the parent's splitting line. A subtree is skipped when its region
//! cannot contribute to the answer.

use tracing::debug;

use crate::error::{check_point, check_rect, Result};
use crate::geometry::{Point, Rect};
use crate::kdtree::KdTree;

impl KdTree {
    /// Returns every stored point inside `rect` (bounds inclusive).
    ///
    /// The order of the returned points is unspecified.
    ///
    /// # Errors
    /// [`KdTreeError::InvalidArgument`](crate::KdTreeError::InvalidArgument) if
    /// `rect` has non-finite or inverted bounds.
    pub fn range_query(&self, rect: &Rect) -> Result<Vec<Point>> {
        let mut results = Vec::new();
        self.query_range(rect, &mut results)?;
        Ok(results)
    }

    /// Same as [`range_query`](Self::range_query), writing into a reusable buffer.
    ///
    /// `results` is cleared first.
    ///
    /// # Errors
    /// [`KdTreeError::InvalidArgument`](crate::KdTreeError::InvalidArgument) if
    /// `rect` has non-finite or inverted bounds; `results` is left untouched.
    pub fn query_range(&self, rect: &Rect, results: &mut Vec<Point>) -> Result<()> {
        check_rect(rect, "range_query")?;
        results.clear();

        let Some(root) = self.root() else {
            return Ok(());
        };

        let mut visited = 0_usize;
        let mut stack = vec![(root, self.bounds())];
        while let Some((id, region)) = stack.pop() {
            visited += 1;
            let node = &self.nodes[id];
            if rect.contains(node.point) {
                results.push(node.point);
            }

            let (greater, not_greater) = region.split(node.axis, node.point);
            if let Some(right) = node.right {
                if not_greater.intersects(rect) {
                    stack.push((right, not_greater));
                }
            }
            if let Some(left) = node.left {
                if greater.intersects(rect) {
                    stack.push((left, greater));
                }
            }
        }

        debug!(%rect, found = results.len(), visited, "range query");
        Ok(())
    }

    /// Returns the stored point closest to `target`, or `None` on an empty tree.
    ///
    /// Distances are compared squared. Among equidistant points, whichever is
    /// reached first wins.
    ///
    /// # Errors
    /// [`KdTreeError::InvalidArgument`](crate::KdTreeError::InvalidArgument) if
    /// `target` has a non-finite coordinate.
    pub fn nearest_query(&self, target: Point) -> Result<Option<Point>> {
        check_point(target, "nearest_query")?;

        let Some(root) = self.root() else {
            return Ok(None);
        };

        let mut best = self.nodes[root].point;
        let mut best_dist = f64::INFINITY;
        let mut visited = 0_usize;

        let mut stack = vec![(root, self.bounds())];
        while let Some((id, region)) = stack.pop() {
            // Re-checked on pop: `best_dist` may have shrunk since the push.
            if region.distance_squared_to(target) > best_dist {
                continue;
            }
            visited += 1;

            let node = &self.nodes[id];
            let dist = node.point.distance_squared_to(target);
            if dist < best_dist {
                best = node.point;
                best_dist = dist;
            }

            let (greater, not_greater) = region.split(node.axis, node.point);
            let left = node.left.map(|c| (c, greater, greater.distance_squared_to(target)));
            let right = node.right.map(|c| (c, not_greater, not_greater.distance_squared_to(target)));

            // Nearer child is pushed last so it is explored first.
            let (near, far) = match (left, right) {
                (Some(l), Some(r)) if r.2 < l.2 => (Some(r), Some(l)),
                pair => pair,
            };
            for (child, child_region, child_dist) in [far, near].into_iter().flatten() {
                if child_dist <= best_dist {
                    stack.push((child, child_region));
                }
            }
        }

        debug!(%target, nearest = %best, dist_sq = best_dist, visited, "nearest query");
        Ok(Some(best))
    }
}
