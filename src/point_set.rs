//! Brute-force point container.
//!
//! Every operation is a linear scan. Useful as a reference answer when checking
//! the tree, and as a baseline in benchmarks.

use crate::error::{check_point, check_rect, Result};
use crate::geometry::{Point, Rect};

/// Set of distinct points answering the same queries as [`KdTree`](crate::KdTree)
/// by linear scan.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Creates an empty set
    pub fn new() -> Self {
        PointSet { points: Vec::new() }
    }

    /// Returns the number of distinct points stored
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the stored points in insertion order
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Inserts `p` unless an equal point is already stored
    ///
    /// # Errors
    /// `InvalidArgument` if `p` has a non-finite coordinate.
    pub fn insert(&mut self, p: Point) -> Result<bool> {
        check_point(p, "insert")?;
        if self.points.contains(&p) {
            return Ok(false);
        }
        self.points.push(p);
        Ok(true)
    }

    /// Returns whether a point equal to `p` is stored
    ///
    /// # Errors
    /// `InvalidArgument` if `p` has a non-finite coordinate.
    pub fn contains(&self, p: Point) -> Result<bool> {
        check_point(p, "contains")?;
        Ok(self.points.contains(&p))
    }

    /// Returns every stored point inside `rect`, in insertion order
    ///
    /// # Errors
    /// `InvalidArgument` if `rect` has non-finite or inverted bounds.
    pub fn range_query(&self, rect: &Rect) -> Result<Vec<Point>> {
        check_rect(rect, "range_query")?;
        Ok(self.points.iter().copied().filter(|&p| rect.contains(p)).collect())
    }

    /// Returns the first stored point at minimum squared distance from `target`
    ///
    /// # Errors
    /// `InvalidArgument` if `target` has a non-finite coordinate.
    pub fn nearest_query(&self, target: Point) -> Result<Option<Point>> {
        check_point(target, "nearest_query")?;
        let mut points = self.points.iter().copied();
        let Some(first) = points.next() else {
            return Ok(None);
        };
        // Seeded from a stored point so overflowing distances still yield one
        let mut nearest = first;
        let mut best = first.distance_squared_to(target);
        for p in points {
            let d = p.distance_squared_to(target);
            if d < best {
                best = d;
                nearest = p;
            }
        }
        Ok(Some(nearest))
    }
}

impl FromIterator<Point> for PointSet {
    /// Collects finite points, skipping duplicates and non-finite ones
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = PointSet::new();
        for p in iter {
            if p.is_finite() && !set.points.contains(&p) {
                set.points.push(p);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_ignores_duplicates() {
        let mut set = PointSet::new();
        assert!(set.insert(Point::new(0.5, 0.5)).unwrap());
        assert!(!set.insert(Point::new(0.5, 0.5)).unwrap());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_range_and_nearest() {
        let set: PointSet = [(0.2, 0.3), (0.6, 0.8), (0.6, 0.1)]
            .into_iter()
            .map(Point::from)
            .collect();
        let found = set.range_query(&Rect::new(0.0, 0.0, 1.0, 0.5)).unwrap();
        assert_eq!(found, vec![Point::new(0.2, 0.3), Point::new(0.6, 0.1)]);
        assert_eq!(
            set.nearest_query(Point::new(0.55, 0.15)).unwrap(),
            Some(Point::new(0.6, 0.1))
        );
    }

    #[test]
    fn test_nearest_with_overflowing_distances() {
        let set: PointSet = [(1e200, 0.0), (-1e200, 1e200)].into_iter().map(Point::from).collect();
        let nearest = set.nearest_query(Point::new(0.0, 0.0)).unwrap();
        assert_eq!(nearest, Some(Point::new(1e200, 0.0)), "Non-empty set must return a point");
    }

    #[test]
    fn test_empty_set_queries() {
        let set = PointSet::new();
        assert!(set.is_empty());
        assert_eq!(set.nearest_query(Point::new(0.5, 0.5)).unwrap(), None);
        assert!(set.range_query(&Rect::unit()).unwrap().is_empty());
    }
}
