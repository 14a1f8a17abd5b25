#[cfg(test)]
mod integration_tests {
    use crate::prelude::*;

    #[test]
    fn test_three_point_walkthrough() {
        let mut tree = KdTree::new();
        assert!(tree.is_empty());

        tree.insert(Point::new(0.2, 0.3)).unwrap(); // root, vertical
        tree.insert(Point::new(0.6, 0.8)).unwrap(); // x greater: left of root, horizontal
        tree.insert(Point::new(0.6, 0.1)).unwrap(); // left of root, then y not greater: right, vertical
        assert_eq!(tree.len(), 3);

        let axes: Vec<(Point, Axis)> = tree.traverse().map(|p| (p.point, p.axis)).collect();
        assert_eq!(
            axes,
            vec![
                (Point::new(0.2, 0.3), Axis::Vertical),
                (Point::new(0.6, 0.8), Axis::Horizontal),
                (Point::new(0.6, 0.1), Axis::Vertical),
            ]
        );

        let mut found = tree.range_query(&Rect::new(0.0, 0.0, 1.0, 0.5)).unwrap();
        found.sort_by(|a, b| a.x.total_cmp(&b.x));
        assert_eq!(found, vec![Point::new(0.2, 0.3), Point::new(0.6, 0.1)]);

        assert_eq!(
            tree.nearest_query(Point::new(0.55, 0.15)).unwrap(),
            Some(Point::new(0.6, 0.1))
        );

        // Re-inserting changes nothing
        tree.insert(Point::new(0.6, 0.8)).unwrap();
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_tree_and_point_set_share_errors() {
        let mut tree = KdTree::new();
        let mut set = PointSet::new();
        let bad = Point::new(f64::NAN, f64::NAN);

        let from_tree = tree.insert(bad).unwrap_err();
        let from_set = set.insert(bad).unwrap_err();
        assert_eq!(from_tree, from_set);
        assert!(matches!(from_tree, KdTreeError::InvalidArgument(_)));
    }
}
