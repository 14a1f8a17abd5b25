//! # kd2 - 2-d Tree Spatial Index
//!
//! A Rust library providing a 2-d tree (a k-d tree specialised to the plane)
//! for membership, rectangle range and nearest-neighbor queries over points.
//!
//! ## Features
//!
//! - **Incremental**: points are inserted one at a time, no build step
//! - **Range Queries**: all points inside an axis-aligned rectangle, bounds inclusive
//! - **Nearest Neighbor**: branch-and-bound search on squared distance
//! - **Partition Walk**: preorder `(point, axis, region)` stream for drawing the tree
//!
//! ## Quick Start
//!
//! ```rust
//! use kd2::prelude::*;
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point::new(0.2, 0.3)).unwrap();
//! tree.insert(Point::new(0.6, 0.8)).unwrap();
//! tree.insert(Point::new(0.6, 0.1)).unwrap();
//! tree.insert(Point::new(0.6, 0.1)).unwrap(); // duplicate, ignored
//! assert_eq!(tree.len(), 3);
//!
//! // Points inside [0, 1] x [0, 0.5]
//! let mut found = tree.range_query(&Rect::new(0.0, 0.0, 1.0, 0.5)).unwrap();
//! found.sort_by(|a, b| a.x.total_cmp(&b.x));
//! assert_eq!(found, vec![Point::new(0.2, 0.3), Point::new(0.6, 0.1)]);
//!
//! // Closest stored point
//! let nearest = tree.nearest_query(Point::new(0.55, 0.15)).unwrap();
//! assert_eq!(nearest, Some(Point::new(0.6, 0.1)));
//! ```
//!
//! ## How It Works
//!
//! Every node stores one point and splits the plane with a line through it:
//! vertical at even depths, horizontal at odd depths. Points strictly greater on
//! the node's axis go left, the rest go right. A node's subtree is confined to a
//! rectangle obtained by clipping the root region along each ancestor's line;
//! range and nearest queries skip subtrees whose rectangle cannot contribute.
//!
//! There is no rebalancing, so the shape follows insertion order. Sorted input
//! degenerates into a list.
//!
//! Queries take `&self` and inserts take `&mut self`; sharing a tree across
//! threads needs external synchronisation such as an `RwLock`.

pub mod error;
pub mod geometry;
pub mod kdtree;
pub mod point_set;
pub mod prelude;
mod queries;
pub mod traverse;

mod integration_test;

pub use error::{KdTreeError, Result};
pub use geometry::{Axis, Point, Rect};
pub use kdtree::KdTree;
pub use point_set::PointSet;
pub use traverse::{Partition, Traverse};
