//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use kd2::prelude::*;
//! ```

pub use crate::{Axis, KdTree, KdTreeError, Partition, Point, PointSet, Rect, Traverse};
