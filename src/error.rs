//! Error type returned by tree and point-set operations.

use thiserror::Error;

/// Errors raised by [`KdTree`](crate::KdTree) and [`PointSet`](crate::PointSet)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum KdTreeError {
    /// A point or rectangle that cannot be placed in the plane: a non-finite
    /// coordinate, or a rectangle with min > max on some axis.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, KdTreeError>;

/// Rejects points with a NaN or infinite coordinate
pub(crate) fn check_point(p: crate::Point, operation: &str) -> Result<()> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(KdTreeError::InvalidArgument(format!(
            "non-finite point {p} passed to {operation}()"
        )))
    }
}

/// Rejects rectangles with non-finite or inverted bounds
pub(crate) fn check_rect(rect: &crate::Rect, operation: &str) -> Result<()> {
    if rect.is_valid() {
        Ok(())
    } else {
        Err(KdTreeError::InvalidArgument(format!(
            "malformed rectangle {rect} passed to {operation}()"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, Rect};

    #[test]
    fn test_check_point_message_names_operation() {
        let err = check_point(Point::new(f64::NAN, 0.0), "insert").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("invalid argument: "), "got {msg}");
        assert!(msg.contains("insert()"), "got {msg}");
    }

    #[test]
    fn test_check_rect() {
        assert!(check_rect(&Rect::unit(), "range_query").is_ok());
        let err = check_rect(&Rect::new(1.0, 0.0, 0.0, 1.0), "range_query").unwrap_err();
        assert!(matches!(err, KdTreeError::InvalidArgument(_)));
    }
}
