//! Error types for visual-center operations.

use thiserror::Error;

/// Errors that can occur while building polygons or searching for a pole.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoleError {
    /// A ring is malformed or the polygon has a zero-area bounding box.
    #[error("invalid polygon: {0}")]
    InvalidPolygon(String),

    /// Search options are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An internal invariant was broken. Indicates a bug, never bad input.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),

    /// The search evaluated more cells than the configured cap allows.
    #[error("search aborted after evaluating {cells} cells")]
    SearchLimitExceeded {
        /// Number of cells evaluated before the run was aborted.
        cells: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = PoleError::InvalidPolygon("ring has 2 vertices".into());
        assert_eq!(err.to_string(), "invalid polygon: ring has 2 vertices");

        let err = PoleError::SearchLimitExceeded { cells: 42 };
        assert_eq!(err.to_string(), "search aborted after evaluating 42 cells");
    }
}
