//! Error types for triangle-sum operations.
//!
//! Construction is the only fallible step; summation itself never fails.

use thiserror::Error;

/// Main error type for triangle-sum operations.
///
/// # Examples
///
/// ```
/// use triangle_sum::error::TriangleError;
///
/// let err = TriangleError::InvalidDimension { size: -1 };
/// assert!(err.to_string().contains("invalid dimension"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriangleError {
    /// Requested matrix size is negative.
    #[error("invalid dimension: size must be >= 0, got {size}")]
    InvalidDimension {
        /// Size that was requested
        size: i64,
    },

    /// `size * size` cells of `f64` do not fit the address space.
    #[error("dimension overflow: a {size}x{size} matrix does not fit in memory")]
    DimensionOverflow {
        /// Size that was requested
        size: usize,
    },

    /// Flat data does not hold `size * size` values.
    #[error("data length mismatch: expected {expected} values, got {actual}")]
    DataLength {
        /// `size * size`
        expected: usize,
        /// Length actually provided
        actual: usize,
    },

    /// Row data is ragged or not square.
    #[error("matrix is not square: {rows} rows, row of {cols} columns")]
    NotSquare {
        /// Number of rows provided
        rows: usize,
        /// Length of the first offending row
        cols: usize,
    },

    /// Strategy name did not match any known summation variant.
    #[error("unknown summation strategy: {0}")]
    UnknownStrategy(String),
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, TriangleError>;
