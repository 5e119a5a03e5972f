//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use triangle_sum::prelude::*;
//! ```

pub use crate::error::TriangleError;
pub use crate::primitives::SquareMatrix;
pub use crate::triangle::{SumStrategy, TriangularMatrixSummer, SUM_TOLERANCE};
