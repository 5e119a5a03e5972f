//! triangle-sum: upper-triangle matrix summation and microbenchmarking pitfalls.
//!
//! Three summation variants that produce the same number but run at very
//! different speeds depending on loop order and memory layout, plus the small
//! benchmark bodies used to show how dead-code elimination and constant
//! folding corrupt naive measurements.
//!
//! # Quick Start
//!
//! ```
//! use triangle_sum::prelude::*;
//!
//! let summer = TriangularMatrixSummer::new(128, Some(42)).unwrap();
//! let baseline = summer.sum_baseline();
//! assert!((baseline - summer.sum_skip_inner()).abs() < SUM_TOLERANCE);
//! assert!((baseline - summer.sum_bounded_inner()).abs() < SUM_TOLERANCE);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Square matrix storage
//! - [`triangle`]: The three summation strategies
//! - [`loop_conditional`]: Integer loop-conditional elimination
//! - [`pitfalls`]: Benchmark bodies for dead-code / constant-folding demos
//! - [`error`]: Error types
//!
//! Timing lives in `benches/` and is driven by Criterion.

pub mod error;
pub mod loop_conditional;
pub mod pitfalls;
pub mod prelude;
pub mod primitives;
pub mod triangle;

pub use error::{Result, TriangleError};
pub use primitives::SquareMatrix;
pub use triangle::{SumStrategy, TriangularMatrixSummer, SUM_TOLERANCE};
