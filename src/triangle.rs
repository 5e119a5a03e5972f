//! Upper-triangle summation over a square matrix.
//!
//! Three equivalent ways of summing the cells `{(i, j) : i <= j}` (diagonal
//! included). They differ only in loop order and in where the `i <= j` check
//! lives:
//!
//! - [`SumStrategy::Baseline`]: visit every cell row by row, test `i <= j`
//!   per cell.
//! - [`SumStrategy::SkipInner`]: column `j` outer, `i` in `0..=j` inner. No
//!   branch, but each inner step jumps a full row ahead in memory.
//! - [`SumStrategy::BoundedInner`]: row `i` outer, `j` in `i..size` inner. No
//!   branch and contiguous access; fastest on large matrices.
//!
//! All three agree within [`SUM_TOLERANCE`]. They are not bit-identical since
//! floating-point addition is not associative.
//!
//! # Example
//!
//! ```
//! use triangle_sum::primitives::SquareMatrix;
//! use triangle_sum::triangle::TriangularMatrixSummer;
//!
//! let m = SquareMatrix::from_rows(&[
//!     vec![1.0, 2.0, 3.0],
//!     vec![4.0, 5.0, 6.0],
//!     vec![7.0, 8.0, 9.0],
//! ]).expect("square rows");
//! let summer = TriangularMatrixSummer::from_matrix(m);
//! assert_eq!(summer.sum_bounded_inner(), 26.0);
//! ```

use crate::error::{Result, TriangleError};
use crate::primitives::SquareMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Absolute tolerance within which the three strategies must agree.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Summation variant selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SumStrategy {
    /// Full row-major sweep with a per-cell `i <= j` branch
    Baseline,
    /// Column-outer loop with the branch folded into the inner bound
    SkipInner,
    /// Row-outer loop with the branch folded into the inner start
    BoundedInner,
}

impl SumStrategy {
    /// All strategies, baseline first.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Baseline, Self::SkipInner, Self::BoundedInner]
    }

    /// Stable kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::SkipInner => "skip-inner",
            Self::BoundedInner => "bounded-inner",
        }
    }

    /// Parses a strategy name. Accepts the kebab-case names plus the legacy
    /// `cma` / `rma` aliases.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "baseline" => Some(Self::Baseline),
            "skip-inner" | "skip_inner" | "cma" | "column-major" => Some(Self::SkipInner),
            "bounded-inner" | "bounded_inner" | "rma" | "row-major" => Some(Self::BoundedInner),
            _ => None,
        }
    }
}

impl fmt::Display for SumStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SumStrategy {
    type Err = TriangleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| TriangleError::UnknownStrategy(s.to_string()))
    }
}

/// Owns a square matrix and sums its inclusive upper triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangularMatrixSummer {
    matrix: SquareMatrix,
}

impl TriangularMatrixSummer {
    /// Creates a `size x size` matrix of uniform values in `[0, 1)`.
    ///
    /// `seed = None` seeds from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns [`TriangleError::InvalidDimension`] if `size` is negative and
    /// [`TriangleError::DimensionOverflow`] if the matrix cannot be addressed.
    pub fn new(size: i64, seed: Option<u64>) -> Result<Self> {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        tracing::debug!(size, ?seed, "generating matrix");
        Self::with_rng(size, &mut rng)
    }

    /// Creates a `size x size` matrix drawing values from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`TriangleError::InvalidDimension`] if `size` is negative, or
    /// [`TriangleError::DimensionOverflow`] if `size * size` cells cannot be
    /// allocated.
    pub fn with_rng<R: Rng + ?Sized>(size: i64, rng: &mut R) -> Result<Self> {
        let size = usize::try_from(size).map_err(|_| TriangleError::InvalidDimension { size })?;
        Ok(Self {
            matrix: SquareMatrix::random(size, rng)?,
        })
    }

    /// Wraps an existing matrix, bypassing random fill.
    #[must_use]
    pub fn from_matrix(matrix: SquareMatrix) -> Self {
        Self { matrix }
    }

    /// Matrix dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Borrow the underlying matrix.
    #[must_use]
    pub fn matrix(&self) -> &SquareMatrix {
        &self.matrix
    }

    /// Reference sum: every cell in row-major order, lower triangle skipped
    /// by a per-cell branch.
    #[must_use]
    pub fn sum_baseline(&self) -> f64 {
        let size = self.matrix.size();
        let mut sum = 0.0;
        for i in 0..size {
            for j in 0..size {
                if i <= j {
                    sum += self.matrix.get(i, j);
                }
            }
        }
        sum
    }

    /// Column-outer sum with `i` bounded by `j`. Strided access.
    #[must_use]
    pub fn sum_skip_inner(&self) -> f64 {
        let size = self.matrix.size();
        let mut sum = 0.0;
        for j in 0..size {
            for i in 0..=j {
                sum += self.matrix.get(i, j);
            }
        }
        sum
    }

    /// Row-outer sum with `j` starting at `i`. Contiguous access.
    #[must_use]
    pub fn sum_bounded_inner(&self) -> f64 {
        let size = self.matrix.size();
        let mut sum = 0.0;
        for i in 0..size {
            for j in i..size {
                sum += self.matrix.get(i, j);
            }
        }
        sum
    }

    /// Sum with the chosen strategy.
    #[must_use]
    pub fn sum(&self, strategy: SumStrategy) -> f64 {
        match strategy {
            SumStrategy::Baseline => self.sum_baseline(),
            SumStrategy::SkipInner => self.sum_skip_inner(),
            SumStrategy::BoundedInner => self.sum_bounded_inner(),
        }
    }
}

#[cfg(test)]
#[path = "triangle_tests.rs"]
mod tests;
