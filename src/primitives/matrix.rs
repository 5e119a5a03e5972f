//! Square matrix type for the summation routines.

use crate::error::{Result, TriangleError};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A square matrix of `f64` values (row-major storage).
///
/// Deserialization goes through [`SquareMatrix::from_vec`], so a payload
/// whose data length is not `size * size` is rejected.
///
/// # Examples
///
/// ```
/// use triangle_sum::primitives::SquareMatrix;
///
/// let m = SquareMatrix::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).expect("data length matches size * size");
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.get(1, 0), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSquareMatrix")]
pub struct SquareMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Unchecked wire form of [`SquareMatrix`].
#[derive(Deserialize)]
struct RawSquareMatrix {
    data: Vec<f64>,
    size: usize,
}

impl TryFrom<RawSquareMatrix> for SquareMatrix {
    type Error = TriangleError;

    fn try_from(raw: RawSquareMatrix) -> Result<Self> {
        Self::from_vec(raw.size, raw.data)
    }
}

/// Number of cells in a `size x size` matrix of `f64`.
///
/// # Errors
///
/// Returns [`TriangleError::DimensionOverflow`] if the cell count, or its
/// size in bytes, does not fit the address space.
pub(crate) fn cell_count(size: usize) -> Result<usize> {
    size
        .checked_mul(size)
        .filter(|&cells| {
            cells
                .checked_mul(std::mem::size_of::<f64>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(TriangleError::DimensionOverflow { size })
}

impl SquareMatrix {
    /// Creates a matrix from flat row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match `size * size`, or if
    /// `size * size` overflows.
    pub fn from_vec(size: usize, data: Vec<f64>) -> Result<Self> {
        let cells = cell_count(size)?;
        if data.len() != cells {
            return Err(TriangleError::DataLength {
                expected: cells,
                actual: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Creates a matrix from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns an error if any row length differs from the number of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(cell_count(size)?);
        for row in rows {
            if row.len() != size {
                return Err(TriangleError::NotSquare {
                    rows: size,
                    cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, size })
    }

    /// Creates a matrix filled with independent uniform values in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`TriangleError::DimensionOverflow`] if `size * size` overflows.
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        let cells = cell_count(size)?;
        let data: Vec<f64> = (0..cells).map(|_| rng.gen::<f64>()).collect();
        Ok(Self { data, size })
    }

    /// Returns the dimension (rows == cols).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.size + col]
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
