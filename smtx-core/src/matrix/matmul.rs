//! Sparse-aware matrix multiplication

use crate::error::{Result, SmtxError};
use crate::matrix::SparseMatrix;

impl SparseMatrix {
    /// Matrix product `self * other`.
    ///
    /// Requires `self.ncols() == other.nrows()`; the result has shape
    /// `self.nrows() x other.ncols()`. The algorithm walks only the stored
    /// entries of `self` and, for each `(i, k)`, scans row `k` of `other`
    /// column by column, so the cost is O(nnz(self) * other.ncols())
    /// without ever densifying either operand. Accumulation goes through
    /// the setter, so products that cancel to zero leave no entry.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        if self.ncols() != other.nrows() {
            return Err(SmtxError::DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }

        let mut result = Self::new(self.nrows(), other.ncols());
        for (i, k, lhs) in self.iter() {
            for j in 0..other.ncols() {
                let rhs = other.get(k, j)?;
                if rhs != 0 {
                    let current = result.get(i, j)?;
                    result.set(i, j, current + lhs * rhs)?;
                }
            }
        }
        Ok(result)
    }
}
