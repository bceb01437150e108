//! Elementwise addition and subtraction

use crate::error::{Result, SmtxError};
use crate::matrix::SparseMatrix;

impl SparseMatrix {
    /// Elementwise sum `self + other`.
    ///
    /// Both operands must have identical dimensions. Neither operand is
    /// modified; the result is freshly built and stays sparse (entries
    /// that cancel to zero are not stored).
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, |lhs, rhs| lhs + rhs)
    }

    /// Elementwise difference `self - other`.
    ///
    /// Same dimension rule and sparsity behavior as [`add`](Self::add).
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.combine(other, |lhs, rhs| lhs - rhs)
    }

    /// Seed the result with `self`, then fold `other` in entry by entry.
    /// Runs in O(nnz(self) + nnz(other)).
    fn combine(
        &self,
        other: &Self,
        merge: impl Fn(i64, i64) -> i64,
    ) -> Result<Self> {
        if self.dimensions() != other.dimensions() {
            return Err(SmtxError::DimensionMismatch {
                left: self.dimensions(),
                right: other.dimensions(),
            });
        }

        let mut result =
            Self::with_capacity(self.rows, self.cols, self.nnz() + other.nnz());
        for (row, col, value) in self.iter() {
            result.set(row, col, value)?;
        }
        for (row, col, value) in other.iter() {
            let current = result.get(row, col)?;
            result.set(row, col, merge(current, value))?;
        }
        Ok(result)
    }
}
