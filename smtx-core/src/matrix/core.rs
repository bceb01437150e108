//! Storage and element access for the sparse matrix type

use core::fmt;

use hashbrown::HashMap;

use crate::error::{Result, SmtxError};

/// Two-dimensional sparse matrix of signed integers.
///
/// Only non-zero values are stored, keyed by `(row, col)`. Reading an
/// absent coordinate yields zero; writing a zero removes the entry. Both
/// accessors reject coordinates outside `rows x cols`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseMatrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) entries: HashMap<(usize, usize), i64>,
}

impl SparseMatrix {
    /// Create an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Create an empty matrix with room for `capacity` entries
    pub fn with_capacity(rows: usize, cols: usize, capacity: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Build a matrix from `(row, col, value)` triples.
    ///
    /// Each triple goes through [`set`](Self::set): out-of-bounds
    /// coordinates fail, zeros store nothing, and a repeated coordinate
    /// keeps the last value.
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        triplets: &[(usize, usize, i64)],
    ) -> Result<Self> {
        let mut matrix = Self::with_capacity(rows, cols, triplets.len());
        for &(row, col, value) in triplets {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored (non-zero) elements
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when no element is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read the element at `(row, col)`.
    ///
    /// Returns zero for coordinates with no stored entry. Out-of-bounds
    /// coordinates are an error, never a silent zero.
    pub fn get(&self, row: usize, col: usize) -> Result<i64> {
        self.check_bounds(row, col)?;
        Ok(self.entries.get(&(row, col)).copied().unwrap_or(0))
    }

    /// Write the element at `(row, col)`.
    ///
    /// A non-zero value inserts or overwrites the entry; zero removes it.
    /// This is the only mutation path, so the entry map can never hold a
    /// zero.
    pub fn set(&mut self, row: usize, col: usize, value: i64) -> Result<()> {
        self.check_bounds(row, col)?;
        if value != 0 {
            self.entries.insert((row, col), value);
        } else {
            self.entries.remove(&(row, col));
        }
        Ok(())
    }

    /// Iterate over the stored `(row, col, value)` triples in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(SmtxError::IndexOutOfBounds {
                row: row as i64,
                col: col as i64,
                nrows: self.rows,
                ncols: self.cols,
            });
        }
        Ok(())
    }
}

impl fmt::Display for SparseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SparseMatrix({}x{}): {} non-zero elements",
            self.rows,
            self.cols,
            self.nnz()
        )
    }
}
