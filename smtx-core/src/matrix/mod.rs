//! Coordinate-dictionary sparse matrix
//!
//! This module contains the `SparseMatrix` type and its pure operations.
//! Storage is a hash map from `(row, col)` to the non-zero value at that
//! coordinate; a missing key is a zero. Arithmetic never mutates its
//! operands and never stores a zero.

mod core;
mod elementwise;
mod matmul;

pub use self::core::SparseMatrix;
