//! Text format definitions for persisted sparse matrices
//!
//! This module contains the pure string codec for the on-disk layout:
//! a `rows=<n>` line, a `cols=<n>` line, then one `(row, col, value)`
//! triple per stored entry. No I/O operations - parsing and rendering
//! work on in-memory text only.

mod parse;
mod write;

/// Prefix of the row-count header line
pub const ROWS_PREFIX: &str = "rows=";
/// Prefix of the column-count header line
pub const COLS_PREFIX: &str = "cols=";
