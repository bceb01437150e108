//! SMTX - Sparse Integer Matrix Arithmetic with Plain-Text Files
//!
//! This library provides coordinate-dictionary sparse matrices with
//! bounds-checked access, pure arithmetic, and a line-oriented text file
//! format.
//!
//! ## Architecture
//!
//! SMTX follows a clean core/implementation separation:
//!
//! - **smtx-core**: Matrix type, arithmetic, and the text codec (no I/O)
//! - **smtx**: File-backed load/save layered on the core codec
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smtx::{read_matrix, write_matrix, SparseMatrix};
//!
//! fn example() -> smtx::Result<()> {
//!     let mut matrix = SparseMatrix::new(3, 3);
//!     matrix.set(0, 2, 5)?;
//!     write_matrix(&matrix, "demo.smtx")?;
//!
//!     let loaded = read_matrix("demo.smtx")?;
//!     println!("{loaded} -> value at (0, 2): {}", loaded.get(0, 2)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Sparse storage**: Only non-zero values are kept; zero writes erase
//! - **Checked access**: Out-of-bounds reads and writes are errors
//! - **Pure operators**: `add`/`sub`/`mul` never mutate their operands
//! - **Deterministic files**: Sorted rendering, byte-stable across runs

// Re-export the core surface so applications depend on smtx alone
pub use smtx_core::{
    // Matrix type
    SparseMatrix,
    // Error handling
    SmtxError,
    // Format constants
    COLS_PREFIX, ROWS_PREFIX,
};

// Implementation modules
pub mod error;
pub mod file_io;

// Public exports
pub use error::{Error, Result};
pub use file_io::{read_matrix, write_matrix};
