#![no_std]

//! SMTX Core - Sparse Matrix Type and Text Format Definitions
//!
//! This crate provides the coordinate-dictionary sparse matrix type, its
//! arithmetic, and the plain-text serialization grammar. No I/O lives here;
//! file access is layered on top by the `smtx` crate.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod format;
pub mod matrix;

pub use error::*;
pub use format::*;
pub use matrix::*;
