//! Error types for the file layer

use std::io;
use std::path::PathBuf;

use smtx_core::SmtxError;
use thiserror::Error;

/// Errors produced by the file load/save layer
#[derive(Debug, Error)]
pub enum Error {
    /// Backing file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    /// Any other filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Failure inside the matrix core (format, bounds, shapes)
    #[error(transparent)]
    Matrix(#[from] SmtxError),
}

/// Result type for file-backed matrix operations
pub type Result<T> = std::result::Result<T, Error>;
