//! File I/O operations for matrix text files
//!
//! This module provides functionality for reading and writing sparse
//! matrices to/from plain-text files. Parsing and rendering are delegated
//! to the core codec; only filesystem access lives here.

use std::fs;
use std::io;
use std::path::Path;

use smtx_core::SparseMatrix;

use crate::error::{Error, Result};

/// Load a matrix from the text file at `path`.
///
/// A missing file is reported as [`Error::FileNotFound`]; any other
/// filesystem failure surfaces as [`Error::Io`]. Grammar and bounds
/// problems inside the text pass through from the core codec with their
/// line numbers intact.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(err),
    })?;
    Ok(SparseMatrix::from_text(&text)?)
}

/// Save `matrix` to the text file at `path`, creating or truncating it.
pub fn write_matrix<P: AsRef<Path>>(matrix: &SparseMatrix, path: P) -> Result<()> {
    fs::write(path, matrix.to_text())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use smtx_core::SmtxError;

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("smtx-unit-{}-{name}", std::process::id()));
        path
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let path = temp_path("roundtrip.smtx");
        let matrix =
            SparseMatrix::from_triplets(3, 3, &[(0, 0, 1), (2, 1, -4)]).unwrap();

        write_matrix(&matrix, &path).unwrap();
        let loaded = read_matrix(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, matrix);
    }

    #[test]
    fn test_read_missing_file_is_file_not_found() {
        let path = temp_path("missing.smtx");
        match read_matrix(&path) {
            Err(Error::FileNotFound(reported)) => assert_eq!(reported, path),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_read_malformed_file_reports_line() {
        let path = temp_path("malformed.smtx");
        fs::write(&path, "rows=2\ncols=2\n(0,0)\n").unwrap();

        let result = read_matrix(&path);
        fs::remove_file(&path).unwrap();

        match result {
            Err(Error::Matrix(SmtxError::MalformedFormat { line })) => {
                assert_eq!(line, 3)
            }
            other => panic!("expected MalformedFormat, got {other:?}"),
        }
    }
}
