//! Error types for sparse matrix operations

/// Errors that can occur during matrix construction, access, arithmetic,
/// or text parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtxError {
    /// Declared dimensions cannot describe a matrix shape
    InvalidDimensions { rows: i64, cols: i64 },
    /// Coordinate lies outside the matrix bounds
    ///
    /// Coordinates are kept as `i64` so a negative index read from a file
    /// is reported verbatim rather than wrapped.
    IndexOutOfBounds {
        row: i64,
        col: i64,
        nrows: usize,
        ncols: usize,
    },
    /// Operand shapes are incompatible with the requested operation
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Persisted text deviates from the expected grammar
    MalformedFormat { line: usize },
}

impl core::fmt::Display for SmtxError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SmtxError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid matrix dimensions rows={rows}, cols={cols}")
            }
            SmtxError::IndexOutOfBounds {
                row,
                col,
                nrows,
                ncols,
            } => {
                write!(
                    f,
                    "Coordinate ({row}, {col}) out of bounds for {nrows}x{ncols} matrix"
                )
            }
            SmtxError::DimensionMismatch { left, right } => {
                write!(
                    f,
                    "Dimension mismatch: {}x{} vs {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            SmtxError::MalformedFormat { line } => {
                write!(f, "Malformed matrix text at line {line}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SmtxError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SmtxError>;
