//! Parsing of the persisted text form

use crate::error::{Result, SmtxError};
use crate::format::{COLS_PREFIX, ROWS_PREFIX};
use crate::matrix::SparseMatrix;

impl SparseMatrix {
    /// Parse a matrix from its persisted text form.
    ///
    /// The first two significant lines must declare `rows=` and `cols=`
    /// in that order; every further significant line is a
    /// `(row, col, value)` entry. Blank lines are ignored anywhere and
    /// surrounding whitespace is trimmed per line. Errors carry the
    /// 1-based physical line number of the offending line.
    ///
    /// Entries are replayed through [`set`](Self::set), so zero values
    /// store nothing and a repeated coordinate keeps its last value.
    pub fn from_text(text: &str) -> Result<Self> {
        let line_count = text.lines().count();
        let truncated = SmtxError::MalformedFormat {
            line: line_count + 1,
        };

        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, raw)| (index + 1, raw.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line, header) = lines.next().ok_or(truncated)?;
        let rows_raw = parse_dimension(header, ROWS_PREFIX)
            .ok_or(SmtxError::MalformedFormat { line })?;
        let (line, header) = lines.next().ok_or(truncated)?;
        let cols_raw = parse_dimension(header, COLS_PREFIX)
            .ok_or(SmtxError::MalformedFormat { line })?;

        let (rows, cols) =
            match (usize::try_from(rows_raw), usize::try_from(cols_raw)) {
                (Ok(rows), Ok(cols)) => (rows, cols),
                _ => {
                    return Err(SmtxError::InvalidDimensions {
                        rows: rows_raw,
                        cols: cols_raw,
                    })
                }
            };

        let mut matrix = Self::new(rows, cols);
        for (line, entry) in lines {
            let (row_raw, col_raw, value) =
                parse_entry(entry).ok_or(SmtxError::MalformedFormat { line })?;
            let (row, col) =
                match (usize::try_from(row_raw), usize::try_from(col_raw)) {
                    (Ok(row), Ok(col)) => (row, col),
                    _ => {
                        return Err(SmtxError::IndexOutOfBounds {
                            row: row_raw,
                            col: col_raw,
                            nrows: rows,
                            ncols: cols,
                        })
                    }
                };
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }
}

/// Parse a `rows=`/`cols=` header line into its declared raw value
fn parse_dimension(line: &str, prefix: &str) -> Option<i64> {
    let value = line.strip_prefix(prefix)?;
    value.trim().parse().ok()
}

/// Split a `(row, col, value)` line into its three raw integer fields
fn parse_entry(line: &str) -> Option<(i64, i64, i64)> {
    let inner = line.strip_prefix('(')?.strip_suffix(')')?;
    let mut fields = inner.split(',');
    let row = fields.next()?.trim().parse().ok()?;
    let col = fields.next()?.trim().parse().ok()?;
    let value = fields.next()?.trim().parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some((row, col, value))
}
