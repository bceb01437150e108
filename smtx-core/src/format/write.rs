//! Rendering of the persisted text form

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::format::{COLS_PREFIX, ROWS_PREFIX};
use crate::matrix::SparseMatrix;

impl SparseMatrix {
    /// Render the matrix in its persisted text form.
    ///
    /// Header lines first, then one `(row, col, value)` line per stored
    /// entry in ascending `(row, col)` order. Sorting makes the output
    /// byte-identical for equal matrices, so rendered files diff cleanly.
    pub fn to_text(&self) -> String {
        let mut entries: Vec<(usize, usize, i64)> = self.iter().collect();
        entries.sort_unstable();

        let mut text = String::with_capacity(24 + 16 * entries.len());
        text.push_str(&format!("{ROWS_PREFIX}{}\n", self.rows));
        text.push_str(&format!("{COLS_PREFIX}{}\n", self.cols));
        for (row, col, value) in entries {
            text.push_str(&format!("({row}, {col}, {value})\n"));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_sorted_exact_bytes() {
        let matrix = SparseMatrix::from_triplets(
            3,
            3,
            &[(2, 0, 7), (0, 1, -2), (0, 0, 1), (1, 2, 4)],
        )
        .unwrap();
        assert_eq!(
            matrix.to_text(),
            "rows=3\ncols=3\n(0, 0, 1)\n(0, 1, -2)\n(1, 2, 4)\n(2, 0, 7)\n"
        );
    }

    #[test]
    fn test_to_text_empty_matrix_is_headers_only() {
        let matrix = SparseMatrix::new(5, 2);
        assert_eq!(matrix.to_text(), "rows=5\ncols=2\n");
    }

    #[test]
    fn test_to_text_is_deterministic() {
        let matrix = SparseMatrix::from_triplets(
            4,
            4,
            &[(3, 3, 1), (0, 2, 2), (2, 1, 3), (1, 0, 4)],
        )
        .unwrap();
        assert_eq!(matrix.to_text(), matrix.clone().to_text());
    }

    #[test]
    fn test_text_round_trip() {
        let matrix = SparseMatrix::from_triplets(
            6,
            4,
            &[(0, 3, -11), (5, 0, 2), (2, 2, 900)],
        )
        .unwrap();
        assert_eq!(SparseMatrix::from_text(&matrix.to_text()), Ok(matrix));
    }

    #[test]
    fn test_text_round_trip_keeps_shape_of_empty_matrix() {
        let matrix = SparseMatrix::new(9, 1);
        assert_eq!(SparseMatrix::from_text(&matrix.to_text()), Ok(matrix));
    }
}
