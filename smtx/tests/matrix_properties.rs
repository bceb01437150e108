//! Randomized properties of the sparse arithmetic and the text codec.
//!
//! Matrices are generated with rand and checked against algebraic
//! identities rather than fixed expected values.

use rand::Rng;
use smtx::SparseMatrix;

fn random_matrix(rows: usize, cols: usize, entries: usize) -> SparseMatrix {
    let mut rng = rand::thread_rng();
    let mut matrix = SparseMatrix::with_capacity(rows, cols, entries);
    for _ in 0..entries {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        let value = rng.gen_range(-50..=50);
        matrix.set(row, col, value).unwrap();
    }
    matrix
}

/// Rendering to text and parsing back reproduces the original matrix.
#[test]
fn text_round_trip_on_random_matrices() {
    for _ in 0..20 {
        let matrix = random_matrix(30, 40, 100);
        let reparsed = SparseMatrix::from_text(&matrix.to_text()).unwrap();
        assert_eq!(reparsed, matrix);
    }
}

/// Addition commutes for matrices of matching shape.
#[test]
fn addition_is_commutative() {
    for _ in 0..20 {
        let a = random_matrix(15, 15, 60);
        let b = random_matrix(15, 15, 60);
        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }
}

/// Subtracting a matrix from itself leaves no stored entries.
#[test]
fn self_subtraction_is_empty() {
    for _ in 0..20 {
        let a = random_matrix(25, 10, 80);
        let diff = a.sub(&a).unwrap();
        assert!(diff.is_empty());
        assert_eq!(diff.dimensions(), a.dimensions());
    }
}

/// Adding then subtracting the same operand is a no-op: (a + b) - b == a.
#[test]
fn add_then_sub_restores_operand() {
    for _ in 0..20 {
        let a = random_matrix(12, 18, 70);
        let b = random_matrix(12, 18, 70);
        assert_eq!(a.add(&b).unwrap().sub(&b).unwrap(), a);
    }
}

/// Multiplication distributes over addition: (a + b) * c == a*c + b*c.
#[test]
fn multiplication_distributes_over_addition() {
    for _ in 0..10 {
        let a = random_matrix(6, 5, 12);
        let b = random_matrix(6, 5, 12);
        let c = random_matrix(5, 4, 10);

        let left = a.add(&b).unwrap().mul(&c).unwrap();
        let right = a.mul(&c).unwrap().add(&b.mul(&c).unwrap()).unwrap();
        assert_eq!(left, right);
    }
}
