//! Build a banded demo matrix and save it as a text file

use std::time::Instant;

use smtx::{write_matrix, Result, SparseMatrix};

fn main() -> Result<()> {
    println!("Building banded demo matrix...");

    let size = 2_000;

    let start = Instant::now();
    let matrix = build_banded_matrix(size)?;
    let build_time = start.elapsed();
    println!("Built {matrix} in {build_time:?}");

    let start = Instant::now();
    write_matrix(&matrix, "demo_matrix.smtx")?;
    let write_time = start.elapsed();
    println!(
        "Saved to 'demo_matrix.smtx' in {:.3}ms",
        write_time.as_secs_f64() * 1000.0
    );
    println!(
        "Sparsity: {:.4}% of {} cells stored",
        (matrix.nnz() as f64 / (size * size) as f64) * 100.0,
        size * size
    );
    println!("\nRun 'cargo run --example read_matrix' to read it back!");
    Ok(())
}

/// Tridiagonal pattern: twos on the main diagonal, minus ones beside it
fn build_banded_matrix(size: usize) -> Result<SparseMatrix> {
    let mut matrix = SparseMatrix::with_capacity(size, size, 3 * size);
    for i in 0..size {
        matrix.set(i, i, 2)?;
        if i + 1 < size {
            matrix.set(i, i + 1, -1)?;
            matrix.set(i + 1, i, -1)?;
        }
    }
    Ok(matrix)
}
