//! Simple example to read a sparse matrix from a text file

use std::time::Instant;

use smtx::{read_matrix, Result};

fn main() -> Result<()> {
    let filename = "demo_matrix.smtx";

    // Check if file exists
    if !std::path::Path::new(filename).exists() {
        println!("File '{filename}' not found!");
        println!("   Run 'cargo run --example write_matrix' first");
        return Ok(());
    }

    println!("Reading sparse matrix from '{filename}'...");
    let start = Instant::now();
    let matrix = read_matrix(filename)?;
    let load_time = start.elapsed();
    println!("Parsed in {:.3}ms", load_time.as_secs_f64() * 1000.0);

    let (nrows, ncols) = matrix.dimensions();
    println!("\nMatrix Information:");
    println!("   Dimensions: {nrows} x {ncols}");
    println!("   Non-zeros: {}", matrix.nnz());
    if nrows > 0 && ncols > 0 {
        println!(
            "   Sparsity: {:.4}%",
            (matrix.nnz() as f64 / (nrows * ncols) as f64) * 100.0
        );
    }

    println!("\nProbing elements:");
    let probes = [
        (0, 0),
        (0, 1),
        (0, ncols.saturating_sub(1)),
        (nrows / 2, ncols / 2),
    ];
    for (row, col) in probes {
        if row < nrows && col < ncols {
            let start_lookup = Instant::now();
            let value = matrix.get(row, col)?;
            let lookup_time = start_lookup.elapsed();
            let kind = if value != 0 { "HIT" } else { "zero" };
            println!(
                "   matrix[{row}, {col}] = {value} ({kind} in {:.3}ms)",
                lookup_time.as_secs_f64() * 1000.0
            );
        }
    }

    println!("\nFirst entries in file order:");
    let mut entries: Vec<(usize, usize, i64)> = matrix.iter().collect();
    entries.sort_unstable();
    for &(row, col, value) in entries.iter().take(5) {
        println!("   ({row}, {col}, {value})");
    }

    Ok(())
}
