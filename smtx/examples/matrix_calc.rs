//! Batch calculator for persisted sparse matrices
//!
//! Loads two matrix text files, applies the chosen operation, and saves
//! the result.

use clap::{Parser, Subcommand};
use smtx::{read_matrix, write_matrix};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "SMTX calculator - add, subtract, or multiply sparse matrix text files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Elementwise sum of two matrices with identical dimensions
    Add {
        /// Left operand file
        lhs: String,

        /// Right operand file
        rhs: String,

        /// Where to write the result
        #[arg(short, long, default_value = "result.smtx")]
        output: String,
    },
    /// Elementwise difference of two matrices with identical dimensions
    Sub {
        /// Left operand file
        lhs: String,

        /// Right operand file
        rhs: String,

        /// Where to write the result
        #[arg(short, long, default_value = "result.smtx")]
        output: String,
    },
    /// Matrix product; left columns must match right rows
    Mul {
        /// Left operand file
        lhs: String,

        /// Right operand file
        rhs: String,

        /// Where to write the result
        #[arg(short, long, default_value = "result.smtx")]
        output: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let start_time = std::time::Instant::now();

    let (lhs, rhs, output) = match &cli.command {
        Commands::Add { lhs, rhs, output }
        | Commands::Sub { lhs, rhs, output }
        | Commands::Mul { lhs, rhs, output } => (lhs, rhs, output),
    };

    let left = read_matrix(lhs)?;
    let right = read_matrix(rhs)?;
    println!("Loaded '{lhs}': {left}");
    println!("Loaded '{rhs}': {right}");

    let result = match &cli.command {
        Commands::Add { .. } => left.add(&right)?,
        Commands::Sub { .. } => left.sub(&right)?,
        Commands::Mul { .. } => left.mul(&right)?,
    };
    println!("Result: {result}");

    write_matrix(&result, output)?;
    println!("Saved to '{output}'");

    let elapsed = start_time.elapsed();
    println!("Completed in {elapsed:.2?}");
    Ok(())
}
