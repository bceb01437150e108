use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use smtx::SparseMatrix;

fn random_matrix(rows: usize, cols: usize, entries: usize) -> SparseMatrix {
    let mut rng = rand::thread_rng();
    let mut matrix = SparseMatrix::with_capacity(rows, cols, entries);
    for _ in 0..entries {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        let value = rng.gen_range(-100..=100);
        matrix.set(row, col, value).unwrap();
    }
    matrix
}

fn bench_add(c: &mut Criterion) {
    let a = random_matrix(1_000, 1_000, 5_000);
    let b = random_matrix(1_000, 1_000, 5_000);

    c.bench_function("add 1000x1000 5k nnz", |ben| {
        ben.iter(|| black_box(&a).add(black_box(&b)).unwrap())
    });
}

fn bench_mul(c: &mut Criterion) {
    let a = random_matrix(200, 200, 1_000);
    let b = random_matrix(200, 200, 1_000);

    c.bench_function("mul 200x200 1k nnz", |ben| {
        ben.iter(|| black_box(&a).mul(black_box(&b)).unwrap())
    });
}

fn bench_text_codec(c: &mut Criterion) {
    let matrix = random_matrix(1_000, 1_000, 5_000);
    let text = matrix.to_text();

    c.bench_function("to_text 5k nnz", |ben| {
        ben.iter(|| black_box(&matrix).to_text())
    });
    c.bench_function("from_text 5k nnz", |ben| {
        ben.iter(|| SparseMatrix::from_text(black_box(&text)).unwrap())
    });
}

criterion_group!(benches, bench_add, bench_mul, bench_text_codec);
criterion_main!(benches);
