//! Criterion benchmarks for the Held-Karp solver.
//!
//! Uses seeded random instances so every run measures the same matrices.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_heldkarp::heldkarp::{HeldKarpConfig, HeldKarpRunner, Strategy};
use u_heldkarp::matrix::AdjacencyMatrix;

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_strategy(c: &mut Criterion, name: &str, strategy: Strategy, sizes: &[usize]) {
    let mut group = c.benchmark_group(name);
    group.sample_size(10);

    for &n in sizes {
        let matrix = AdjacencyMatrix::random(n, 1.0, 1000, 42);
        let config = HeldKarpConfig::default().with_strategy(strategy);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(matrix, config),
            |b, (m, c)| {
                b.iter(|| {
                    let result = HeldKarpRunner::run(black_box(m), 0, black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_recursive(c: &mut Criterion) {
    bench_strategy(c, "heldkarp_recursive", Strategy::Recursive, &[8, 12, 15]);
}

fn bench_iterative(c: &mut Criterion) {
    bench_strategy(c, "heldkarp_iterative", Strategy::Iterative, &[8, 12, 15]);
}

fn bench_sparse(c: &mut Criterion) {
    // sparse graphs prune most branches; many seeds have no tour at all
    let mut group = c.benchmark_group("heldkarp_sparse");
    group.sample_size(10);

    for &p in &[0.3, 0.5, 0.8] {
        let matrix = AdjacencyMatrix::random(14, p, 1000, 7);
        let config = HeldKarpConfig::default();
        group.bench_with_input(
            BenchmarkId::new("p", format!("{p:.1}")),
            &(matrix, config),
            |b, (m, c)| {
                b.iter(|| {
                    let result = HeldKarpRunner::run(black_box(m), 0, black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_recursive, bench_iterative, bench_sparse);
criterion_main!(benches);
