//! Criterion benchmarks for Gaussian elimination.
//! Focus sizes: n×n systems with n in {3, 10, 30, 60}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use linsys::random::{draw_consistent_system, ReplayToken, SystemCfg};

fn cfg(n: usize) -> SystemCfg {
    SystemCfg {
        equations: n,
        dimension: n,
        coeff_bound: 10.0,
        integer_coeffs: false,
    }
}

fn bench_elimination(c: &mut Criterion) {
    let mut group = c.benchmark_group("elimination");
    for &n in &[3usize, 10, 30, 60] {
        group.bench_with_input(BenchmarkId::new("triangular_form", n), &n, |b, &n| {
            b.iter_batched(
                || draw_consistent_system(cfg(n), ReplayToken { seed: 43, index: 0 }).unwrap().0,
                |s| {
                    let _t = s.compute_triangular_form();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("rref", n), &n, |b, &n| {
            b.iter_batched(
                || draw_consistent_system(cfg(n), ReplayToken { seed: 44, index: 0 }).unwrap().0,
                |s| {
                    let _r = s.compute_rref();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("solve", n), &n, |b, &n| {
            b.iter_batched(
                || draw_consistent_system(cfg(n), ReplayToken { seed: 45, index: 0 }).unwrap().0,
                |s| {
                    let _x = s.compute_solution();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_elimination);
criterion_main!(benches);
