use criterion::{criterion_group, criterion_main, Criterion};
use queens_solver::queens::solver::{CollectSolutions, CountOnly, Queens};
use queens_solver::queens::symmetry;
use std::hint::black_box;
use std::time::Duration;

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");
    group.measurement_time(Duration::from_secs(10));

    for n in [6i64, 8, 10] {
        let queens = Queens::new(n).expect("dimension is positive");
        group.bench_function(format!("queens_{n}"), |b| {
            b.iter(|| {
                let mut sink = CountOnly;
                black_box(queens.solve_with(&mut sink))
            });
        });
    }

    group.finish();
}

fn bench_collect(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect");

    for n in [8i64, 10] {
        let queens = Queens::new(n).expect("dimension is positive");
        group.bench_function(format!("queens_{n}"), |b| {
            b.iter(|| {
                let mut sink = CollectSolutions::new();
                queens.solve_with(&mut sink);
                black_box(sink.solutions)
            });
        });
    }

    group.finish();
}

fn bench_fundamental(c: &mut Criterion) {
    let queens = Queens::new(8i64).expect("dimension is positive");
    let solutions = queens.solve().solutions;

    c.bench_function("fundamental_queens_8", |b| {
        b.iter(|| black_box(symmetry::fundamental_count(&solutions)));
    });
}

criterion_group!(benches, bench_count, bench_collect, bench_fundamental);
criterion_main!(benches);
