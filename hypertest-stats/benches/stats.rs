use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hypertest_stats::accept::fisher_accept;
use hypertest_stats::chisq::chisq_two_sample;

fn random_counts(n: usize, levels: u64, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 11) % levels) as f64
        })
        .collect()
}

fn bench_fisher_accept(c: &mut Criterion) {
    let mut group = c.benchmark_group("fisher_accept");

    // Exact-integer pmf path
    group.bench_function("n60_exact", |b| {
        b.iter(|| fisher_accept(black_box(60), 20, 30, 0.05))
    });

    // Log-space pmf path
    group.bench_function("n2000_log", |b| {
        b.iter(|| fisher_accept(black_box(2000), 150, 400, 0.05))
    });

    group.finish();
}

fn bench_chisq(c: &mut Criterion) {
    let mut group = c.benchmark_group("chisq_two_sample");

    let x = random_counts(10_000, 20, 42);
    let y = random_counts(10_000, 20, 43);
    group.bench_function("10k_x_10k", |b| {
        b.iter(|| chisq_two_sample(black_box(&x), black_box(&y)))
    });

    group.finish();
}

criterion_group!(benches, bench_fisher_accept, bench_chisq);
criterion_main!(benches);
