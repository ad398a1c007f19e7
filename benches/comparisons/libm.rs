//! Approximate roots against std and libm.

use approx_roots::{
    approx_cbrt, approx_forth_root, approx_seventh_root, approx_sqrt, approx_tenth_root,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn inputs_f64() -> Vec<f64> {
    (0..1024).map(|i| 1e-6 * 1e12f64.powf(i as f64 / 1023.0)).collect()
}

fn inputs_f32() -> Vec<f32> {
    inputs_f64().into_iter().map(|x| x as f32).collect()
}

fn bench_sqrt(c: &mut Criterion) {
    let xs = inputs_f64();
    let xs32 = inputs_f32();
    let mut group = c.benchmark_group("sqrt");

    group.bench_function("approx_sqrt_f64", |b| {
        b.iter(|| xs.iter().map(|&x| approx_sqrt(black_box(x))).sum::<f64>())
    });
    group.bench_function("std_sqrt_f64", |b| {
        b.iter(|| xs.iter().map(|&x| black_box(x).sqrt()).sum::<f64>())
    });
    group.bench_function("approx_sqrt_f32", |b| {
        b.iter(|| xs32.iter().map(|&x| approx_sqrt(black_box(x))).sum::<f32>())
    });
    group.bench_function("libm_sqrtf", |b| {
        b.iter(|| xs32.iter().map(|&x| libm::sqrtf(black_box(x))).sum::<f32>())
    });
    group.finish();
}

fn bench_cbrt(c: &mut Criterion) {
    let xs = inputs_f64();
    let mut group = c.benchmark_group("cbrt");

    group.bench_function("approx_cbrt_f64", |b| {
        b.iter(|| xs.iter().map(|&x| approx_cbrt(black_box(x))).sum::<f64>())
    });
    group.bench_function("libm_cbrt", |b| {
        b.iter(|| xs.iter().map(|&x| libm::cbrt(black_box(x))).sum::<f64>())
    });
    group.bench_function("std_cbrt", |b| {
        b.iter(|| xs.iter().map(|&x| black_box(x).cbrt()).sum::<f64>())
    });
    group.finish();
}

fn bench_higher_roots(c: &mut Criterion) {
    let xs = inputs_f64();
    let mut group = c.benchmark_group("nth_root");

    macro_rules! degree {
        ($f:ident, $n:literal) => {
            group.bench_with_input(BenchmarkId::new("approx", $n), &xs, |b, xs| {
                b.iter(|| xs.iter().map(|&x| $f(black_box(x))).sum::<f64>())
            });
            group.bench_with_input(BenchmarkId::new("powf", $n), &xs, |b, xs| {
                b.iter(|| xs.iter().map(|&x| black_box(x).powf(1.0 / $n as f64)).sum::<f64>())
            });
        };
    }

    degree!(approx_forth_root, 4);
    degree!(approx_seventh_root, 7);
    degree!(approx_tenth_root, 10);
    group.finish();
}

criterion_group!(benches, bench_sqrt, bench_cbrt, bench_higher_roots);
criterion_main!(benches);
