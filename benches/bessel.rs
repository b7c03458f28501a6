use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use real_bessel::{airy, bessel_ik, bessel_jy, besselj, besselk};

fn bench_integer_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer order");
    group.bench_function("J_5(3) miller", |b| b.iter(|| besselj(black_box(5), black_box(3.0_f64))));
    group.bench_function("J_5(30) upward", |b| {
        b.iter(|| besselj(black_box(5), black_box(30.0_f64)))
    });
    group.bench_function("K_5(3)", |b| b.iter(|| besselk(black_box(5), black_box(3.0_f64))));
    group.finish();
}

fn bench_real_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("real order");
    for &x in &[0.5_f64, 5.0, 50.0] {
        group.bench_function(format!("JY_2.5({x})"), |b| {
            b.iter(|| bessel_jy(black_box(x), black_box(2.5)))
        });
        group.bench_function(format!("IK_2.5({x})"), |b| {
            b.iter(|| bessel_ik(black_box(x), black_box(2.5)))
        });
    }
    group.finish();
}

fn bench_airy(c: &mut Criterion) {
    c.bench_function("airy(-3)", |b| b.iter(|| airy(black_box(-3.0_f64))));
    c.bench_function("airy(3)", |b| b.iter(|| airy(black_box(3.0_f64))));
}

criterion_group!(benches, bench_integer_order, bench_real_order, bench_airy);
criterion_main!(benches);
