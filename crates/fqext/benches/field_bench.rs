//! Benchmarks for extension field arithmetic.
//!
//! Includes:
//! - Multiplication and inversion across field sizes
//! - Frobenius, square roots and minimal polynomials
//! - Schoolbook vs Karatsuba coefficient multiplication

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fqext::poly::{mul_coeffs_with, PolyMulConfig};
use fqext::prelude::*;

/// Fields of increasing degree, each from the built-in Conway table.
fn conway_fields() -> Vec<(&'static str, FqField)> {
    [(2, 12, "GF(2^12)"), (3, 8, "GF(3^8)"), (13, 4, "GF(13^4)")]
        .into_iter()
        .map(|(p, d, name)| (name, FqField::conway(Integer::new(p), d).unwrap()))
        .collect()
}

/// GF(p^2) over the Mersenne prime 2^127 - 1.
fn mersenne_field() -> FqField {
    let p = Integer::new(2).pow(127) - Integer::new(1);
    let prime = PrimeField::new(p.clone()).unwrap();
    FqField::new(p, FpPoly::from_i64(&prime, &[1, 0, 1])).unwrap()
}

fn bench_mul_inv(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_arith");
    let mut rng = ChaCha8Rng::seed_from_u64(123);

    let mut fields = conway_fields();
    fields.push(("GF(M127^2)", mersenne_field()));

    for (name, f) in &fields {
        let a = f.random(&mut rng);
        let b = f.random(&mut rng);

        group.bench_function(BenchmarkId::new("mul", *name), |bench| {
            bench.iter(|| black_box(&a * &b));
        });
        group.bench_function(BenchmarkId::new("inv", *name), |bench| {
            bench.iter(|| black_box(a.inv()));
        });
    }

    group.finish();
}

fn bench_special(c: &mut Criterion) {
    let mut group = c.benchmark_group("special");
    let mut rng = ChaCha8Rng::seed_from_u64(123);

    for (name, f) in conway_fields() {
        let a = f.random(&mut rng);
        let square = a.square();

        group.bench_function(BenchmarkId::new("frobenius", name), |bench| {
            bench.iter(|| black_box(a.frobenius(3)));
        });
        group.bench_function(BenchmarkId::new("sqrt", name), |bench| {
            bench.iter(|| black_box(square.sqrt(false)));
        });
        group.bench_function(BenchmarkId::new("minpoly", name), |bench| {
            bench.iter(|| black_box(a.minimal_polynomial()));
        });
    }

    group.finish();
}

fn bench_algorithm_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithm_comparison");
    group.sample_size(50);

    let p = Integer::new(2).pow(61) - Integer::new(1);
    let prime = PrimeField::new(p).unwrap();
    let schoolbook = PolyMulConfig {
        karatsuba_threshold: usize::MAX,
    };
    let karatsuba = PolyMulConfig::default();

    for size in [16, 64, 256] {
        let a: Vec<Integer> = (0..size).map(|i| prime.from_i64(i * 7919 + 1)).collect();
        let b: Vec<Integer> = (0..size).map(|i| prime.from_i64(i * 104_729 + 3)).collect();

        group.bench_with_input(BenchmarkId::new("schoolbook", size), &size, |bench, _| {
            bench.iter(|| black_box(mul_coeffs_with(&a, &b, &prime, &schoolbook)));
        });
        group.bench_with_input(BenchmarkId::new("karatsuba", size), &size, |bench, _| {
            bench.iter(|| black_box(mul_coeffs_with(&a, &b, &prime, &karatsuba)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mul_inv, bench_special, bench_algorithm_comparison);

criterion_main!(benches);
