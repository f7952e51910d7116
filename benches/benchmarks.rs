#[macro_use]
extern crate criterion;
#[macro_use]
extern crate lazy_static;

use criterion::{BenchmarkId, Criterion, Throughput};

use rand::prelude::*;
use rand::SeedableRng;

use cpoly::{Complex, Polynomial};

const MAX_ELEMENTS: usize = 6401;

lazy_static! {
    static ref RAN_COEFFS: Vec<Complex> = {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(42);
        (0..MAX_ELEMENTS)
            .map(|_| {
                Complex::new(
                    rng.gen_range(-5.0..5.0),
                    rng.gen_range(-5.0..5.0),
                )
            })
            .collect()
    };

    static ref RAN_LEADING: Vec<Complex> = {
        let mut rng = rand_pcg::Pcg64::seed_from_u64(43);
        (0..MAX_ELEMENTS)
            .map(|_| {
                Complex::new(rng.gen_range(1.0..6.0), rng.gen_range(0.0..5.0))
            })
            .collect()
    };
}

// polynomial of the given degree with a non-vanishing leading coefficient
fn ran_poly(degree: usize, offset: usize) -> Polynomial {
    let mut coeffs = RAN_COEFFS[offset..=degree + offset].to_vec();
    if degree > 0 {
        coeffs[degree] = RAN_LEADING[degree + offset];
    }
    Polynomial::new(coeffs)
}

fn add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for size in [100, 200, 400, 800, 1600, 3200] {
        let p = ran_poly(size, 0);
        let q = ran_poly(size, 1);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| &p + &q)
        });
    }
    group.finish();
}

fn mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    group.sample_size(20);
    for size in [50, 100, 200, 400, 800] {
        let p = ran_poly(size, 0);
        let q = ran_poly(size, 1);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| &p * &q)
        });
    }
    group.finish();
}

fn div_rem(c: &mut Criterion) {
    const DIVISOR_DEGREE: usize = 50;
    let mut group = c.benchmark_group("div_rem");
    group.sample_size(20);
    let divisor = ran_poly(DIVISOR_DEGREE, 1);
    for size in [100, 200, 400, 800, 1600] {
        let dividend = ran_poly(size, 0);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| dividend.div_rem(&divisor))
        });
    }
    group.finish();
}

fn eval(c: &mut Criterion) {
    // on the unit circle, so that high powers stay finite
    let x = Complex::new(0.6, 0.8);
    let mut group = c.benchmark_group("eval");
    for size in [100, 200, 400, 800, 1600, 3200, 6400] {
        let p = ran_poly(size, 0);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| p.eval(x))
        });
    }
    group.finish();
}

criterion_group!(benches, add, mul, div_rem, eval);
criterion_main!(benches);
