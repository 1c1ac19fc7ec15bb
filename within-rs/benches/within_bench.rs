use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use within_rs::geometry::primitives::{Linestring, Point};
use within_rs::overlay::get_turns;
use within_rs::robustness::get_rescale_policy2;
use within_rs::within;

criterion_main!(benches);
criterion_group!(benches, linestring_within_bench, get_turns_bench);

const N_POINTS: usize = 500;

/// Zigzag with `n` points and a sub-linestring covering its middle half
fn create_zigzag(n: usize) -> (Linestring<f64>, Linestring<f64>) {
    let points = (0..n)
        .map(|i| Point::new(i as f64 * 0.37, if i % 2 == 0 { 0.0 } else { 1.3 }))
        .collect::<Vec<_>>();
    let sub = points[n / 4..3 * n / 4].to_vec();
    (Linestring::new(sub), Linestring::new(points))
}

fn linestring_within_bench(c: &mut Criterion) {
    let (sub, zigzag) = create_zigzag(N_POINTS);

    c.bench_function("linestring_within_linestring", |b| {
        b.iter(|| within(black_box(&sub), black_box(&zigzag)).unwrap())
    });
}

fn get_turns_bench(c: &mut Criterion) {
    let (sub, zigzag) = create_zigzag(N_POINTS);
    let policy = get_rescale_policy2(&sub, &zigzag).unwrap();

    c.bench_function("get_turns", |b| {
        b.iter(|| get_turns(black_box(&sub), black_box(&zigzag), &policy))
    });
}
