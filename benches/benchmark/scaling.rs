use crate::common::{configure_criterion, DomainError};
use criterion::{criterion_group, BenchmarkId, Criterion, Throughput};
use seq_rail::prelude::*;
use std::hint::black_box;

pub fn bench_take_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/take_infinite");

    for size in [10usize, 100, 1000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let result = increment::<DomainError>()
                    .map(|n| Ok(n * n))
                    .filter(|sq| sq % 3 != 0)
                    .take(size)
                    .fold(0i64, |acc, v| acc.wrapping_add(v));
                let _ = black_box(result);
            })
        });
    }

    group.finish();
}

pub fn bench_combinator_depth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling/combinator_depth");

    group.bench_function("depth_1", |b| {
        b.iter(|| {
            let result = range::<DomainError>(0, 1000).map(|n| Ok(n + 1)).count();
            let _ = black_box(result);
        })
    });

    group.bench_function("depth_4", |b| {
        b.iter(|| {
            let result = range::<DomainError>(0, 1000)
                .map(|n| Ok(n + 1))
                .filter(|n| n % 2 == 0)
                .enumerate()
                .map(|item| Ok(item.value * item.index as i64))
                .count();
            let _ = black_box(result);
        })
    });

    group.bench_function("depth_4_boxed", |b| {
        b.iter(|| {
            let seq: BoxedSequence<'_, i64, DomainError> = range(0, 1000)
                .map(|n| Ok(n + 1))
                .filter(|n| n % 2 == 0)
                .enumerate()
                .map(|item| Ok(item.value * item.index as i64))
                .boxed();
            let _ = black_box(seq.count());
        })
    });

    group.finish();
}

criterion_group! {
    name = scaling_benches;
    config = configure_criterion();
    targets =
        bench_take_scaling,
        bench_combinator_depth_scaling,
}
