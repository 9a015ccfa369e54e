use crate::common::{calibrate, configure_criterion, realistic_readings, DomainError};
use criterion::{criterion_group, Criterion};
use seq_rail::prelude::*;
use std::hint::black_box;

pub fn bench_short_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("consumers/short_circuit");

    group.bench_function("any_early_match", |b| {
        b.iter(|| {
            let result = from_slice::<_, DomainError>(realistic_readings()).any(|r| r.value > 900);
            let _ = black_box(result);
        })
    });

    group.bench_function("find_late_match", |b| {
        b.iter(|| {
            let result =
                from_slice::<_, DomainError>(realistic_readings()).find(|r| r.sensor_id == 9_999);
            let _ = black_box(result);
        })
    });

    group.bench_function("last_full_drain", |b| {
        b.iter(|| {
            let result = from_slice::<_, SequenceError>(realistic_readings()).last();
            let _ = black_box(result);
        })
    });

    group.finish();
}

pub fn bench_error_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("consumers/error_paths");

    group.bench_function("fold_keeps_partial", |b| {
        b.iter(|| {
            let result = from_slice(realistic_readings())
                .map(calibrate)
                .fold(0i64, |acc, v| acc + v);
            let _ = black_box(result);
        })
    });

    group.bench_function("collect_discards_partial", |b| {
        b.iter(|| {
            let result = from_slice(realistic_readings()).map(calibrate).collect();
            let _ = black_box(result);
        })
    });

    group.bench_function("join_labels", |b| {
        b.iter(|| {
            let result = from_slice::<_, DomainError>(realistic_readings())
                .take(500)
                .map(|r| Ok(r.label.as_str()))
                .join(",");
            let _ = black_box(result);
        })
    });

    group.finish();
}

criterion_group! {
    name = consumer_benches;
    config = configure_criterion();
    targets =
        bench_short_circuit,
        bench_error_paths,
}
