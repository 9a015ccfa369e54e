use criterion::criterion_main;

mod consumers;
mod scaling;

criterion_main!(
    pipeline::pipeline_benches,
    scaling::scaling_benches,
    consumers::consumer_benches,
);
