use criterion::{criterion_group, criterion_main};


criterion_group!(benches, gate_bench::register_benchmarks);
criterion_main!(benches);
