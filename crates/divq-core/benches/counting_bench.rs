//! Benchmarks for quantum counting
//!
//! Run with: cargo bench -p divq-core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use divq_adapter_sim::SimulatorBackend;
use divq_core::{CountingConfig, DivisionSearch, MarkingOracle, Multiset, QuantumCounter, Readout};

/// Benchmark oracle construction
fn bench_oracle(c: &mut Criterion) {
    let x = Multiset::example();
    c.bench_function("oracle_matrix", |b| {
        b.iter(|| MarkingOracle::build(black_box(&x), black_box(4)).unwrap().matrix());
    });
}

/// Benchmark a single estimate across counting-register widths
fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");
    let backend = SimulatorBackend::new();
    let x = Multiset::example();

    for counting in &[4, 6, 8] {
        let config = CountingConfig::default().with_counting_qubits(*counting);
        let counter = QuantumCounter::new(&backend, &x, config).unwrap();
        group.bench_with_input(BenchmarkId::new("basis_state", counting), counting, |b, _| {
            b.iter(|| counter.estimate(black_box(4)).unwrap());
        });
    }

    let config = CountingConfig::default().with_readout(Readout::Marginal);
    let counter = QuantumCounter::new(&backend, &x, config).unwrap();
    group.bench_function("marginal", |b| {
        b.iter(|| counter.estimate(black_box(4)).unwrap());
    });

    group.finish();
}

/// Benchmark the full search
fn bench_search(c: &mut Criterion) {
    let backend = SimulatorBackend::new();
    let x = Multiset::example();
    let search = DivisionSearch::new(&backend, &x, CountingConfig::default()).unwrap();

    c.bench_function("search_example", |b| {
        b.iter(|| search.run().unwrap());
    });
}

criterion_group!(benches, bench_oracle, bench_estimate, bench_search);
criterion_main!(benches);
