//! Automaton engine benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dfakit_core::{Automaton, Definition, LabelledAutomaton, LabelledConfig, Symbol};
use std::sync::Arc;

/// A ring of `n` states where `next` advances and `stay` does not.
fn ring_config(n: usize) -> LabelledConfig {
    let mut config = LabelledConfig::new("state_0")
        .with_states((0..n).map(|i| format!("state_{}", i)))
        .with_alphabet(["next", "stay"])
        .with_final_states(["state_0"]);
    for i in 0..n {
        config = config
            .with_transition(
                format!("state_{}", i),
                "next",
                format!("state_{}", (i + 1) % n),
            )
            .with_transition(format!("state_{}", i), "stay", format!("state_{}", i));
    }
    config
}

fn ring_input(len: usize) -> Vec<Symbol> {
    (0..len)
        .map(|i| Symbol::from(if i % 3 == 0 { "stay" } else { "next" }))
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_construction");

    for &states in &[2usize, 20, 200] {
        group.bench_with_input(BenchmarkId::new("states", states), &states, |b, &n| {
            b.iter(|| black_box(Automaton::new(ring_config(n)).unwrap()))
        });
    }

    group.finish();
}

fn bench_consume(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_consume");

    let mut fsm: LabelledAutomaton = Automaton::new(ring_config(20)).unwrap();
    let next = Symbol::from("next");

    group.throughput(Throughput::Elements(1));
    group.bench_function("single_symbol", |b| {
        b.iter(|| black_box(fsm.consume(&next).unwrap()))
    });

    // Failure path: symbol outside the alphabet
    let unknown = Symbol::from("jump");
    group.bench_function("unknown_symbol", |b| {
        b.iter(|| black_box(fsm.consume(&unknown).is_err()))
    });

    group.finish();
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_run");

    let mut fsm: LabelledAutomaton = Automaton::new(ring_config(20)).unwrap();

    for &len in &[16usize, 256, 4096] {
        let input = ring_input(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("symbols", len), &input, |b, input| {
            b.iter(|| black_box(fsm.run(input).unwrap().clone()))
        });
    }

    group.finish();
}

fn bench_shared_definition(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_shared_definition");

    let definition = Arc::new(Definition::new(ring_config(20)).unwrap());
    let input = ring_input(256);

    group.bench_function("instance_per_run", |b| {
        b.iter(|| {
            let mut fsm = Automaton::from_definition(Arc::clone(&definition));
            black_box(fsm.run(&input).unwrap().clone())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_consume,
    bench_run,
    bench_shared_definition
);
criterion_main!(benches);
