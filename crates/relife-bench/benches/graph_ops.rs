//! Criterion micro-benchmarks for dependency graph propagation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use relife_graph::{Graph, Var};

/// `len` derived nodes in a chain over one variable.
fn chain(len: usize) -> (Graph<u64>, Var) {
    let mut g = Graph::with_capacity(len + 1);
    let root = g.create_variable(0u64);
    let mut prev = root.id();
    for _ in 0..len {
        prev = g
            .create_derived(&[prev], |v: &[u64]| v[0].wrapping_add(1))
            .unwrap()
            .id();
    }
    (g, root)
}

/// One variable fanning out to `width` derived nodes joined by one sink.
fn fan(width: usize) -> (Graph<u64>, Var) {
    let mut g = Graph::with_capacity(width + 2);
    let root = g.create_variable(0u64);
    let mids: Vec<_> = (0..width as u64)
        .map(|k| {
            g.create_derived(&[root.id()], move |v: &[u64]| v[0] ^ k)
                .unwrap()
                .id()
        })
        .collect();
    g.create_derived(&mids, |v: &[u64]| v.iter().fold(0, |a, &b| a ^ b))
        .unwrap();
    (g, root)
}

fn bench_propagation(c: &mut Criterion) {
    let (mut g, root) = chain(1_000);
    let mut n = 0u64;
    c.bench_function("chain_1000_commit", |b| {
        b.iter(|| {
            n += 1;
            black_box(g.run_transaction(|tx| tx.write(root, n)))
        });
    });

    let (mut g, root) = fan(1_000);
    let mut n = 0u64;
    c.bench_function("fan_1000_commit", |b| {
        b.iter(|| {
            n += 1;
            black_box(g.run_transaction(|tx| tx.write(root, n)))
        });
    });

    let (mut g, root) = chain(1_000);
    c.bench_function("chain_1000_unchanged_write", |b| {
        b.iter(|| black_box(g.run_transaction(|tx| tx.write(root, 0))));
    });
}

criterion_group!(benches, bench_propagation);
criterion_main!(benches);
