//! Benchmarks for the reconcile engine.
//!
//! Run with: cargo bench -p reel-widgets

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use reel_widgets::{Engine, FILL_DELAY};
use std::hint::black_box;

fn settled_engine(value: i64) -> Engine {
    let mut engine = Engine::new();
    engine.set_target(Some(value));
    engine.tick(FILL_DELAY);
    engine
}

fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile/fill");

    for (label, from, to) in [
        ("1digit", 7i64, 8i64),
        ("4digit", 1234, 1235),
        ("12digit", 111_111_111_111, 999_999_999_999),
    ] {
        group.bench_with_input(BenchmarkId::new("step", label), &(), |b, _| {
            let base = settled_engine(from);
            b.iter(|| {
                let mut engine = base.clone();
                black_box(engine.set_target(Some(to)));
            })
        });
    }

    group.finish();
}

fn bench_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile/growth");

    for width in [2usize, 8, 16] {
        let target = 10i64.pow(width as u32 - 1);
        group.bench_with_input(
            BenchmarkId::new("allocate_then_fill", width),
            &(),
            |b, _| {
                b.iter(|| {
                    let mut engine = Engine::new();
                    black_box(engine.set_target(Some(target)));
                    black_box(engine.tick(FILL_DELAY));
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_fill, bench_growth);
criterion_main!(benches);
