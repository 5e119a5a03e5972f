//! Dead-code elimination and constant-folding pitfalls.
//!
//! `bad_*` results should land next to `nop` / `constant`; only `use_return`
//! and `use_black_box` measure an actual `ln`.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::f64::consts::PI;
use triangle_sum::pitfalls;

fn bench_pitfalls(c: &mut Criterion) {
    let mut group = c.benchmark_group("pitfalls");
    let pi = PI;

    group.bench_function("nop", |b| b.iter(pitfalls::nop));
    group.bench_function("constant", |b| b.iter(pitfalls::constant));
    group.bench_function("bad_ignored_const", |b| b.iter(pitfalls::bad_ignored_const));
    group.bench_function("bad_const_input", |b| b.iter(pitfalls::bad_const_input));
    group.bench_function("bad_ignored_computation", |b| {
        b.iter(|| pitfalls::bad_ignored_computation(black_box(pi)));
    });
    group.bench_function("use_return", |b| {
        b.iter(|| pitfalls::use_return(black_box(pi)));
    });
    // Several results in one body; each goes through black_box.
    group.bench_function("use_black_box", |b| {
        b.iter(|| {
            black_box(black_box(pi).ln());
            black_box(black_box(pi).log10());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pitfalls);
criterion_main!(benches);
