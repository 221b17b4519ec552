// ============================================================================
// Transformation Pipeline Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. End-to-end - Full transform across input lengths
// 2. Division - Exact division as the dividend grows
// 3. Decoding - Left/right decoders on long digit runs
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use letter_ritual::numeric::Quotient;
use letter_ritual::pipeline::{decode_left, decode_right};
use letter_ritual::prelude::*;
use std::hint::black_box;

// ============================================================================
// End-to-end Benchmarks
// ============================================================================

fn benchmark_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let transformer = Transformer::default();

    for len in [4usize, 64, 1024].iter() {
        let left: String = (0..*len).map(|i| (b'A' + (i % 26) as u8) as char).collect();
        let right: String = left.chars().rev().collect();

        group.bench_with_input(
            BenchmarkId::new("letters", len),
            &(&left, &right),
            |b, (left, right)| {
                b.iter(|| black_box(transformer.transform(black_box(7), left, right)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Division Benchmarks
// ============================================================================

fn benchmark_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("division");

    for digits in [20usize, 200, 2000].iter() {
        let dividend = "26".repeat(*digits / 2);

        group.bench_with_input(BenchmarkId::new("scale_20", digits), &dividend, |b, d| {
            b.iter(|| black_box(Quotient::divide(d, black_box(987_654_321), 20)));
        });
    }

    group.finish();
}

// ============================================================================
// Decoder Benchmarks
// ============================================================================

fn benchmark_decoders(c: &mut Criterion) {
    let digits = "0123456789".repeat(100);

    c.bench_function("decode_left_1000", |b| {
        b.iter(|| black_box(decode_left(black_box(&digits))));
    });

    c.bench_function("decode_right_1000", |b| {
        b.iter(|| black_box(decode_right(black_box(&digits))));
    });
}

criterion_group!(
    benches,
    benchmark_transform,
    benchmark_division,
    benchmark_decoders
);
criterion_main!(benches);
