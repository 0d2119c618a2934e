//! Benchmarks for ADFGVX cipher operations.
//!
//! Measures square construction, end-to-end encrypt/decrypt throughput, and
//! how transposition cost scales with the transposition key width.

use adfgvx::{decrypt, detranspose, encrypt, transpose, Square, Variant};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Square key used consistently across all benchmarks.
const BENCH_SQUARE_KEY: &str = "PH0QG64MEA1YL2NOFDXKR3CVS5ZW7BJ9UTI8";

/// Transposition key used consistently across all benchmarks.
const BENCH_TRANSPOSITION_KEY: &str = "PROVIDENCE";

/// Plaintext repeated to build the benchmark message.
const BENCH_SENTENCE: &str = "Attack at dawn from the northern ridge 0600 ";

fn bench_message(repeats: usize) -> String {
    BENCH_SENTENCE.repeat(repeats)
}

/// Benchmarks `Square::build()` for both variants.
fn bench_square_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("square_build");
    for variant in [Variant::Adfgx, Variant::Adfgvx] {
        group.bench_with_input(
            BenchmarkId::from_parameter(variant),
            &variant,
            |b, &variant| {
                b.iter(|| Square::build(black_box(BENCH_SQUARE_KEY), variant));
            },
        );
    }
    group.finish();
}

/// Benchmarks full `encrypt()` and `decrypt()` on a ~4 KiB message.
fn bench_round_trip(c: &mut Criterion) {
    let message = bench_message(100);
    let encrypted = encrypt(
        &message,
        BENCH_SQUARE_KEY,
        BENCH_TRANSPOSITION_KEY,
        Variant::Adfgvx,
    )
    .unwrap();

    let mut group = c.benchmark_group("adfgvx");
    group.throughput(Throughput::Bytes(message.len() as u64));

    group.bench_function("encrypt", |b| {
        b.iter(|| {
            encrypt(
                black_box(&message),
                BENCH_SQUARE_KEY,
                BENCH_TRANSPOSITION_KEY,
                Variant::Adfgvx,
            )
            .unwrap()
        });
    });

    group.bench_function("decrypt", |b| {
        b.iter(|| {
            decrypt(
                black_box(&encrypted.result),
                BENCH_SQUARE_KEY,
                BENCH_TRANSPOSITION_KEY,
                Variant::Adfgvx,
            )
            .unwrap()
        });
    });

    group.finish();
}

/// Benchmarks `transpose()`/`detranspose()` across key widths.
fn bench_transposition_key_scaling(c: &mut Criterion) {
    let stream = "ADFGVX".repeat(1000);
    let keys: &[&str] = &["KEY", "PROVIDENCE", "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG"];

    let mut group = c.benchmark_group("transposition_key_scaling");
    group.throughput(Throughput::Bytes(stream.len() as u64));

    for &key in keys {
        let cipher = transpose(&stream, key).unwrap();
        group.bench_with_input(BenchmarkId::new("transpose", key.len()), &key, |b, &key| {
            b.iter(|| transpose(black_box(&stream), key).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("detranspose", key.len()), &key, |b, &key| {
            b.iter(|| detranspose(black_box(&cipher), key, cipher.len()).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_square_build,
    bench_round_trip,
    bench_transposition_key_scaling,
);
criterion_main!(benches);
