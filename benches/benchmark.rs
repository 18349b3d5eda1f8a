//! Benchmarks for dialcipher operations.
//!
//! Measures cipher derivation from the dials, digit-stream extraction and
//! message throughput across different message lengths.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dialcipher::random::digit_stream::generate;
use dialcipher::{DialCipher, Dials};

/// Sample sentence repeated to build benchmark messages.
const BENCH_TEXT: &str = "The quick brown fox jumps over 13 lazy dogs at 4:05 PM! ";

fn bench_dials() -> Dials {
    Dials::new(1, 2, 3).unwrap()
}

/// Benchmarks `DialCipher::new()`.
///
/// Covers both entropy formulas, three digit streams and the two
/// pairing builds.
fn bench_cipher_init(c: &mut Criterion) {
    c.bench_function("cipher_init", |b| {
        b.iter(|| DialCipher::new(black_box(bench_dials())));
    });
}

/// Benchmarks extraction of a 13-pair digit stream.
fn bench_digit_stream(c: &mut Criterion) {
    c.bench_function("digit_stream_13", |b| {
        b.iter(|| generate(black_box(13.359_075_877_266_633), 13));
    });
}

/// Benchmarks `apply()` throughput across message sizes.
fn bench_apply_scaling(c: &mut Criterion) {
    let cipher = DialCipher::new(bench_dials());
    let sizes: &[usize] = &[1, 16, 256];

    let mut group = c.benchmark_group("apply_scaling");
    for &repeats in sizes {
        let message = BENCH_TEXT.repeat(repeats);
        group.throughput(Throughput::Bytes(message.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(message.len()),
            &message,
            |b, message| {
                b.iter(|| cipher.apply(black_box(message)));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_cipher_init,
    bench_digit_stream,
    bench_apply_scaling,
);
criterion_main!(benches);
