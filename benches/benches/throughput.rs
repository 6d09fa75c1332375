//! Firehose Criterion Throughput Benchmark
//!
//! The statistically rigorous rendition of the stdout benchmark pair:
//! the bespoke generator measured against ChaCha20 keystream generation
//! and the raw OS entropy source.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::ChaCha20Legacy;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use firehose::{EntropySource, Generator, OsEntropy};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

// =============================================================================
// BENCHMARK 1: 1 MIB STREAM UNIT
// =============================================================================

/// Producing one flush-sized buffer, the unit of the stream loop.
fn bench_stream_unit(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Stream-1MiB");
    group.throughput(Throughput::Bytes(MB as u64));
    group.sample_size(50);

    let mut generator = Generator::from_entropy(&mut OsEntropy).unwrap();
    let mut out = vec![0u8; MB];
    group.bench_function("firehose", |b| {
        b.iter(|| {
            generator.fill(&mut out);
            black_box(out.last().copied());
        });
    });

    let mut key = [0u8; 32];
    rand::rng().fill(&mut key[..]);
    let mut keystream = vec![0u8; MB];
    let mut nonce: u64 = 0;
    group.bench_function("chacha20-legacy", |b| {
        b.iter(|| {
            keystream.fill(0);
            let mut cipher = ChaCha20Legacy::new(&key.into(), &nonce.to_le_bytes().into());
            cipher.apply_keystream(&mut keystream);
            nonce = nonce.wrapping_add(1);
            black_box(keystream.last().copied());
        });
    });

    let mut raw = vec![0u8; MB];
    group.bench_function("os-entropy", |b| {
        b.iter(|| {
            OsEntropy.fill(&mut raw).unwrap();
            black_box(raw.last().copied());
        });
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 2: FILL SIZES
// =============================================================================

/// Generator fill throughput across request sizes (16 bytes per step).
fn bench_fill_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Fill-Sizes");

    let sizes = [
        (16, "16B"),
        (256, "256B"),
        (4 * KB, "4KB"),
        (64 * KB, "64KB"),
        (MB, "1MB"),
    ];

    let mut generator = Generator::from_entropy(&mut OsEntropy).unwrap();
    for (size, name) in sizes {
        let mut out = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &size,
            |b, _| {
                b.iter(|| {
                    generator.fill(&mut out);
                    black_box(out[0]);
                });
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: RESEED COST
// =============================================================================

/// Wholesale pool refresh from the OS (1024 bytes), paid every 100 ms of
/// streaming.
fn bench_reseed(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Reseed");
    group.throughput(Throughput::Bytes(1024));

    let mut generator = Generator::from_entropy(&mut OsEntropy).unwrap();
    group.bench_function("pool-refresh", |b| {
        b.iter(|| generator.reseed(&mut OsEntropy).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_stream_unit, bench_fill_sizes, bench_reseed);
criterion_main!(benches);
