//! Benchmarks for ringstats structures
//!
//! Run with: cargo bench --features full

// Require all features for benchmarks
#[cfg(not(all(
    feature = "buffer",
    feature = "statistics",
    feature = "frequency",
    feature = "sync"
)))]
compile_error!("Benchmarks require all features. Run: cargo bench --features full");

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ringstats::buffer::RingBuffer;
use ringstats::frequency::{FrequencyCounter, SharedCounter};
use ringstats::statistics::MovingAverage;

// ============================================================================
// Ring Buffer Benchmarks
// ============================================================================

fn bench_ring_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_buffer");
    group.throughput(Throughput::Elements(1));

    for capacity in [16, 1024, 65_536] {
        group.bench_function(format!("push_cap{}", capacity), |b| {
            let mut ring = RingBuffer::new(capacity).unwrap();
            let mut i = 0u64;
            b.iter(|| {
                black_box(ring.push(i));
                i = i.wrapping_add(1);
            });
        });
    }

    group.bench_function("to_vec_1024", |b| {
        let mut ring = RingBuffer::new(1024).unwrap();
        ring.extend(0..5_000u64);
        b.iter(|| black_box(ring.to_vec()));
    });

    group.finish();
}

// ============================================================================
// Moving Average Benchmarks
// ============================================================================

fn bench_moving_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_average");
    group.throughput(Throughput::Elements(1));

    for window in [10, 1000] {
        group.bench_function(format!("add_w{}", window), |b| {
            let mut avg = MovingAverage::new(window).unwrap();
            let mut x = 0.0f64;
            b.iter(|| {
                x += 0.5;
                black_box(avg.add(x));
            });
        });
    }

    group.bench_function("average", |b| {
        let mut avg = MovingAverage::new(1000).unwrap();
        avg.extend((0..10_000).map(|i| i as f64));
        b.iter(|| black_box(avg.average()));
    });

    group.finish();
}

// ============================================================================
// Frequency Counter Benchmarks
// ============================================================================

fn bench_frequency_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequency_counter");

    group.throughput(Throughput::Elements(1));
    group.bench_function("increment", |b| {
        let mut counter = FrequencyCounter::new();
        let mut i = 0u64;
        b.iter(|| {
            black_box(counter.increment(i % 10_000));
            i = i.wrapping_add(1);
        });
    });

    // Zipf-like key distribution
    let mut counter = FrequencyCounter::new();
    for rank in 1..=10_000u64 {
        counter.add_count(rank, 100_000 / rank);
    }

    group.throughput(Throughput::Elements(counter.distinct() as u64));
    for k in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("top_k", k), &k, |b, &k| {
            b.iter(|| black_box(counter.top_k(k).unwrap()));
        });
    }

    group.finish();
}

fn bench_shared_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared_counter");
    group.throughput(Throughput::Elements(1));

    group.bench_function("increment_uncontended", |b| {
        let counter = SharedCounter::new();
        let mut i = 0u64;
        b.iter(|| {
            black_box(counter.increment(i % 1000));
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ring_buffer,
    bench_moving_average,
    bench_frequency_counter,
    bench_shared_counter,
);
criterion_main!(benches);
