//! Benchmarks for the settlement engine.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- group_size
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use group_settle::types::Amount;
use group_settle::{net, Balance, SettlementEngine};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS - Deterministic group generation
// ============================================================================

/// Generate a balanced group of `members` with cent-level balances.
fn generate_group(members: usize, seed: u64) -> Vec<Balance> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut balances = Vec::with_capacity(members);
    let mut sum = 0i64;

    for i in 0..members.saturating_sub(1) {
        // -1000.00 to +1000.00 in cents, scaled to fixed-point
        let raw = rng.gen_range(-100_000i64..=100_000) * 1_000_000;
        sum += raw;
        balances.push(Balance::new(format!("m{i}"), format!("Member {i}"), Amount::from_raw(raw)));
    }
    balances.push(Balance::new(
        format!("m{}", members.saturating_sub(1)),
        "Last",
        Amount::from_raw(-sum),
    ));

    balances
}

// ============================================================================
// BENCHMARK: Typical friend group
// ============================================================================

fn bench_small_group(c: &mut Criterion) {
    let balances = generate_group(8, 42);
    let engine = SettlementEngine::new();

    c.bench_function("settle_8_members", |b| {
        b.iter(|| black_box(engine.settle(black_box(&balances))))
    });
}

// ============================================================================
// BENCHMARK: Scaling with group size
// ============================================================================

fn bench_group_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_size");
    let epsilon = SettlementEngine::new().config().epsilon;

    for &size in &[10usize, 100, 1_000, 10_000] {
        let balances = generate_group(size, 7);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("net", size), &balances, |b, balances| {
            b.iter(|| black_box(net(balances, epsilon)))
        });

        group.bench_with_input(BenchmarkId::new("settle", size), &balances, |b, balances| {
            let engine = SettlementEngine::new();
            b.iter(|| black_box(engine.settle(balances)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_small_group, bench_group_size);
criterion_main!(benches);
