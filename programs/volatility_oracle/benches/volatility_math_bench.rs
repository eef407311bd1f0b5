use anchor_lang::prelude::Pubkey;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;
use volatility_oracle::constants::{MAX_TICK, MIN_TICK, WAD};
use volatility_oracle::math::fixed_point::{floor_div, isqrt, ln_wad};
use volatility_oracle::math::tick_math::sqrt_ratio_at_tick;
use volatility_oracle::oracle_core;
use volatility_oracle::price_source::{Observation, ObservationFeed};
use volatility_oracle::state::{Accumulator, InitializeOracleParams, VolatilityOracle};
use volatility_oracle::twap::{quote_at_tick, twap};
use volatility_oracle::welford;

const DAY: u64 = 86_400;

fn pubkey(seed: u8) -> Pubkey {
    let mut bytes = [0u8; 32];
    bytes[0] = seed;
    Pubkey::new_from_array(bytes)
}

fn feed(tick: i32) -> ObservationFeed {
    ObservationFeed {
        token_mint_0: pubkey(10),
        token_mint_1: pubkey(11),
        mint_decimals_0: 9,
        mint_decimals_1: 6,
        observation_index: 1,
        observation_cardinality: 2,
        observations: vec![
            Observation {
                block_timestamp: 1_000,
                tick_cumulative: 0,
                initialized: true,
            },
            Observation {
                block_timestamp: 4_600,
                tick_cumulative: tick as i64 * 3_600,
                initialized: true,
            },
        ],
    }
}

// ========== Kernel Benchmarks ==========

fn bench_fixed_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_point");
    group.throughput(Throughput::Elements(1));

    for (name, x) in [
        ("one", WAD),
        ("one_percent_up", WAD + WAD / 100),
        ("half", WAD / 2),
        ("large", WAD * 1_000_000),
    ] {
        group.bench_with_input(BenchmarkId::new("ln_wad", name), &x, |b, x| {
            b.iter(|| black_box(ln_wad(black_box(*x))));
        });
    }

    group.bench_function("floor_div_negative", |b| {
        b.iter(|| black_box(floor_div(black_box(-7_200_001), black_box(3_600))));
    });

    group.bench_function("isqrt_u128_max", |b| {
        b.iter(|| black_box(isqrt(black_box(u128::MAX))));
    });

    group.finish();
}

fn bench_tick_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_math");

    let mut rng = StdRng::seed_from_u64(42);
    let ticks: Vec<i32> = (0..100)
        .map(|_| rng.random_range(MIN_TICK..=MAX_TICK))
        .collect();

    group.bench_function("sqrt_ratio_at_tick_batch", |b| {
        b.iter_batched(
            || ticks.clone(),
            |ticks| {
                for tick in ticks {
                    let _ = black_box(sqrt_ratio_at_tick(tick));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("quote_at_tick_batch", |b| {
        b.iter_batched(
            || ticks.clone(),
            |ticks| {
                for tick in ticks {
                    let _ = black_box(quote_at_tick(tick, 1_000_000_000, tick % 2 == 0));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_welford(c: &mut Criterion) {
    let mut group = c.benchmark_group("welford");

    let mut rng = StdRng::seed_from_u64(7);
    let samples: Vec<i128> = (0..365)
        .map(|_| rng.random_range(-10_000_000i128..10_000_000))
        .collect();

    group.throughput(Throughput::Elements(samples.len() as u64));
    group.bench_function("one_year_of_daily_samples", |b| {
        b.iter(|| {
            let mut state = welford::WelfordState::default();
            for sample in &samples {
                state = welford::update(state.count, state.mean, state.dsq, *sample, 30)
                    .unwrap_or(state);
            }
            black_box(welford::stdev(state.count, state.dsq))
        });
    });

    group.finish();
}

// ========== Commit Flow ==========

fn bench_commit_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit_flow");

    let mut oracle = VolatilityOracle::default();
    if oracle
        .initialize(InitializeOracleParams {
            bump: 255,
            pool: pubkey(1),
            price_program: pubkey(2),
            base_mint: pubkey(10),
            quote_mint: pubkey(11),
            base_decimals: 9,
            period: DAY as u32,
            window_size: 30,
        })
        .is_err()
    {
        return;
    }

    let feed = feed(100);

    group.bench_function("twap", |b| {
        b.iter(|| black_box(twap(&feed, &pubkey(10), 9)));
    });

    group.bench_function("commit", |b| {
        b.iter_batched(
            Accumulator::default,
            |mut accumulator| {
                black_box(oracle_core::commit(
                    &oracle,
                    pubkey(3),
                    &mut accumulator,
                    &feed,
                    20 * DAY,
                    pubkey(4),
                ))
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(kernels, bench_fixed_point, bench_tick_math, bench_welford);

criterion_group!(realistic_scenarios, bench_commit_flow);

criterion_main!(kernels, realistic_scenarios);
