//! Benchmarks for macro_pricing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use macro_core::rng::SimRng;
use macro_models::assets::AssetRegistry;
use macro_models::macro_state::{MacroDeltas, MacroParams, MacroState};
use macro_pricing::returns::ReturnEngine;
use macro_pricing::simulation::{ShockSource, SimulationSession};

fn benchmark_price_universe(c: &mut Criterion) {
    let registry = AssetRegistry::default_universe().unwrap();
    let state = MacroState::new(MacroParams::default()).unwrap();
    let engine = ReturnEngine::new();
    let deltas = MacroDeltas {
        growth: 0.01,
        inflation: -0.005,
        rate: 0.015,
        equity_level: 0.08,
    };
    let mut rng = SimRng::from_seed(42);

    c.bench_function("price_universe_default", |b| {
        b.iter(|| {
            engine
                .price_universe(black_box(&registry), black_box(&deltas), &state, &mut rng)
                .unwrap()
        })
    });
}

fn benchmark_run_period(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_periods");

    for years in [1u32, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(years), &years, |b, &years| {
            b.iter(|| {
                let registry = AssetRegistry::default_universe().unwrap();
                let mut session =
                    SimulationSession::with_defaults(registry, SimRng::from_seed(7)).unwrap();
                session
                    .run_periods(black_box(years), ShockSource::Random)
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_price_universe, benchmark_run_period);
criterion_main!(benches);
