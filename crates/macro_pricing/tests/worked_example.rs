//! Hand-calculated two-year scenario.

use approx::assert_abs_diff_eq;
use macro_core::rng::ScriptedSource;
use macro_models::assets::{Asset, AssetClass, AssetRegistry, FactorLoadings};
use macro_models::shocks::ShockVector;
use macro_pricing::returns::duration_effect;
use macro_pricing::simulation::{ShockSource, SimulationSession};

const BOND: &str = "Teaching Bond";

fn registry() -> AssetRegistry {
    AssetRegistry::new(vec![
        // Inflation and equity loadings are set to show they are ignored.
        Asset::new(BOND, AssetClass::Bonds, 0.04, 0.06)
            .with_loadings(FactorLoadings::new(-0.10, -0.60, -0.90, 0.50))
            .with_duration(8.5),
        Asset::new("Broad Equity", AssetClass::Equity, 0.07, 0.15)
            .with_loadings(FactorLoadings::new(1.0, 0.1, -0.45, 1.0)),
        Asset::new("Small Caps", AssetClass::Equity, 0.09, 0.22)
            .with_loadings(FactorLoadings::new(1.3, 0.0, -0.6, 1.4)),
        Asset::new("Gold Bullion", AssetClass::Metals, 0.045, 0.15)
            .with_loadings(FactorLoadings::new(-0.20, 0.80, -0.35, -0.15)),
        Asset::new("Tail Hedge", AssetClass::Commodities, 0.01, 0.10)
            .with_loadings(FactorLoadings::new(-0.30, 0.0, 0.0, -0.60)),
    ])
    .unwrap()
}

fn noise_free_session(periods: usize) -> SimulationSession<ScriptedSource> {
    let registry = registry();
    let draws = ScriptedSource::zeros(periods * registry.len());
    SimulationSession::with_defaults(registry, draws).unwrap()
}

#[test]
fn test_year_one_bond_return() {
    let mut session = noise_free_session(1);
    let outcome = session
        .run_period(ShockSource::Manual(ShockVector::new(0.01, 0.0, 0.0, 0.10)))
        .unwrap();

    let d = outcome.record.deltas;
    assert_abs_diff_eq!(d.growth, 0.01, epsilon = 1e-12);
    assert_abs_diff_eq!(d.inflation, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(d.rate, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(d.equity_level, 0.10, epsilon = 1e-12);

    // 3.0% carry + 0 rate move - 0.10 * 1.0% growth
    let bond = outcome.asset_return(BOND).unwrap();
    assert_abs_diff_eq!(bond, 0.029, epsilon = 1e-12);
}

#[test]
fn test_year_two_duration_effect() {
    let mut session = noise_free_session(2);
    session
        .run_period(ShockSource::Manual(ShockVector::new(0.01, 0.0, 0.0, 0.10)))
        .unwrap();
    let outcome = session
        .run_period(ShockSource::Manual(ShockVector::new(-0.005, 0.010, 0.015, -0.05)))
        .unwrap();

    let d = outcome.record.deltas;
    assert_abs_diff_eq!(d.rate, 0.015, epsilon = 1e-12);
    assert_abs_diff_eq!(d.growth, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(duration_effect(8.5, d.rate), -0.1275, epsilon = 1e-12);

    let levels = outcome.record.levels;
    assert_abs_diff_eq!(levels.rate, 0.045, epsilon = 1e-12);
    assert_abs_diff_eq!(levels.growth, 0.02, epsilon = 1e-12);

    // 4.5% carry - 12.75% mark-to-market + 0 spread
    let bond = outcome.asset_return(BOND).unwrap();
    assert_abs_diff_eq!(bond, 0.045 - 0.1275, epsilon = 1e-12);
    assert_eq!(session.year(), 2);
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_equities_move_together_on_equity_factor() {
    let mut flat = noise_free_session(1);
    let mut shocked = noise_free_session(1);

    let base = flat
        .run_period(ShockSource::Manual(ShockVector::zero()))
        .unwrap();
    let down = shocked
        .run_period(ShockSource::Manual(ShockVector::new(0.0, 0.0, 0.0, -0.20)))
        .unwrap();

    assert_eq!(down.record.deltas.growth, 0.0);
    assert_eq!(down.record.deltas.rate, 0.0);
    for name in ["Broad Equity", "Small Caps"] {
        let moved = down.asset_return(name).unwrap() - base.asset_return(name).unwrap();
        assert!(moved < 0.0, "{} should fall, moved {}", name, moved);
    }
    // Negative equity loadings rise together when the factor falls.
    for name in ["Gold Bullion", "Tail Hedge"] {
        let moved = down.asset_return(name).unwrap() - base.asset_return(name).unwrap();
        assert!(moved > 0.0, "{} should rise, moved {}", name, moved);
    }
    // The bond ignores its equity loading.
    assert_abs_diff_eq!(
        down.asset_return(BOND).unwrap(),
        base.asset_return(BOND).unwrap(),
        epsilon = 1e-15
    );
}
