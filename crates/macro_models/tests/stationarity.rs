//! Long-run behaviour of the macro process driven by the shock generator.

use macro_core::rng::SimRng;
use macro_models::macro_state::{MacroParams, MacroState};
use macro_models::shocks::{ShockGenerator, ShockVolatilities};

/// Stationary AR(1) std-dev: sigma / sqrt(1 - phi^2).
fn stationary_std(sigma: f64, phi: f64) -> f64 {
    sigma / (1.0 - phi * phi).sqrt()
}

#[test]
fn test_long_run_moments_match_ar1_theory() {
    let params = MacroParams::default();
    let vols = ShockVolatilities::default();
    let generator = ShockGenerator::with_defaults().unwrap();
    let mut state = MacroState::new(params).unwrap();
    let mut rng = SimRng::from_seed(11);

    // Burn in, then sample.
    for _ in 0..500 {
        state.advance(&generator.draw(&mut rng).unwrap());
    }

    let n = 100_000;
    let mut rates = Vec::with_capacity(n);
    let mut equity = Vec::with_capacity(n);
    for _ in 0..n {
        state.advance(&generator.draw(&mut rng).unwrap());
        rates.push(state.levels().rate);
        equity.push(state.levels().equity);
    }

    let mean = |xs: &[f64]| xs.iter().sum::<f64>() / xs.len() as f64;
    let std = |xs: &[f64]| {
        let m = mean(xs);
        (xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / xs.len() as f64).sqrt()
    };

    assert!((mean(&rates) - params.rate.long_run_mean).abs() < 0.002);
    assert!(mean(&equity).abs() < 0.01);

    let expected_rate_std = stationary_std(vols.rate, params.rate.persistence);
    let expected_equity_std = stationary_std(vols.equity, params.equity.persistence);
    assert!((std(&rates) / expected_rate_std - 1.0).abs() < 0.05);
    assert!((std(&equity) / expected_equity_std - 1.0).abs() < 0.05);
}

#[test]
fn test_same_seed_same_macro_path() {
    let generator = ShockGenerator::with_defaults().unwrap();
    let run = |seed| {
        let mut state = MacroState::new(MacroParams::default()).unwrap();
        let mut rng = SimRng::from_seed(seed);
        (0..25)
            .map(|_| state.advance(&generator.draw(&mut rng).unwrap()))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(99), run(99));
    assert_ne!(run(99), run(100));
}
