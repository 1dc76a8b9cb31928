//! Per-asset return formula.
//!
//! ## Standard path
//!
//! ```text
//! r = mu + b_gdp * d_growth + b_inf * d_inflation + b_rates * d_rate
//!        + b_equity * equity_level + noise
//! ```
//!
//! ## Duration path
//!
//! ```text
//! r = rate_level                  carry
//!   - duration * d_rate           mark-to-market from the rate change
//!   + b_gdp * d_growth            credit-spread proxy
//!   + noise
//! ```
//!
//! The expected return and the inflation and equity loadings are not used on
//! the duration path; the bond's exposure to those channels is carried by the
//! rate and growth terms.
//!
//! Every result is clamped to [`ReturnBounds`].

use macro_core::math::ReturnBounds;
use macro_core::rng::RandomSource;
use macro_core::types::RngError;
use macro_models::assets::{Asset, AssetRegistry, PricingKind};
use macro_models::macro_state::{MacroDeltas, MacroState};
use rayon::prelude::*;
use serde::Serialize;

use super::AssetReturns;

/// Mark-to-market price effect of a rate change on a duration-priced asset.
///
/// # Examples
///
/// ```
/// use macro_pricing::returns::duration_effect;
///
/// assert!((duration_effect(8.5, 0.015) + 0.1275).abs() < 1e-15);
/// ```
#[inline]
pub fn duration_effect(duration: f64, delta_rate: f64) -> f64 {
    -duration * delta_rate
}

/// Additive breakdown of one unclamped return.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ReturnComponents {
    /// Expected return (standard) or current rate level (duration)
    pub base: f64,
    /// `-duration * d_rate`; zero on the standard path
    pub duration_effect: f64,
    /// Sum of the applied loading terms
    pub factor_impact: f64,
    /// Idiosyncratic noise (sigma * z)
    pub noise: f64,
}

impl ReturnComponents {
    /// Unclamped total.
    pub fn raw(&self) -> f64 {
        self.base + self.duration_effect + self.factor_impact + self.noise
    }
}

/// Stateless return engine.
///
/// Pricing only reads the asset, the period's deltas and the macro state,
/// so assets of the same period can be priced concurrently.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReturnEngine {
    bounds: ReturnBounds,
}

impl ReturnEngine {
    /// Engine with the standard `[-90%, +300%]` bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom bounds.
    pub fn with_bounds(bounds: ReturnBounds) -> Self {
        Self { bounds }
    }

    /// Clamp bounds in use.
    pub fn bounds(&self) -> ReturnBounds {
        self.bounds
    }

    /// Break a return into its components for a given noise value.
    pub fn decompose(
        &self,
        asset: &Asset,
        deltas: &MacroDeltas,
        rate_level: f64,
        noise: f64,
    ) -> ReturnComponents {
        let b = &asset.loadings;
        match asset.pricing {
            PricingKind::Standard => ReturnComponents {
                base: asset.expected_return,
                duration_effect: 0.0,
                factor_impact: b.gdp * deltas.growth
                    + b.inflation * deltas.inflation
                    + b.rates * deltas.rate
                    + b.equity * deltas.equity_level,
                noise,
            },
            PricingKind::DurationBased { duration } => ReturnComponents {
                base: rate_level,
                duration_effect: duration_effect(duration, deltas.rate),
                factor_impact: b.gdp * deltas.growth,
                noise,
            },
        }
    }

    /// Deterministic core: price with an explicit noise value.
    pub fn price_with_noise(
        &self,
        asset: &Asset,
        deltas: &MacroDeltas,
        rate_level: f64,
        noise: f64,
    ) -> f64 {
        self.bounds
            .clamp(self.decompose(asset, deltas, rate_level, noise).raw())
    }

    /// Price one asset, drawing its idiosyncratic noise from `rng`.
    ///
    /// Consumes exactly one normal draw, scaled by the asset's volatility.
    pub fn price_asset<R: RandomSource + ?Sized>(
        &self,
        asset: &Asset,
        deltas: &MacroDeltas,
        state: &MacroState,
        rng: &mut R,
    ) -> Result<f64, RngError> {
        let z = rng.next_normal()?;
        Ok(self.price_with_noise(asset, deltas, state.rate_level(), asset.volatility * z))
    }

    /// Price every asset of `registry` for one period.
    ///
    /// Noise is drawn sequentially in registry order (one normal per asset), so
    /// results are reproducible for a seeded source; the pricing itself runs in
    /// parallel.
    pub fn price_universe<R: RandomSource + ?Sized>(
        &self,
        registry: &AssetRegistry,
        deltas: &MacroDeltas,
        state: &MacroState,
        rng: &mut R,
    ) -> Result<AssetReturns, RngError> {
        let mut z = vec![0.0; registry.len()];
        rng.fill_normal(&mut z)?;

        let rate_level = state.rate_level();
        let entries: Vec<(String, f64)> = registry
            .as_slice()
            .par_iter()
            .zip(z.par_iter())
            .map(|(asset, &z)| {
                let value = self.price_with_noise(asset, deltas, rate_level, asset.volatility * z);
                (asset.name.clone(), value)
            })
            .collect();

        Ok(AssetReturns::from_entries(entries))
    }
}

/// Price one asset with a default engine (`[-90%, +300%]` bounds).
pub fn price_asset<R: RandomSource + ?Sized>(
    asset: &Asset,
    deltas: &MacroDeltas,
    state: &MacroState,
    rng: &mut R,
) -> Result<f64, RngError> {
    ReturnEngine::default().price_asset(asset, deltas, state, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use macro_core::math::{RETURN_CAP, RETURN_FLOOR};
    use macro_core::rng::ScriptedSource;
    use macro_models::assets::{AssetClass, FactorLoadings};
    use macro_models::macro_state::MacroParams;
    use proptest::prelude::*;

    fn equity(beta_equity: f64) -> Asset {
        Asset::new("Eq", AssetClass::Equity, 0.07, 0.15)
            .with_loadings(FactorLoadings::new(1.0, 0.1, -0.45, beta_equity))
    }

    fn bond(duration: f64, beta_gdp: f64) -> Asset {
        Asset::new("Bond", AssetClass::Bonds, 0.035, 0.06)
            .with_loadings(FactorLoadings::new(beta_gdp, -0.6, -0.9, 0.5))
            .with_duration(duration)
    }

    #[test]
    fn test_duration_effect_matches_hand_calculation() {
        assert_abs_diff_eq!(duration_effect(8.5, 0.015), -0.1275, epsilon = 1e-15);
        assert_eq!(duration_effect(7.0, 0.0), 0.0);
        assert_abs_diff_eq!(duration_effect(5.0, -0.01), 0.05, epsilon = 1e-15);
    }

    #[test]
    fn test_standard_path_formula() {
        let engine = ReturnEngine::new();
        let asset = equity(1.0);
        let deltas = MacroDeltas {
            growth: 0.01,
            inflation: 0.02,
            rate: -0.005,
            equity_level: 0.10,
        };
        let expected = 0.07 + 1.0 * 0.01 + 0.1 * 0.02 + (-0.45) * (-0.005) + 1.0 * 0.10 + 0.003;
        let r = engine.price_with_noise(&asset, &deltas, 0.99, 0.003);
        assert_abs_diff_eq!(r, expected, epsilon = 1e-15);
    }

    #[test]
    fn test_duration_path_ignores_mu_inflation_and_equity() {
        let engine = ReturnEngine::new();
        let asset = bond(8.5, -0.10);
        let deltas = MacroDeltas {
            growth: 0.01,
            inflation: 0.05,
            rate: 0.015,
            equity_level: 0.30,
        };
        let c = engine.decompose(&asset, &deltas, 0.045, 0.0);
        assert_eq!(c.base, 0.045);
        assert_abs_diff_eq!(c.duration_effect, -0.1275, epsilon = 1e-15);
        assert_abs_diff_eq!(c.factor_impact, -0.001, epsilon = 1e-15);
        assert_abs_diff_eq!(c.raw(), 0.045 - 0.1275 - 0.001, epsilon = 1e-15);
    }

    #[test]
    fn test_price_asset_scales_draw_by_volatility() {
        let engine = ReturnEngine::new();
        let asset = equity(1.0);
        let state = MacroState::new(MacroParams::default()).unwrap();
        let mut rng = ScriptedSource::new(vec![2.0]);
        let r = engine
            .price_asset(&asset, &MacroDeltas::neutral(), &state, &mut rng)
            .unwrap();
        assert_abs_diff_eq!(r, 0.07 + 0.15 * 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_price_asset_surfaces_exhaustion() {
        let state = MacroState::new(MacroParams::default()).unwrap();
        let mut rng = ScriptedSource::new(Vec::new());
        let err = price_asset(&equity(1.0), &MacroDeltas::neutral(), &state, &mut rng).unwrap_err();
        assert_eq!(err, RngError::Exhausted { supplied: 0 });
    }

    #[test]
    fn test_extreme_draws_are_clamped() {
        let engine = ReturnEngine::new();
        let asset = equity(1.0);
        let deltas = MacroDeltas::neutral();
        assert_eq!(engine.price_with_noise(&asset, &deltas, 0.03, -5.0), RETURN_FLOOR);
        assert_eq!(engine.price_with_noise(&asset, &deltas, 0.03, 10.0), RETURN_CAP);
    }

    #[test]
    fn test_synchronised_equities() {
        let engine = ReturnEngine::new();
        let deltas = MacroDeltas {
            equity_level: -0.25,
            ..MacroDeltas::neutral()
        };
        let baseline = MacroDeltas::neutral();
        for beta in [0.3, 0.9, 1.2] {
            let asset = equity(beta);
            let moved = engine.price_with_noise(&asset, &deltas, 0.03, 0.0);
            let base = engine.price_with_noise(&asset, &baseline, 0.03, 0.0);
            assert!(moved < base, "beta {} should fall with the equity factor", beta);
        }
    }

    #[test]
    fn test_negative_betas_move_against_equity_factor() {
        let engine = ReturnEngine::new();
        let baseline = MacroDeltas::neutral();
        for equity_level in [-0.25, 0.25] {
            let deltas = MacroDeltas {
                equity_level,
                ..MacroDeltas::neutral()
            };
            let moves: Vec<f64> = [-0.15, -0.4, -1.0]
                .into_iter()
                .map(|beta| {
                    let asset = equity(beta);
                    engine.price_with_noise(&asset, &deltas, 0.03, 0.0)
                        - engine.price_with_noise(&asset, &baseline, 0.03, 0.0)
                })
                .collect();
            for moved in moves {
                assert!(
                    moved * equity_level < 0.0,
                    "move {} should oppose equity level {}",
                    moved,
                    equity_level
                );
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// Output always lies in the clamp interval and equals the raw value inside it.
        #[test]
        fn prop_clamped_output(
            noise in -20.0_f64..20.0,
            d_rate in -0.2_f64..0.2,
            d_growth in -0.2_f64..0.2,
            duration in prop_oneof![Just(0.0), 0.5_f64..30.0],
        ) {
            let engine = ReturnEngine::new();
            let asset = bond(duration, 0.3);
            let deltas = MacroDeltas { growth: d_growth, inflation: 0.0, rate: d_rate, equity_level: 0.0 };
            let raw = engine.decompose(&asset, &deltas, 0.03, noise).raw();
            let r = engine.price_with_noise(&asset, &deltas, 0.03, noise);

            prop_assert!((RETURN_FLOOR..=RETURN_CAP).contains(&r));
            if (RETURN_FLOOR..=RETURN_CAP).contains(&raw) {
                prop_assert_eq!(r, raw);
            }
        }
    }
}
