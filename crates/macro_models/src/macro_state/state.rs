//! Persistent macro state and its mean-reverting update rule.
//!
//! ## Update rule
//!
//! ```text
//! growth, inflation, rate:  x(t) = mu + phi * (x(t-1) - mu) + shock
//! equity:                   e(t) = mu_e + phi_e * e(t-1) + shock
//! ```
//!
//! ## Reported deltas
//!
//! Growth and inflation deltas are measured against the long-run mean
//! ("how far from normal is the economy"), which is what asset betas are
//! calibrated against. The rate delta is measured against the previous
//! period's level, because duration pricing needs the period-over-period
//! change. The equity channel reports its new level as-is.
//!
//! This asymmetry is a modelling decision and must not be normalised away.

use serde::{Deserialize, Serialize};

use super::channels::MacroParams;
use crate::shocks::ShockVector;
use macro_core::types::ConfigError;

/// Current levels of the four macro channels.
///
/// Serialisable so sessions can be snapshotted and restored. Missing fields
/// deserialise as NaN and are replaced by long-run means in
/// [`MacroState::restore`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MacroLevels {
    /// GDP growth level
    #[serde(default = "missing_level")]
    pub growth: f64,
    /// Inflation level
    #[serde(default = "missing_level")]
    pub inflation: f64,
    /// Policy rate level
    #[serde(default = "missing_level")]
    pub rate: f64,
    /// Equity factor level (zero-centred)
    #[serde(default = "missing_level")]
    pub equity: f64,
}

fn missing_level() -> f64 {
    f64::NAN
}

impl MacroLevels {
    /// Long-run means of `params`.
    pub fn long_run(params: &MacroParams) -> Self {
        Self {
            growth: params.growth.long_run_mean,
            inflation: params.inflation.long_run_mean,
            rate: params.rate.long_run_mean,
            equity: params.equity.long_run_mean,
        }
    }
}

/// Output of one macro update, consumed by the return engine for that period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroDeltas {
    /// New growth level minus long-run growth mean
    pub growth: f64,
    /// New inflation level minus long-run inflation mean
    pub inflation: f64,
    /// New rate level minus previous rate level
    pub rate: f64,
    /// New equity factor level
    pub equity_level: f64,
}

impl MacroDeltas {
    /// All-zero deltas, for pricing without a macro update.
    pub const fn neutral() -> Self {
        Self {
            growth: 0.0,
            inflation: 0.0,
            rate: 0.0,
            equity_level: 0.0,
        }
    }
}

/// Macro state of one simulation session.
///
/// Exclusively owned by its session; mutated exactly once per simulated
/// period through [`MacroState::advance`] and read by the return engine
/// for the current rate level.
///
/// # Examples
///
/// ```
/// use macro_models::macro_state::{MacroParams, MacroState};
/// use macro_models::shocks::ShockVector;
///
/// let mut state = MacroState::new(MacroParams::default()).unwrap();
/// let deltas = state.advance(&ShockVector::new(0.01, 0.0, 0.0, 0.10));
///
/// assert!((deltas.growth - 0.01).abs() < 1e-12);
/// assert_eq!(deltas.rate, 0.0);
/// assert!((deltas.equity_level - 0.10).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MacroState {
    params: MacroParams,
    levels: MacroLevels,
}

impl MacroState {
    /// Create a state at the long-run means of `params`.
    ///
    /// # Errors
    ///
    /// `ConfigError` if any channel's persistence lies outside `[0, 1)`.
    pub fn new(params: MacroParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            levels: MacroLevels::long_run(&params),
            params,
        })
    }

    /// Create a state starting from explicit levels.
    pub fn with_levels(params: MacroParams, levels: MacroLevels) -> Result<Self, ConfigError> {
        let mut state = Self::new(params)?;
        state.set_levels(levels)?;
        Ok(state)
    }

    /// Restore a state from an optional snapshot.
    ///
    /// Channels missing from the snapshot (NaN) fall back to their long-run mean;
    /// no snapshot at all yields a fresh state.
    pub fn restore(params: MacroParams, snapshot: Option<MacroLevels>) -> Result<Self, ConfigError> {
        let mut state = Self::new(params)?;
        if let Some(snapshot) = snapshot {
            let base = state.levels;
            let pick = |stored: f64, default: f64| if stored.is_nan() { default } else { stored };
            state.set_levels(MacroLevels {
                growth: pick(snapshot.growth, base.growth),
                inflation: pick(snapshot.inflation, base.inflation),
                rate: pick(snapshot.rate, base.rate),
                equity: pick(snapshot.equity, base.equity),
            })?;
        }
        Ok(state)
    }

    fn set_levels(&mut self, levels: MacroLevels) -> Result<(), ConfigError> {
        let all_finite = [levels.growth, levels.inflation, levels.rate, levels.equity]
            .iter()
            .all(|x| x.is_finite());
        if !all_finite {
            return Err(ConfigError::invalid_parameter(
                "levels",
                format!("macro levels must be finite, got {:?}", levels),
            ));
        }
        self.levels = levels;
        Ok(())
    }

    /// AR(1) parameters (fixed for the life of the state).
    pub fn params(&self) -> &MacroParams {
        &self.params
    }

    /// Current levels.
    pub fn levels(&self) -> MacroLevels {
        self.levels
    }

    /// Current policy rate level (bond carry).
    pub fn rate_level(&self) -> f64 {
        self.levels.rate
    }

    /// Advance one period with the given shocks and return the deltas.
    ///
    /// Mutates all four levels in place. Not idempotent: each call is one period.
    pub fn advance(&mut self, shocks: &ShockVector) -> MacroDeltas {
        let p = &self.params;
        let old = self.levels;

        let growth = ar1(p.growth.long_run_mean, p.growth.persistence, old.growth, shocks.growth);
        let inflation = ar1(
            p.inflation.long_run_mean,
            p.inflation.persistence,
            old.inflation,
            shocks.inflation,
        );
        let rate = ar1(p.rate.long_run_mean, p.rate.persistence, old.rate, shocks.rate);
        let equity = p.equity.long_run_mean + p.equity.persistence * old.equity + shocks.equity;

        let deltas = MacroDeltas {
            growth: growth - p.growth.long_run_mean,
            inflation: inflation - p.inflation.long_run_mean,
            rate: rate - old.rate,
            equity_level: equity,
        };

        self.levels = MacroLevels {
            growth,
            inflation,
            rate,
            equity,
        };

        deltas
    }

    /// Put every channel back at its long-run mean.
    pub fn reset(&mut self) {
        self.levels = MacroLevels::long_run(&self.params);
    }
}

#[inline]
fn ar1(mean: f64, phi: f64, level: f64, shock: f64) -> f64 {
    mean + phi * (level - mean) + shock
}
