//! Preset macro scenarios.
//!
//! A preset is a named shock vector that replaces the random draw for one
//! period, so an operator can script a scenario:
//! - Goldilocks (strong growth, stable inflation)
//! - Stagflation (oil shock)
//! - Fed pivot (large rate cut)
//! - Financial crisis (2008-style)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shocks::ShockVector;

/// Types of preset scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetScenario {
    /// Strong growth, on-target inflation, neutral rates
    Goldilocks,
    /// Oil shock: recession with record inflation and rising rates
    Stagflation,
    /// Central bank cuts rates by 300bp
    FedPivot,
    /// Severe recession, deflation, equity crash
    FinancialCrisis,
}

impl PresetScenario {
    /// Get all presets.
    pub fn all() -> [Self; 4] {
        [
            Self::Goldilocks,
            Self::Stagflation,
            Self::FedPivot,
            Self::FinancialCrisis,
        ]
    }

    /// Machine-readable key (as accepted by [`FromStr`]).
    pub fn key(&self) -> &'static str {
        match self {
            Self::Goldilocks => "goldilocks",
            Self::Stagflation => "stagflation",
            Self::FedPivot => "fed_pivot",
            Self::FinancialCrisis => "financial_crisis",
        }
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Goldilocks => "Goldilocks",
            Self::Stagflation => "Oil Shock (Stagflation)",
            Self::FedPivot => "Fed Pivot (Rate Cut)",
            Self::FinancialCrisis => "Financial Crisis (2008-style)",
        }
    }

    /// Get description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Goldilocks => "Strong growth, stable inflation, neutral rates. Ideal conditions.",
            Self::Stagflation => "Record inflation (8%), recession (-4%), high rates (5%). The 1970s.",
            Self::FedPivot => "Moderate growth, contained inflation, 300 basis point rate cut.",
            Self::FinancialCrisis => {
                "Severe recession (-6%), deflation (-1%), low rates but a credit crunch."
            }
        }
    }

    /// Shock vector applied in place of a random draw.
    pub fn shocks(&self) -> ShockVector {
        match self {
            Self::Goldilocks => ShockVector::new(0.03, 0.02, 0.0, 0.10),
            Self::Stagflation => ShockVector::new(-0.04, 0.08, 0.05, -0.15),
            Self::FedPivot => ShockVector::new(0.02, 0.01, -0.03, 0.15),
            Self::FinancialCrisis => ShockVector::new(-0.06, -0.01, -0.02, -0.35),
        }
    }

    /// Preset nearest to `shocks` by L1 distance over growth, inflation and rate.
    ///
    /// Used to attach a narrative label to a randomly drawn year. Ties go to
    /// the preset listed first in [`PresetScenario::all`].
    pub fn closest(shocks: &ShockVector) -> Self {
        let distance = |preset: &Self| {
            let p = preset.shocks();
            (shocks.growth - p.growth).abs()
                + (shocks.inflation - p.inflation).abs()
                + (shocks.rate - p.rate).abs()
        };
        Self::all()
            .into_iter()
            .fold((Self::Goldilocks, f64::INFINITY), |best, preset| {
                let d = distance(&preset);
                if d < best.1 {
                    (preset, d)
                } else {
                    best
                }
            })
            .0
    }
}

impl fmt::Display for PresetScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a preset key is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown preset '{0}'. Available: goldilocks, stagflation, fed_pivot, financial_crisis")]
pub struct UnknownPreset(pub String);

impl FromStr for PresetScenario {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::all()
            .into_iter()
            .find(|p| p.key() == key)
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}
