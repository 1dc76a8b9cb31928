//! Inputs and outputs of a single simulated period.

use std::fmt;

use macro_models::macro_state::{MacroDeltas, MacroLevels};
use macro_models::presets::PresetScenario;
use macro_models::shocks::ShockVector;
use serde::Serialize;

use crate::returns::AssetReturns;

/// Where a period's shocks come from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShockSource {
    /// Correlated random draw from the session's generator
    Random,
    /// Fixed shocks of a preset scenario
    Preset(PresetScenario),
    /// Operator-supplied shocks
    Manual(ShockVector),
}

impl Default for ShockSource {
    fn default() -> Self {
        Self::Random
    }
}

impl From<PresetScenario> for ShockSource {
    fn from(preset: PresetScenario) -> Self {
        Self::Preset(preset)
    }
}

impl From<ShockVector> for ShockSource {
    fn from(shocks: ShockVector) -> Self {
        Self::Manual(shocks)
    }
}

impl fmt::Display for ShockSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Random => f.write_str("Random"),
            Self::Preset(preset) => write!(f, "Preset: {}", preset.name()),
            Self::Manual(_) => f.write_str("Manual"),
        }
    }
}

/// Macro-side record of one period, kept in the session history.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeriodRecord {
    /// 1-based year index within the session
    pub year: u32,
    /// Narrative label (source, plus the nearest preset for random draws)
    pub label: String,
    /// Preset whose shocks are closest to this period's
    pub nearest_preset: PresetScenario,
    pub shocks: ShockVector,
    pub deltas: MacroDeltas,
    /// Levels after the update
    pub levels: MacroLevels,
}

/// Full result of one period.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeriodOutcome {
    #[serde(flatten)]
    pub record: PeriodRecord,
    pub returns: AssetReturns,
}

impl PeriodOutcome {
    /// Return of one asset this period.
    pub fn asset_return(&self, name: &str) -> Option<f64> {
        self.returns.get(name)
    }
}
