//! Engine configuration.
//!
//! Loaded from TOML with environment variable overrides:
//!
//! ```toml
//! seed = 42
//! years = 10
//! log_level = "info"
//!
//! [macro.rate]
//! long_run_mean = 0.03
//! persistence = 0.8
//!
//! [macro.initial]
//! rate = 0.05
//!
//! [shocks.volatilities]
//! equity = 0.18
//! ```
//!
//! Missing tables and fields keep their defaults.

use std::path::Path;

use macro_core::math::CorrelationMatrix;
use macro_core::rng::{RandomSource, SimRng};
use macro_core::types::ConfigError;
use macro_models::assets::AssetRegistry;
use macro_models::macro_state::{ChannelParams, MacroChannel, MacroLevels, MacroParams, MacroState};
use macro_models::shocks::{ShockGenerator, ShockVolatilities, MACRO_CORRELATION};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::error::SimulationError;
use crate::returns::ReturnEngine;
use crate::simulation::SimulationSession;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const MAX_YEARS: u32 = 200;

/// `[macro]` table: per-channel AR(1) parameters and optional starting levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroSection {
    pub growth: ChannelParams,
    pub inflation: ChannelParams,
    pub rate: ChannelParams,
    pub equity: ChannelParams,
    /// Starting levels; missing channels start at their long-run mean
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<MacroLevels>,
}

impl Default for MacroSection {
    fn default() -> Self {
        let params = MacroParams::default();
        Self {
            growth: params.growth,
            inflation: params.inflation,
            rate: params.rate,
            equity: params.equity,
            initial: None,
        }
    }
}

impl MacroSection {
    pub fn params(&self) -> MacroParams {
        MacroParams {
            growth: self.growth,
            inflation: self.inflation,
            rate: self.rate,
            equity: self.equity,
        }
    }
}

/// `[shocks]` table: target volatilities and correlation rows
/// (growth, inflation, rate, equity).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShockSection {
    pub volatilities: ShockVolatilities,
    pub correlation: [[f64; 4]; 4],
}

impl Default for ShockSection {
    fn default() -> Self {
        Self {
            volatilities: ShockVolatilities::default(),
            correlation: MACRO_CORRELATION,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the random source; entropy-seeded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Number of years a batch run simulates
    pub years: u32,

    /// Log level
    pub log_level: String,

    #[serde(rename = "macro")]
    pub macro_section: MacroSection,

    pub shocks: ShockSection,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            years: 10,
            log_level: "info".to_string(),
            macro_section: MacroSection::default(),
            shocks: ShockSection::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, EngineConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded engine configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, EngineConfigError> {
        toml::from_str(content).map_err(|e| EngineConfigError::Parse(e.to_string()))
    }

    /// Load from `path` if the file exists, otherwise return the defaults.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, EngineConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// Unparsable numeric values are ignored with a warning.
    pub fn with_env_override(mut self) -> Self {
        if let Ok(seed) = std::env::var("MACROSIM_SEED") {
            match seed.trim().parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => warn!("Ignoring MACROSIM_SEED='{}': not an unsigned integer", seed),
            }
        }

        if let Ok(years) = std::env::var("MACROSIM_YEARS") {
            match years.trim().parse() {
                Ok(years) => self.years = years,
                Err(_) => warn!("Ignoring MACROSIM_YEARS='{}': not an unsigned integer", years),
            }
        }

        if let Ok(log_level) = std::env::var("MACROSIM_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration, collecting every problem found.
    pub fn validate(&self) -> Result<(), EngineConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.years == 0 || self.years > MAX_YEARS {
            errors.push(format!(
                "years must be in [1, {}], got {}",
                MAX_YEARS, self.years
            ));
        }

        let params = self.macro_section.params();
        for channel in MacroChannel::ALL {
            if let Err(e) = params.channel(channel).validate(channel) {
                errors.push(e.to_string());
            }
        }

        if let Some(initial) = self.macro_section.initial {
            let levels = [
                ("growth", initial.growth),
                ("inflation", initial.inflation),
                ("rate", initial.rate),
                ("equity", initial.equity),
            ];
            for (name, value) in levels {
                // NaN marks a channel left out of the table.
                if value.is_infinite() {
                    errors.push(format!("initial {} level must be finite", name));
                }
            }
        }

        if let Err(e) = self.shocks.volatilities.validate() {
            errors.push(e.to_string());
        }

        match CorrelationMatrix::from_rows(&self.shocks.correlation) {
            Ok(matrix) => {
                if let Err(e) = matrix.cholesky() {
                    errors.push(format!("shocks.correlation: {}", e));
                }
            }
            Err(e) => errors.push(format!("shocks.correlation: {}", e)),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(EngineConfigError::Validation(errors))
        }
    }

    /// Load configuration from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, EngineConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }

    /// Random source for this configuration.
    pub fn rng(&self) -> SimRng {
        match self.seed {
            Some(seed) => SimRng::from_seed(seed),
            None => SimRng::from_entropy(),
        }
    }

    /// Build a session over `registry` seeded from this configuration.
    ///
    /// # Errors
    ///
    /// `SimulationError::Config` if the macro parameters, volatilities or
    /// correlation matrix are unusable.
    pub fn build_session(
        &self,
        registry: AssetRegistry,
    ) -> Result<SimulationSession<SimRng>, SimulationError> {
        self.build_session_with_rng(registry, self.rng())
    }

    /// Build a session over `registry` with an explicit random source.
    pub fn build_session_with_rng<R: RandomSource>(
        &self,
        registry: AssetRegistry,
        rng: R,
    ) -> Result<SimulationSession<R>, SimulationError> {
        let state = MacroState::restore(self.macro_section.params(), self.macro_section.initial)?;
        let correlation = CorrelationMatrix::from_rows(&self.shocks.correlation)
            .map_err(ConfigError::from)?;
        let generator = ShockGenerator::new(&correlation, self.shocks.volatilities)?;
        Ok(SimulationSession::new(
            state,
            generator,
            ReturnEngine::default(),
            registry,
            rng,
        ))
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
