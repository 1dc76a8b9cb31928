//! Stateful simulation session.

use macro_core::rng::{RandomSource, SimRng};
use macro_models::assets::AssetRegistry;
use macro_models::macro_state::{MacroParams, MacroState};
use macro_models::presets::PresetScenario;
use macro_models::shocks::ShockGenerator;
use tracing::{debug, info};

use super::{PeriodOutcome, PeriodRecord, ShockSource};
use crate::error::SimulationError;
use crate::returns::ReturnEngine;

/// One game's worth of macro history and returns.
///
/// The random source is injected so tests can drive a session with a
/// [`ScriptedSource`](macro_core::rng::ScriptedSource) and reproduce every
/// draw. A session is not meant to be shared between threads; run separate
/// sessions for separate games.
///
/// # Examples
///
/// ```
/// use macro_core::rng::SimRng;
/// use macro_models::assets::AssetRegistry;
/// use macro_models::presets::PresetScenario;
/// use macro_pricing::simulation::{ShockSource, SimulationSession};
///
/// let registry = AssetRegistry::default_universe().unwrap();
/// let mut session = SimulationSession::with_defaults(registry, SimRng::from_seed(42)).unwrap();
///
/// let outcome = session
///     .run_period(ShockSource::Preset(PresetScenario::Stagflation))
///     .unwrap();
/// assert_eq!(outcome.record.year, 1);
/// assert!(outcome.asset_return("Gold Bullion").is_some());
/// ```
#[derive(Debug)]
pub struct SimulationSession<R: RandomSource = SimRng> {
    state: MacroState,
    generator: ShockGenerator,
    engine: ReturnEngine,
    registry: AssetRegistry,
    rng: R,
    year: u32,
    history: Vec<PeriodRecord>,
}

impl<R: RandomSource> SimulationSession<R> {
    /// Assemble a session from its parts.
    pub fn new(
        state: MacroState,
        generator: ShockGenerator,
        engine: ReturnEngine,
        registry: AssetRegistry,
        rng: R,
    ) -> Self {
        Self {
            state,
            generator,
            engine,
            registry,
            rng,
            year: 0,
            history: Vec::new(),
        }
    }

    /// Session with default macro parameters, correlations, volatilities and bounds.
    ///
    /// # Errors
    ///
    /// `SimulationError::Config` if the built-in calibration fails to factor.
    pub fn with_defaults(registry: AssetRegistry, rng: R) -> Result<Self, SimulationError> {
        let state = MacroState::new(MacroParams::default())?;
        let generator = ShockGenerator::with_defaults()?;
        Ok(Self::new(
            state,
            generator,
            ReturnEngine::default(),
            registry,
            rng,
        ))
    }

    /// Simulate one year.
    ///
    /// Random draws are consumed in a fixed order: four normals for the
    /// shocks (random source only), then one per asset in registry order.
    ///
    /// # Errors
    ///
    /// `SimulationError::Rng` if the random source cannot supply a draw. The
    /// macro state, year counter and history are then left unchanged; draws
    /// already taken from the source are not returned.
    pub fn run_period(&mut self, source: ShockSource) -> Result<PeriodOutcome, SimulationError> {
        let shocks = match source {
            ShockSource::Random => self.generator.draw(&mut self.rng)?,
            ShockSource::Preset(preset) => preset.shocks(),
            ShockSource::Manual(shocks) => shocks,
        };

        let mut next = self.state.clone();
        let deltas = next.advance(&shocks);
        let returns = self
            .engine
            .price_universe(&self.registry, &deltas, &next, &mut self.rng)?;

        self.state = next;
        self.year += 1;

        let nearest_preset = PresetScenario::closest(&shocks);
        let record = PeriodRecord {
            year: self.year,
            label: period_label(source, nearest_preset),
            nearest_preset,
            shocks,
            deltas,
            levels: self.state.levels(),
        };

        debug!(
            year = record.year,
            growth = shocks.growth,
            inflation = shocks.inflation,
            rate = shocks.rate,
            equity = shocks.equity,
            "Shocks applied"
        );
        if let Some((best, worst)) = returns.extremes() {
            debug!(
                best = %best.name,
                best_return = best.value,
                worst = %worst.name,
                worst_return = worst.value,
                "Period extremes"
            );
        }
        info!(
            year = record.year,
            growth = record.levels.growth,
            inflation = record.levels.inflation,
            rate = record.levels.rate,
            "{}",
            record.label
        );

        self.history.push(record.clone());
        Ok(PeriodOutcome { record, returns })
    }

    /// Simulate `years` consecutive periods from the same source.
    ///
    /// Stops at the first failure; periods already completed stay in the history.
    pub fn run_periods(
        &mut self,
        years: u32,
        source: ShockSource,
    ) -> Result<Vec<PeriodOutcome>, SimulationError> {
        (0..years).map(|_| self.run_period(source)).collect()
    }

    /// Return to the long-run means and clear the history.
    ///
    /// The random source is not rewound.
    pub fn reset(&mut self) {
        self.state.reset();
        self.year = 0;
        self.history.clear();
        info!("Simulation reset to long-run means");
    }

    /// Number of completed periods.
    pub fn year(&self) -> u32 {
        self.year
    }

    /// Current macro state.
    pub fn state(&self) -> &MacroState {
        &self.state
    }

    /// Completed periods, oldest first.
    pub fn history(&self) -> &[PeriodRecord] {
        &self.history
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    pub fn engine(&self) -> &ReturnEngine {
        &self.engine
    }

    /// Mutable access to the random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

fn period_label(source: ShockSource, nearest: PresetScenario) -> String {
    match source {
        ShockSource::Random => format!("Random (close to {})", nearest.name()),
        other => other.to_string(),
    }
}
