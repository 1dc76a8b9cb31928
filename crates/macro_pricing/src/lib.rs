//! # macro_pricing: Return Engine and Simulation Driver
//!
//! Top layer of the workspace. Turns a period's macro deltas into per-asset
//! returns and drives a game year by year:
//! - `returns`: standard factor pricing and duration pricing for bonds, with clamping
//! - `simulation`: session owning the macro state, shock generator and random source
//! - `config`: TOML configuration with environment overrides
//!
//! ## Usage Example
//!
//! ```rust
//! use macro_core::rng::SimRng;
//! use macro_models::assets::AssetRegistry;
//! use macro_pricing::simulation::{ShockSource, SimulationSession};
//!
//! let registry = AssetRegistry::default_universe().unwrap();
//! let mut session = SimulationSession::with_defaults(registry, SimRng::from_seed(7)).unwrap();
//!
//! let outcomes = session.run_periods(5, ShockSource::Random).unwrap();
//! assert_eq!(outcomes.len(), 5);
//! for outcome in &outcomes {
//!     for (_, r) in outcome.returns.iter() {
//!         assert!((-0.90..=3.00).contains(&r));
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod returns;
pub mod simulation;

pub use config::{EngineConfig, EngineConfigError};
pub use error::SimulationError;
pub use returns::{AssetReturns, ReturnEngine};
pub use simulation::{PeriodOutcome, PeriodRecord, ShockSource, SimulationSession};
