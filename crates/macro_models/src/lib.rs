//! # macro_models: Macro State, Shocks and Assets
//!
//! ## Model Layer Role
//!
//! Sits on top of `macro_core` and provides:
//! - The AR(1) macro state process (`macro_state`)
//! - The correlated shock generator (`shocks`)
//! - The asset registry and default teaching universe (`assets`)
//! - Named preset scenarios (`presets`)
//!
//! ## Usage
//!
//! ```
//! use macro_core::rng::SimRng;
//! use macro_models::macro_state::{MacroParams, MacroState};
//! use macro_models::shocks::ShockGenerator;
//!
//! let generator = ShockGenerator::with_defaults().unwrap();
//! let mut state = MacroState::new(MacroParams::default()).unwrap();
//! let mut rng = SimRng::from_seed(42);
//!
//! let shocks = generator.draw(&mut rng).unwrap();
//! let deltas = state.advance(&shocks);
//! assert!((state.rate_level() - 0.03 - deltas.rate).abs() < 1e-12);
//! ```

pub mod assets;
pub mod macro_state;
pub mod presets;
pub mod shocks;
