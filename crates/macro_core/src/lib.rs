//! # macro_core: Numeric Foundation for the Macro-Factor Return Engine
//!
//! ## Foundation Layer Role
//!
//! macro_core is the bottom layer of the workspace, providing:
//! - Correlation matrices and Cholesky factors (`math::correlation`)
//! - Return clamping bounds (`math::bounds`)
//! - Injectable random sources (`rng`)
//! - Error taxonomy: `ConfigError`, `CorrelationError`, `RngError` (`types::error`)
//!
//! It has no dependencies on other workspace crates.
//!
//! ## Usage Examples
//!
//! ```rust
//! use macro_core::math::{clamp_return, CorrelationMatrix};
//! use macro_core::rng::{RandomSource, SimRng};
//!
//! let corr = CorrelationMatrix::from_rows(&[[1.0_f64, 0.3], [0.3, 1.0]]).unwrap();
//! let l = corr.cholesky().unwrap();
//!
//! let mut rng = SimRng::from_seed(42);
//! let mut z = [0.0; 2];
//! rng.fill_normal(&mut z).unwrap();
//! let w = l.transform(&z);
//! assert_eq!(w.len(), 2);
//!
//! assert_eq!(clamp_return(-2.0), -0.90);
//! ```

pub mod math;
pub mod rng;
pub mod traits;
pub mod types;
