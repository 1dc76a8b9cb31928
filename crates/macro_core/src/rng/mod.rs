//! # Random Number Generation
//!
//! Every stochastic operation in the engine takes its randomness from an
//! explicit [`RandomSource`] argument. Nothing reads a process-wide generator.
//!
//! ## Module Structure
//!
//! - [`source`]: The [`RandomSource`] trait
//! - [`prng`]: [`SimRng`], a seeded pseudo-random generator for live sessions
//! - [`scripted`]: [`ScriptedSource`], a finite queue of draws for tests and replays
//!
//! ## Usage Example
//!
//! ```rust
//! use macro_core::rng::{RandomSource, ScriptedSource, SimRng};
//!
//! let mut rng = SimRng::from_seed(12345);
//! let z = rng.next_normal().unwrap();
//! assert!(z.is_finite());
//!
//! let mut scripted = ScriptedSource::new(vec![0.5]);
//! assert_eq!(scripted.next_normal(), Ok(0.5));
//! assert!(scripted.next_normal().is_err());
//! ```

mod prng;
mod scripted;
mod source;

pub use prng::SimRng;
pub use scripted::ScriptedSource;
pub use source::RandomSource;
