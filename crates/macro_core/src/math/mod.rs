//! Shared numeric utilities.
//!
//! - [`correlation`]: Correlation matrix validation and Cholesky factorisation
//! - [`bounds`]: Clamp bounds applied to every realised return

pub mod bounds;
pub mod correlation;

pub use bounds::{clamp_return, ReturnBounds, RETURN_CAP, RETURN_FLOOR};
pub use correlation::{CholeskyFactor, CorrelationMatrix};
