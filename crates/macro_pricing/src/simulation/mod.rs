//! Year-by-year simulation driver.
//!
//! A [`SimulationSession`] owns the macro state, the shock generator, the
//! return engine, the asset registry and the random source. Each call to
//! [`SimulationSession::run_period`] performs one step:
//!
//! 1. obtain the period's shocks (random draw, preset or manual vector)
//! 2. advance the macro state and compute the deltas
//! 3. price every asset from the deltas and the new state
//!
//! The state is committed only when all three steps succeed.

mod record;
mod session;

pub use record::{PeriodOutcome, PeriodRecord, ShockSource};
pub use session::SimulationSession;
