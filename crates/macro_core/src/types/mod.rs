//! Core types shared by every layer of the engine.
//!
//! - [`error`]: Error taxonomy (configuration, correlation, random source)

pub mod error;

pub use error::{ConfigError, CorrelationError, RngError};
