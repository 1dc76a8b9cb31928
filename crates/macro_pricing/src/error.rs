//! Error types for the simulation driver.

use macro_core::types::{ConfigError, RngError};
use macro_models::assets::RegistryError;
use macro_models::shocks::ShockError;
use thiserror::Error;

/// Failure while building or advancing a simulation session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Invalid macro parameters, shock volatilities or correlation matrix
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Asset universe failed validation
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Random source could not supply a draw
    #[error("Random source failed: {0}")]
    Rng(#[from] RngError),
}

impl From<ShockError> for SimulationError {
    fn from(err: ShockError) -> Self {
        match err {
            ShockError::Config(e) => Self::Config(e),
            ShockError::Rng(e) => Self::Rng(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhaustion_message() {
        let err = SimulationError::from(RngError::Exhausted { supplied: 3 });
        assert!(err.to_string().contains("3"));
        assert!(matches!(err, SimulationError::Rng(_)));
    }

    #[test]
    fn test_shock_error_flattens() {
        let err: SimulationError = ShockError::Rng(RngError::Exhausted { supplied: 0 }).into();
        assert_eq!(err, SimulationError::Rng(RngError::Exhausted { supplied: 0 }));
    }
}
