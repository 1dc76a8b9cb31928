//! Error types for structured error handling.
//!
//! This module provides:
//! - `CorrelationError`: Errors from correlation matrix validation and factorisation
//! - `ConfigError`: Fatal setup errors rejected before any simulation runs
//! - `RngError`: Misuse or exhaustion of an injected random source
//!
//! Clamping of extreme returns is part of the pricing contract and is never
//! reported through these types.

use thiserror::Error;

/// Correlation matrix errors.
///
/// # Examples
/// ```
/// use macro_core::types::CorrelationError;
///
/// let err = CorrelationError::NotSymmetric { i: 0, j: 2 };
/// assert_eq!(format!("{}", err), "Matrix is not symmetric at (0, 2)");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CorrelationError {
    /// Matrix is not positive definite
    #[error("Correlation matrix is not positive definite")]
    NotPositiveDefinite,

    /// Matrix dimensions are invalid
    #[error("Invalid matrix dimensions: expected {expected} elements, got {got}")]
    InvalidDimensions { expected: usize, got: usize },

    /// Diagonal elements are not 1.0
    #[error("Diagonal element at index {index} is {value}, expected 1.0")]
    InvalidDiagonal { index: usize, value: f64 },

    /// Matrix is not symmetric
    #[error("Matrix is not symmetric at ({i}, {j})")]
    NotSymmetric { i: usize, j: usize },

    /// Correlation value out of range [-1, 1]
    #[error("Correlation at ({i}, {j}) is {value}, must be in [-1, 1]")]
    OutOfRange { i: usize, j: usize, value: f64 },
}

/// Configuration errors.
///
/// Raised at setup time only. These are fatal and never retried: a
/// configuration that fails validation must be fixed by the operator.
///
/// # Examples
/// ```
/// use macro_core::types::ConfigError;
///
/// let err = ConfigError::InvalidPersistence { channel: "rate", phi: 1.0 };
/// assert!(err.to_string().contains("rate"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Correlation matrix rejected during validation or Cholesky factorisation.
    #[error("Invalid correlation matrix: {0}")]
    Correlation(#[from] CorrelationError),

    /// AR(1) persistence outside `[0, 1)`; the channel would not be stationary.
    #[error("Persistence for channel '{channel}' is {phi}, must be in [0, 1)")]
    InvalidPersistence {
        /// Channel name.
        channel: &'static str,
        /// Offending coefficient.
        phi: f64,
    },

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl ConfigError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}

/// Random source errors.
///
/// A scripted source that runs dry is a logic defect in the caller, so it is
/// surfaced immediately rather than replaced by a default draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RngError {
    /// Deterministic source asked for more draws than it was seeded with.
    #[error("Random source exhausted after {supplied} draws")]
    Exhausted {
        /// Number of draws the source had been seeded with.
        supplied: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_error_display() {
        let err = CorrelationError::NotPositiveDefinite;
        assert!(err.to_string().contains("positive definite"));

        let err = CorrelationError::InvalidDimensions {
            expected: 16,
            got: 15,
        };
        assert!(err.to_string().contains("16"));
        assert!(err.to_string().contains("15"));
    }

    #[test]
    fn test_config_error_from_correlation() {
        let err: ConfigError = CorrelationError::NotPositiveDefinite.into();
        assert!(matches!(
            err,
            ConfigError::Correlation(CorrelationError::NotPositiveDefinite)
        ));
        assert!(err.to_string().starts_with("Invalid correlation matrix"));
    }

    #[test]
    fn test_invalid_parameter_helper() {
        let err = ConfigError::invalid_parameter("volatility", "must be non-negative");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'volatility': must be non-negative"
        );
    }

    #[test]
    fn test_rng_error_display() {
        let err = RngError::Exhausted { supplied: 4 };
        assert_eq!(err.to_string(), "Random source exhausted after 4 draws");
    }
}
