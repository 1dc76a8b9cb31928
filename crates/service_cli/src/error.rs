//! CLI error type.

use macro_models::assets::RegistryError;
use macro_pricing::{EngineConfigError, SimulationError};
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] EngineConfigError),

    /// Simulation setup or a period failed
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// Asset universe rejected
    #[error("Asset universe error: {0}")]
    Registry(#[from] RegistryError),

    /// File does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Bad command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
