//! Asset registry errors.

use thiserror::Error;

use super::AssetClass;

/// Errors raised while validating asset records or building a registry.
///
/// All of them are configuration errors: they are reported before any
/// simulation runs and are never retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// A duration was set on an asset whose class is not duration-bearing.
    #[error("Asset '{asset}' has duration {duration} but class '{class}' is not duration-priced")]
    DurationOnNonBond {
        /// Asset name
        asset: String,
        /// Declared class
        class: AssetClass,
        /// Declared duration
        duration: f64,
    },

    /// Duration is negative or not finite.
    #[error("Asset '{asset}' has invalid duration {duration}")]
    InvalidDuration {
        /// Asset name
        asset: String,
        /// Declared duration
        duration: f64,
    },

    /// A numeric field is outside its admissible range.
    #[error("Asset '{asset}' has invalid {field}: {value}")]
    InvalidField {
        /// Asset name
        asset: String,
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// Asset names must be non-empty.
    #[error("Asset name must not be empty")]
    EmptyName,

    /// Two assets share the same name.
    #[error("Duplicate asset name '{0}'")]
    DuplicateAsset(String),

    /// Category string not recognised.
    #[error("Unknown asset class '{0}'")]
    UnknownClass(String),
}
