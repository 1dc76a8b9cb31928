//! Asset registry.
//!
//! - [`asset`]: [`Asset`], its class tag, loadings and [`PricingKind`]
//! - [`registry`]: [`AssetRegistry`], validated at construction
//! - [`error`]: [`RegistryError`]

pub mod asset;
pub mod error;
pub mod registry;
mod universe;

pub use asset::{Asset, AssetClass, AssetRecord, FactorLoadings, PricingKind};
pub use error::RegistryError;
pub use registry::AssetRegistry;
