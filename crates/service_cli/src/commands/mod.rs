//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod assets;
pub mod presets;
pub mod shocks;
pub mod simulate;

use std::path::Path;

use macro_models::assets::{AssetRecord, AssetRegistry};
use tracing::info;

use crate::{CliError, Result};

/// Default universe, or the JSON asset list at `path`.
pub fn load_registry(path: Option<&str>) -> Result<AssetRegistry> {
    let Some(path) = path else {
        return Ok(AssetRegistry::default_universe()?);
    };
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let records: Vec<AssetRecord> = serde_json::from_str(&content)?;
    let registry = AssetRegistry::from_records(records)?;
    info!("Loaded {} assets from {}", registry.len(), path);
    Ok(registry)
}

/// Format a rate as a signed percentage.
pub(crate) fn pct(value: f64) -> String {
    format!("{:+.2}%", value * 100.0)
}

/// Check an output format argument.
pub(crate) fn check_format(format: &str) -> Result<()> {
    match format {
        "table" | "json" => Ok(()),
        other => Err(CliError::invalid_argument(format!(
            "Unknown format: {}. Supported: table, json",
            other
        ))),
    }
}
