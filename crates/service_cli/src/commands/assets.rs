//! Assets command implementation
//!
//! Lists the asset universe with its factor loadings and pricing path.

use macro_models::assets::{Asset, AssetClass, PricingKind};

use super::{load_registry, pct};
use crate::{CliError, Result};

/// Run the assets command
pub fn run(universe: Option<&str>, class: Option<&str>) -> Result<()> {
    let class = class
        .map(|c| c.parse::<AssetClass>())
        .transpose()
        .map_err(|e| CliError::invalid_argument(e.to_string()))?;
    let registry = load_registry(universe)?;

    let assets: Vec<&Asset> = match class {
        Some(class) => registry.by_class(class).collect(),
        None => registry.iter().collect(),
    };

    println!("┌──────────────────────────────┬────────────────┬─────────┬─────────┬───────┬───────┬───────┬───────┬──────────────┐");
    println!("│ Asset                        │ Class          │ Mu      │ Sigma   │ b_gdp │ b_inf │ b_rt  │ b_eq  │ Pricing      │");
    println!("├──────────────────────────────┼────────────────┼─────────┼─────────┼───────┼───────┼───────┼───────┼──────────────┤");
    for asset in &assets {
        let b = &asset.loadings;
        let pricing = match asset.pricing {
            PricingKind::Standard => "factor".to_string(),
            PricingKind::DurationBased { duration } => format!("duration {:.1}", duration),
        };
        println!(
            "│ {:<28} │ {:<14} │ {:>7} │ {:>7} │ {:>5.2} │ {:>5.2} │ {:>5.2} │ {:>5.2} │ {:<12} │",
            asset.name,
            asset.class.name(),
            pct(asset.expected_return),
            pct(asset.volatility),
            b.gdp,
            b.inflation,
            b.rates,
            b.equity,
            pricing
        );
    }
    println!("└──────────────────────────────┴────────────────┴─────────┴─────────┴───────┴───────┴───────┴───────┴──────────────┘");
    println!("{} assets", assets.len());
    Ok(())
}
