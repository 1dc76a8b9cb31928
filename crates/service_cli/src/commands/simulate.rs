//! Simulate command implementation
//!
//! Runs a seeded game over the asset universe and prints each year's macro
//! levels and asset returns.

use macro_models::presets::PresetScenario;
use macro_pricing::simulation::{PeriodOutcome, ShockSource};
use macro_pricing::EngineConfig;
use tracing::info;

use super::{check_format, load_registry, pct};
use crate::{CliError, Result};

/// Run the simulate command
///
/// A preset, when given, scripts the first year; later years are drawn at random.
pub fn run(
    config: &EngineConfig,
    universe: Option<&str>,
    preset: Option<&str>,
    format: &str,
) -> Result<()> {
    check_format(format)?;
    let preset = preset
        .map(|p| p.parse::<PresetScenario>())
        .transpose()
        .map_err(|e| CliError::invalid_argument(e.to_string()))?;

    let registry = load_registry(universe)?;
    let mut session = config.build_session(registry)?;

    info!("Starting simulation...");
    info!("  Years: {}", config.years);
    info!("  Seed: {}", session.rng_mut().seed());
    info!("  Assets: {}", session.registry().len());
    if let Some(preset) = preset {
        info!("  Opening scenario: {}", preset.name());
    }

    let mut outcomes = Vec::with_capacity(config.years as usize);
    for year in 0..config.years {
        let source = match preset {
            Some(preset) if year == 0 => ShockSource::Preset(preset),
            _ => ShockSource::Random,
        };
        outcomes.push(session.run_period(source)?);
    }

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&outcomes)?),
        _ => outcomes.iter().for_each(print_period),
    }

    info!("Simulation complete");
    Ok(())
}

fn print_period(outcome: &PeriodOutcome) {
    let r = &outcome.record;
    println!();
    println!("Year {}: {}", r.year, r.label);
    println!(
        "  Growth {}  Inflation {}  Rate {}  Equity factor {}",
        pct(r.levels.growth),
        pct(r.levels.inflation),
        pct(r.levels.rate),
        pct(r.levels.equity)
    );
    println!("┌──────────────────────────────┬────────────┐");
    println!("│ Asset                        │ Return     │");
    println!("├──────────────────────────────┼────────────┤");
    for (name, value) in outcome.returns.iter() {
        println!("│ {:<28} │ {:>10} │", name, pct(value));
    }
    println!("└──────────────────────────────┴────────────┘");
}
