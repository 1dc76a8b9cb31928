//! Presets command implementation
//!
//! Lists the scripted macro scenarios and their shock vectors.

use macro_models::presets::PresetScenario;

use super::pct;
use crate::Result;

/// Run the presets command
pub fn run() -> Result<()> {
    println!("┌──────────────────┬──────────────────────────────┬──────────┬──────────┬──────────┬──────────┐");
    println!("│ Key              │ Scenario                     │ Growth   │ Inflation│ Rate     │ Equity   │");
    println!("├──────────────────┼──────────────────────────────┼──────────┼──────────┼──────────┼──────────┤");
    for preset in PresetScenario::all() {
        let s = preset.shocks();
        println!(
            "│ {:<16} │ {:<28} │ {:>8} │ {:>8} │ {:>8} │ {:>8} │",
            preset.key(),
            preset.name(),
            pct(s.growth),
            pct(s.inflation),
            pct(s.rate),
            pct(s.equity)
        );
    }
    println!("└──────────────────┴──────────────────────────────┴──────────┴──────────┴──────────┴──────────┘");
    println!();
    for preset in PresetScenario::all() {
        println!("  {}: {}", preset.key(), preset.description());
    }
    Ok(())
}
