//! Shocks command implementation
//!
//! Draws many shock vectors and compares their empirical correlation and
//! standard deviations with the configured targets.

use macro_core::math::CorrelationMatrix;
use macro_core::rng::SimRng;
use macro_models::macro_state::MacroChannel;
use macro_models::shocks::{ShockGenerator, ShockVector};
use macro_pricing::{EngineConfig, SimulationError};
use tracing::info;

use crate::{CliError, Result};

/// Run the shocks command
pub fn run(config: &EngineConfig, draws: usize, seed: u64) -> Result<()> {
    if draws < 2 {
        return Err(CliError::invalid_argument("draws must be at least 2"));
    }
    let correlation = CorrelationMatrix::from_rows(&config.shocks.correlation)
        .map_err(|e| CliError::invalid_argument(e.to_string()))?;
    let generator = ShockGenerator::new(&correlation, config.shocks.volatilities)
        .map_err(SimulationError::from)?;

    info!("Drawing {} shock vectors (seed {})", draws, seed);
    let mut rng = SimRng::from_seed(seed);
    let samples = (0..draws)
        .map(|_| generator.draw(&mut rng))
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(SimulationError::from)?;

    let stats = ShockStats::from_samples(&samples);
    let targets = config.shocks.volatilities.as_array();

    println!("Standard deviations ({} draws)", draws);
    for channel in MacroChannel::ALL {
        let i = channel.index();
        println!(
            "  {:<10} empirical {:>8.4}  target {:>8.4}",
            channel.name(),
            stats.std_dev[i],
            targets[i]
        );
    }

    println!();
    println!("Correlation (empirical / target)");
    for (i, row) in MacroChannel::ALL.iter().enumerate() {
        let cells: Vec<String> = (0..4)
            .map(|j| {
                format!(
                    "{:>6.3}/{:<6.3}",
                    stats.correlation[i][j], config.shocks.correlation[i][j]
                )
            })
            .collect();
        println!("  {:<10} {}", row.name(), cells.join(" "));
    }
    Ok(())
}

/// Sample moments of a set of shock vectors.
struct ShockStats {
    std_dev: [f64; 4],
    correlation: [[f64; 4]; 4],
}

impl ShockStats {
    fn from_samples(samples: &[ShockVector]) -> Self {
        let n = samples.len() as f64;
        let mut mean = [0.0; 4];
        for s in samples {
            for (m, x) in mean.iter_mut().zip(s.as_array()) {
                *m += x / n;
            }
        }

        let mut cov = [[0.0; 4]; 4];
        for s in samples {
            let x = s.as_array();
            for i in 0..4 {
                for j in 0..4 {
                    cov[i][j] += (x[i] - mean[i]) * (x[j] - mean[j]) / (n - 1.0);
                }
            }
        }

        let std_dev = [0, 1, 2, 3].map(|i| cov[i][i].sqrt());
        let mut correlation = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                correlation[i][j] = cov[i][j] / (std_dev[i] * std_dev[j]);
            }
        }
        Self {
            std_dev,
            correlation,
        }
    }
}
