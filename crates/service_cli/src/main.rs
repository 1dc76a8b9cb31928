//! macrosim - Command Line Driver for the Macro-Factor Return Engine
//!
//! # Commands
//!
//! - `macrosim simulate` - Run a seeded game and print yearly returns
//! - `macrosim presets` - List the scripted macro scenarios
//! - `macrosim assets` - List the asset universe and its loadings
//! - `macrosim shocks` - Check the shock generator against its targets
//!
//! Settings come from `macrosim.toml` (if present), then `MACROSIM_*`
//! environment variables, then command-line flags.

use std::path::Path;

use clap::{Parser, Subcommand};
use macro_pricing::EngineConfig;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Macro-factor return engine CLI
#[derive(Parser)]
#[command(name = "macrosim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "macrosim.toml")]
    config: String,

    /// JSON asset list replacing the default universe
    #[arg(short, long, global = true)]
    universe: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a game year by year
    Simulate {
        /// Number of years (overrides the configuration)
        #[arg(short, long)]
        years: Option<u32>,

        /// Random seed (overrides the configuration)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Preset scenario for the first year (e.g. stagflation, fed_pivot)
        #[arg(short, long)]
        preset: Option<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List preset scenarios
    Presets,

    /// List the asset universe
    Assets {
        /// Only show one asset class (e.g. bonds, "real estate")
        #[arg(long)]
        class: Option<String>,
    },

    /// Compare empirical shock statistics with the configured targets
    Shocks {
        /// Number of shock vectors to draw
        #[arg(short, long, default_value = "100000")]
        draws: usize,

        /// Random seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = EngineConfig::load_or_default(Path::new(&cli.config))?.with_env_override();
    if let Commands::Simulate { years, seed, .. } = &cli.command {
        if let Some(years) = years {
            config.years = *years;
        }
        if seed.is_some() {
            config.seed = *seed;
        }
    }
    if cli.verbose {
        config.log_level = "debug".to_string();
    }
    config.validate()?;

    // Initialise tracing; RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let universe = cli.universe.as_deref();
    match cli.command {
        Commands::Simulate { preset, format, .. } => {
            commands::simulate::run(&config, universe, preset.as_deref(), &format)?
        }
        Commands::Presets => commands::presets::run()?,
        Commands::Assets { class } => commands::assets::run(universe, class.as_deref())?,
        Commands::Shocks { draws, seed } => commands::shocks::run(&config, draws, seed)?,
    }
    Ok(())
}
