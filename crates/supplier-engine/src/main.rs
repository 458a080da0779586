mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use igniter_supplier_engine::settings::Settings;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "igniter-supplier",
    about = "Stake distribution and supplier revenue share tooling for Igniter",
    version,
    author,
    after_help = r#"Configuration:
    Configuration can be provided via:
    1. Environment variables with IGNITER__ prefix (e.g., IGNITER__STAKING__MIN_STAKE)
    2. .env file in the current directory
    3. Config file with -c option (TOML)

Examples:
    # Plan how to stake 135000 with the configured bins
    igniter-supplier plan --amount 135000

    # Build supplier service configs from a request file
    igniter-supplier build --input request.json

    # Check an on-chain config against the desired one
    igniter-supplier compare --current onchain.json --desired desired.json"#
)]
pub struct Cli {
    /// Path to the configuration file (TOML format)
    ///
    /// If not provided, will attempt to load from environment variables
    #[clap(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a stake amount into node bins
    Plan(cli::plan::PlanCommand),
    /// Build supplier service configs for an address group
    Build(cli::build::BuildCommand),
    /// Compare two supplier service config sets
    Compare(cli::compare::CompareCommand),
    /// Assess a batch of suppliers for drift
    Drift(cli::drift::DriftCommand),
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let settings = if let Some(config_path) = &self.config {
            Settings::from_path(config_path)?
        } else {
            Settings::from_env()?
        };
        init_logging(&settings.log_level)?;
        debug!("Loaded {settings}");

        match self.command {
            Commands::Plan(cmd) => cmd.execute(&settings),
            Commands::Build(cmd) => cmd.execute(),
            Commands::Compare(cmd) => cmd.execute(),
            Commands::Drift(cmd) => cmd.execute(),
        }
    }
}

fn main() -> Result<()> {
    Cli::parse().run()
}

fn init_logging(log_level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .init();

    Ok(())
}
