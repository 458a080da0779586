pub mod validation;

use crate::constants::{DEFAULT_BIN_SIZES, DEFAULT_MIN_STAKE};
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};
use validation::validate_config;

/// Main settings for the supplier engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level for application logging (e.g., "info", "debug", "warn", "error")
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Stake denominations offered to delegators
    #[serde(default)]
    pub staking: StakingSettings,
}

/// Stake denominations used by the distribution planner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakingSettings {
    /// Smallest stake a single node may carry
    pub min_stake: u64,
    /// Allowed per-node stake sizes
    pub bin_sizes: Vec<u64>,
}

impl Default for StakingSettings {
    fn default() -> Self {
        Self {
            min_stake: DEFAULT_MIN_STAKE,
            bin_sizes: DEFAULT_BIN_SIZES.to_vec(),
        }
    }
}

/// Per-invocation overrides, e.g. from command line flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StakingOverrides {
    pub min_stake: Option<u64>,
    pub bin_sizes: Option<Vec<u64>>,
}

impl StakingSettings {
    /// Overrides take precedence over loaded values, field by field.
    pub fn merged_with(&self, overrides: &StakingOverrides) -> StakingSettings {
        StakingSettings {
            min_stake: overrides.min_stake.unwrap_or(self.min_stake),
            bin_sizes: overrides
                .bin_sizes
                .clone()
                .unwrap_or_else(|| self.bin_sizes.clone()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            staking: StakingSettings::default(),
        }
    }
}

impl Settings {
    /// Load configuration from a specific config file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        // env vars take priority over the file
        let settings = ConfigBuilder::builder()
            .add_source(File::with_name(&path.as_ref().to_string_lossy()))
            .add_source(
                Environment::with_prefix("IGNITER")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("staking.bin_sizes")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        validate_config(&settings)?;

        Ok(settings)
    }

    /// Load configuration from environment variables (and a `.env` file if present)
    pub fn from_env() -> Result<Self> {
        // NOTE: It's ok if this fails (file might not exist)
        let _ = dotenvy::dotenv();

        let settings: Settings = ConfigBuilder::builder()
            .add_source(
                Environment::with_prefix("IGNITER")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("staking.bin_sizes")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        validate_config(&settings)?;

        Ok(settings)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings {{\n\
             \tLog Level: {}\n\
             \tMin Stake: {}\n\
             \tBin Sizes: {:?}\n\
             }}",
            self.log_level, self.staking.min_stake, self.staking.bin_sizes,
        )
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
