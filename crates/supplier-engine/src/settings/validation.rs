use crate::settings::{Settings, StakingSettings};
use anyhow::{Result, bail};

/// Validate the configuration values
pub fn validate_config(settings: &Settings) -> Result<()> {
    // Validate log level
    let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_log_levels.contains(&settings.log_level.to_lowercase().as_str()) {
        bail!(
            "Invalid log level '{}'. Valid options are: {:?}",
            settings.log_level,
            valid_log_levels
        );
    }

    validate_staking(&settings.staking)
}

/// Validate stake denominations, also used after command line overrides
pub fn validate_staking(staking: &StakingSettings) -> Result<()> {
    if staking.min_stake == 0 {
        bail!("Staking min_stake must be greater than 0");
    }

    if staking.bin_sizes.is_empty() {
        bail!("Staking bin_sizes cannot be empty");
    }

    if staking.bin_sizes.contains(&0) {
        bail!("Staking bin_sizes cannot contain 0");
    }

    if !staking
        .bin_sizes
        .iter()
        .any(|bin| *bin >= staking.min_stake)
    {
        bail!(
            "At least one staking bin must be >= min_stake {}, got {:?}",
            staking.min_stake,
            staking.bin_sizes
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_valid_config() -> Settings {
        Settings {
            log_level: "info".to_string(),
            staking: StakingSettings {
                min_stake: 15_000,
                bin_sizes: vec![60_000, 45_000, 30_000, 15_000],
            },
        }
    }

    #[test]
    fn test_valid_config() {
        let config = create_valid_config();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = create_valid_config();
        config.log_level = "invalid".to_string();
        assert!(validate_config(&config).is_err());

        config.log_level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_min_stake() {
        let mut config = create_valid_config();
        config.staking.min_stake = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_bin_sizes() {
        let mut config = create_valid_config();

        // Test empty bins
        config.staking.bin_sizes = vec![];
        assert!(validate_config(&config).is_err());

        // Test zero bin
        config.staking.bin_sizes = vec![60_000, 0];
        assert!(validate_config(&config).is_err());

        // Test all bins below minimum stake
        config.staking.bin_sizes = vec![10_000, 5_000];
        assert!(validate_config(&config).is_err());

        // Test single bin at minimum stake
        config.staking.bin_sizes = vec![15_000];
        assert!(validate_config(&config).is_ok());
    }
}
