use rust_decimal::Decimal;

// hard ceiling for a service's resolved revenue share
pub const MAX_REV_SHARE_PERCENTAGE: Decimal = Decimal::ONE_HUNDRED;

// endpoint template placeholders
pub const SERVICE_ID_PLACEHOLDER: &str = "sid";
pub const RELAY_MINER_PLACEHOLDER: &str = "rm";
pub const REGION_PLACEHOLDER: &str = "region";
pub const DOMAIN_PLACEHOLDER: &str = "domain";

// default staking denominations
pub const DEFAULT_MIN_STAKE: u64 = 15_000;
pub const DEFAULT_BIN_SIZES: [u64; 4] = [60_000, 45_000, 30_000, 15_000];
