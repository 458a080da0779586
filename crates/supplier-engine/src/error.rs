use crate::key_state::KeyState;
use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T = ()> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("revenue share for service {service_id} totals {total}%, exceeding 100%")]
    RevenueShareOverflow { service_id: String, total: Decimal },
    #[error("negative revenue share {percentage}% for {address} on service {service_id}")]
    NegativeRevShare {
        service_id: String,
        address: String,
        percentage: Decimal,
    },
    #[error("stake amount {amount} cannot be expressed with the allowed bin sizes")]
    UnresolvableDistribution { amount: u64 },
    #[error("stake amount must be greater than zero")]
    ZeroStakeAmount,
    #[error("no bin size is at or above the minimum stake of {minimum_stake}")]
    NoEligibleBins { minimum_stake: u64 },
    #[error("invalid key state transition from {from} to {to}")]
    InvalidKeyTransition { from: KeyState, to: KeyState },
    #[error("service {service_id} referenced by address group is not defined")]
    ServiceNotFound { service_id: String },
}

impl Error {
    /// Errors caused by the request itself rather than by inconsistent data.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Error::ServiceNotFound { .. })
    }

    /// Status code an HTTP handler should answer with for this error.
    pub fn http_status(&self) -> u16 {
        if self.is_client_error() { 400 } else { 500 }
    }
}
