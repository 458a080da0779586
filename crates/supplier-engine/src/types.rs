use crate::revshare::checked_total;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// RPC flavour served by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RpcType {
    JsonRpc,
    Rest,
    CometBft,
    Websocket,
    Grpc,
}

impl Display for RpcType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::JsonRpc => write!(f, "JSON_RPC"),
            Self::Rest => write!(f, "REST"),
            Self::CometBft => write!(f, "COMET_BFT"),
            Self::Websocket => write!(f, "WEBSOCKET"),
            Self::Grpc => write!(f, "GRPC"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConfigOption {
    pub key: String,
    pub value: String,
}

/// Endpoint template as defined on a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// URL pattern, may contain `{sid}`, `{rm}`, `{region}` and `{domain}`
    pub url: String,
    pub rpc_type: RpcType,
    #[serde(default)]
    pub configs: Vec<ConfigOption>,
}

/// Platform-defined offering a supplier can stake for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub service_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
    /// Suggested default shares shown when enabling the service. Only the
    /// address group's shares are used when building configs.
    #[serde(default)]
    pub rev_share: Vec<RevShareEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub display_name: String,
    /// Value substituted for `{region}` in endpoint templates
    pub url_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayMiner {
    pub identity: String,
    pub region: Region,
    pub domain: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevShareEntry {
    pub address: String,
    pub rev_share_percentage: Decimal,
}

impl RevShareEntry {
    pub fn new(address: impl Into<String>, rev_share_percentage: Decimal) -> Self {
        Self {
            address: address.into(),
            rev_share_percentage,
        }
    }
}

/// Per-service settings of an address group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressGroupService {
    pub service_id: String,
    #[serde(default)]
    pub rev_share: Vec<RevShareEntry>,
    /// Reward the node operator on top of the configured shares
    #[serde(default)]
    pub add_supplier_share: bool,
    #[serde(default)]
    pub supplier_share: Decimal,
}

/// Staking keys sharing one relay miner and one service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressGroup {
    pub name: String,
    pub relay_miner: RelayMiner,
    #[serde(default)]
    pub address_group_services: Vec<AddressGroupService>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEndpoint {
    pub url: String,
    pub rpc_type: RpcType,
    #[serde(default)]
    pub configs: Vec<ConfigOption>,
}

/// Transaction-ready configuration of one service for one supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierServiceConfig {
    pub service_id: String,
    pub rev_share: Vec<RevShareEntry>,
    pub endpoints: Vec<ResolvedEndpoint>,
}

impl SupplierServiceConfig {
    /// `None` when the percentages overflow a `Decimal`.
    pub fn total_rev_share(&self) -> Option<Decimal> {
        checked_total(&self.rev_share)
    }
}
